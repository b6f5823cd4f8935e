//! Ledger Record Structures
//!
//! This module defines the records the ledger keeps in its account store.
//!
//! # Record Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | Mint | 82 bytes | Defines a token type |
//! | HolderAccount | 73 bytes | One owner's balance of one mint |
//!
//! # Serialization
//!
//! All records use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - No padding between fields
//! - Same data always produces same bytes
//!
//! ```ignore
//! let mint = Mint::unpack_from_slice(&bytes)?;   // Read
//! let bytes = mint.pack_to_vec()?;               // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod mint;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::{AccountState, HolderAccount};
pub use mint::Mint;

use crate::error::{LedgerResult, TokenError};
use arrayref::{array_refs, mut_array_refs};
use solana_program::pubkey::Pubkey;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking ledger records to/from bytes.
///
/// The store only ever sees the packed bytes, so any byte-oriented
/// key-value store can hold ledger state.
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    const LEN: usize;

    /// Deserialize from a byte slice of at least `Self::LEN` bytes.
    fn unpack(input: &[u8]) -> LedgerResult<Self>;

    /// Serialize into a byte slice of at least `Self::LEN` bytes.
    fn pack(&self, output: &mut [u8]) -> LedgerResult<()>;

    /// Unpack with length validation.
    ///
    /// Use this for anything read back from a store.
    fn unpack_from_slice(src: &[u8]) -> LedgerResult<Self> {
        if src.len() != Self::LEN {
            return Err(TokenError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    fn pack_into_slice(&self, dst: &mut [u8]) -> LedgerResult<()> {
        if dst.len() != Self::LEN {
            return Err(TokenError::InvalidAccountData);
        }
        self.pack(dst)
    }

    /// Pack into a freshly allocated buffer, ready for `AccountStore::put`.
    fn pack_to_vec(&self) -> LedgerResult<Vec<u8>> {
        let mut buf = vec![0u8; Self::LEN];
        self.pack_into_slice(&mut buf)?;
        Ok(buf)
    }
}

// =============================================================================
// COPTION - COMPACT OPTIONAL TYPE
// =============================================================================

/// A compact optional type with a fixed byte layout.
///
/// # Layout
///
/// ```text
/// COption<Pubkey>: 36 bytes
/// [tag: 4 bytes, little-endian u32][value: 32 bytes]
///
/// Tag = 0: None (value bytes are zeros)
/// Tag = 1: Some (value bytes contain the Pubkey)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct COption<T> {
    value: Option<T>,
}

impl<T> COption<T> {
    /// Create a COption with a value (Some variant).
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Create an empty COption (None variant).
    pub fn none() -> Self {
        Self { value: None }
    }

    /// Check if the COption contains a value.
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Check if the COption is empty.
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Get a reference to the inner value, if present.
    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> From<Option<T>> for COption<T> {
    fn from(opt: Option<T>) -> Self {
        Self { value: opt }
    }
}

impl<T> From<COption<T>> for Option<T> {
    fn from(copt: COption<T>) -> Self {
        copt.value
    }
}

// =============================================================================
// COPTION<PUBKEY> CODEC
// =============================================================================

/// Unpack a COption<Pubkey> from 36 bytes.
///
/// Any tag other than 0 or 1 is `InvalidAccountData`.
pub(crate) fn unpack_coption_pubkey(src: &[u8; 36]) -> LedgerResult<COption<Pubkey>> {
    let (tag, body) = array_refs![src, 4, 32];

    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(Pubkey::new_from_array(*body))),
        _ => Err(TokenError::InvalidAccountData),
    }
}

/// Pack a COption<Pubkey> into 36 bytes.
pub(crate) fn pack_coption_pubkey(src: &COption<Pubkey>, dst: &mut [u8; 36]) {
    let (tag, body) = mut_array_refs![dst, 4, 32];

    match src.as_ref() {
        Some(pubkey) => {
            *tag = 1u32.to_le_bytes();
            body.copy_from_slice(pubkey.as_ref());
        }
        None => {
            *tag = 0u32.to_le_bytes();
            body.fill(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coption_option_conversion() {
        let key = Pubkey::new_unique();
        let c: COption<Pubkey> = Some(key).into();
        assert!(c.is_some());
        assert_eq!(Option::<Pubkey>::from(c), Some(key));

        let empty: COption<Pubkey> = None.into();
        assert!(empty.is_none());
    }

    #[test]
    fn test_coption_pubkey_codec() {
        let key = Pubkey::new_unique();
        let mut buf = [0xffu8; 36];

        pack_coption_pubkey(&COption::some(key), &mut buf);
        assert_eq!(unpack_coption_pubkey(&buf).unwrap().as_ref(), Some(&key));

        pack_coption_pubkey(&COption::none(), &mut buf);
        assert_eq!(buf, [0u8; 36]);
        assert!(unpack_coption_pubkey(&buf).unwrap().is_none());
    }

    #[test]
    fn test_coption_bad_tag() {
        let mut buf = [0u8; 36];
        buf[0] = 2;
        assert_eq!(
            unpack_coption_pubkey(&buf).unwrap_err(),
            TokenError::InvalidAccountData
        );
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY FIXED SIZES?
================

The ledger never owns storage. Records leave the engine as bytes and come
back as bytes, possibly from a different process or a different build.
Fixed layouts mean:
- A wrong-sized value is detectable (InvalidAccountData)
- Old records stay readable as long as the layout is unchanged
- The same record always packs to the same bytes

THE COPTION TYPE
================

Option<Pubkey> has no guaranteed layout. COption<Pubkey> is always
[u32 tag][32 bytes], so an absent freeze authority occupies the same space
as a present one.

PACK TRAIT LEVELS
=================

Basic (must implement):
- unpack(&[u8]) -> LedgerResult<Self>
- pack(&mut [u8]) -> LedgerResult<()>

Safe wrappers (provided):
- unpack_from_slice / pack_into_slice: validate length first
- pack_to_vec: allocate and pack in one step
*/
