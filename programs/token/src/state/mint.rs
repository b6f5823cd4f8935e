//! Mint Record
//!
//! A Mint defines a token type: who may create supply, who may freeze
//! holder accounts, how many tokens exist, and the display precision.
//!
//! # Size: 82 bytes

use crate::error::LedgerResult;
use crate::state::{pack_coption_pubkey, unpack_coption_pubkey, COption, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::pubkey::Pubkey;

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint record.
///
/// # Memory Layout (82 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 36   │ mint_authority   │ COption<Pubkey>             │
/// │ 36     │ 8    │ supply           │ u64                         │
/// │ 44     │ 1    │ decimals         │ u8                          │
/// │ 45     │ 1    │ is_initialized   │ bool (0 or 1)               │
/// │ 46     │ 36   │ freeze_authority │ COption<Pubkey>             │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 82   │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mint {
    /// Identity permitted to increase supply.
    ///
    /// Always set by `create_mint`; a record without one rejects every
    /// MintTo with `Unauthorized`.
    pub mint_authority: COption<Pubkey>,

    /// Total tokens in existence, in raw units.
    ///
    /// Equals the sum of every holder balance of this mint.
    pub supply: u64,

    /// Display precision. Amounts are always raw integer units.
    pub decimals: u8,

    /// Set once the record has been created.
    pub is_initialized: bool,

    /// Identity permitted to freeze and thaw holder accounts.
    pub freeze_authority: COption<Pubkey>,
}

impl Mint {
    /// Size of a Mint record: 36 + 8 + 1 + 1 + 36.
    pub const LEN: usize = 82;

    /// Create a fresh, initialized mint with zero supply.
    pub fn new(decimals: u8, mint_authority: Pubkey, freeze_authority: Option<Pubkey>) -> Self {
        Mint {
            mint_authority: COption::some(mint_authority),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: freeze_authority.into(),
        }
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 82;

    fn unpack(input: &[u8]) -> LedgerResult<Self> {
        let input = array_ref![input, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_authority_bytes,
            supply_bytes,
            decimals_bytes,
            is_initialized_bytes,
            freeze_authority_bytes,
        ) = array_refs![input, 36, 8, 1, 1, 36];

        Ok(Mint {
            mint_authority: unpack_coption_pubkey(mint_authority_bytes)?,
            supply: u64::from_le_bytes(*supply_bytes),
            decimals: decimals_bytes[0],
            is_initialized: is_initialized_bytes[0] != 0,
            freeze_authority: unpack_coption_pubkey(freeze_authority_bytes)?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> LedgerResult<()> {
        let output = array_mut_ref![output, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            mint_authority_dst,
            supply_dst,
            decimals_dst,
            is_initialized_dst,
            freeze_authority_dst,
        ) = mut_array_refs![output, 36, 8, 1, 1, 36];

        pack_coption_pubkey(&self.mint_authority, mint_authority_dst);
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        is_initialized_dst[0] = self.is_initialized as u8;
        pack_coption_pubkey(&self.freeze_authority, freeze_authority_dst);

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;

    #[test]
    fn test_mint_new_starts_empty() {
        let authority = Pubkey::new_unique();
        let mint = Mint::new(0, authority, None);

        assert!(mint.is_initialized);
        assert_eq!(mint.supply, 0);
        assert_eq!(mint.decimals, 0);
        assert_eq!(mint.mint_authority.as_ref(), Some(&authority));
        assert!(mint.freeze_authority.is_none());
    }

    /// Packed bytes land at the documented offsets.
    #[test]
    fn test_mint_layout_offsets() {
        let authority = Pubkey::new_unique();
        let freezer = Pubkey::new_unique();
        let mut mint = Mint::new(6, authority, Some(freezer));
        mint.supply = 0x0102_0304_0506_0708;

        let bytes = mint.pack_to_vec().unwrap();

        assert_eq!(bytes.len(), 82);
        assert_eq!(&bytes[0..4], &1u32.to_le_bytes());
        assert_eq!(&bytes[4..36], authority.as_ref());
        assert_eq!(&bytes[36..44], &mint.supply.to_le_bytes());
        assert_eq!(bytes[44], 6);
        assert_eq!(bytes[45], 1);
        assert_eq!(&bytes[50..82], freezer.as_ref());

        assert_eq!(Mint::unpack_from_slice(&bytes).unwrap(), mint);
    }

    /// All-zero bytes decode to an uninitialized mint.
    #[test]
    fn test_mint_uninitialized() {
        let packed = [0u8; Mint::LEN];
        let mint = Mint::unpack(&packed).unwrap();

        assert!(!mint.is_initialized);
        assert!(mint.mint_authority.is_none());
        assert_eq!(mint.supply, 0);
    }

    #[test]
    fn test_mint_wrong_size() {
        assert_eq!(
            Mint::unpack_from_slice(&[0u8; 81]).unwrap_err(),
            TokenError::InvalidAccountData
        );
        assert_eq!(
            Mint::unpack_from_slice(&[0u8; 83]).unwrap_err(),
            TokenError::InvalidAccountData
        );
    }

    #[test]
    fn test_mint_invalid_coption_tag() {
        let mut packed = [0u8; Mint::LEN];
        packed[46] = 7;

        assert!(Mint::unpack(&packed).is_err());
    }
}
