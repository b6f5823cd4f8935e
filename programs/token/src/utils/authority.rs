//! Authority Validation Utilities
//!
//! The ledger receives an already-authenticated caller identity from the
//! execution layer that verified signatures upstream. Authority checks are
//! therefore capability checks: the caller must equal the identity stored on
//! the record.
//!
//! | Operation | Required authority |
//! |-----------|--------------------|
//! | MintTo | `mint.mint_authority` |
//! | Freeze / Thaw | `mint.freeze_authority` |
//! | Transfer / Burn / Close | `account.owner` |
//!
//! ```ignore
//! validate_authority(mint.mint_authority.as_ref(), caller)?;
//! validate_owner(&source, caller)?;
//! ```

use crate::error::{LedgerResult, TokenError};
use crate::state::HolderAccount;
use solana_program::pubkey::Pubkey;

// =============================================================================
// AUTHORITY VALIDATION
// =============================================================================

/// Validate that `caller` is the expected authority.
///
/// An unset authority (`None`) matches no caller: a mint without a freeze
/// authority can never freeze.
///
/// # Errors
///
/// * `Unauthorized` - authority unset, or caller differs
pub fn validate_authority(expected_authority: Option<&Pubkey>, caller: &Pubkey) -> LedgerResult<()> {
    match expected_authority {
        Some(expected) if expected == caller => Ok(()),
        _ => Err(TokenError::Unauthorized),
    }
}

/// Validate that `caller` owns the holder account.
///
/// # Errors
///
/// * `Unauthorized` - caller is not `account.owner`
pub fn validate_owner(account: &HolderAccount, caller: &Pubkey) -> LedgerResult<()> {
    validate_authority(Some(&account.owner), caller)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
