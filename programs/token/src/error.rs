//! Ledger Error Types
//!
//! This module defines every error the token ledger can return.
//! Each error has a stable numeric code so hosts can match on it.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-6 | Operation rejections (request must be corrected) |
//! | 7-10 | Lookup and lifecycle errors |
//! | 11-13 | Record and instruction decoding errors |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::{LedgerResult, TokenError};
//!
//! fn some_check(frozen: bool) -> LedgerResult<()> {
//!     if frozen {
//!         return Err(TokenError::AccountFrozen);
//!     }
//!     Ok(())
//! }
//! ```

use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Result type returned by every ledger operation.
pub type LedgerResult<T> = Result<T, TokenError>;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the token ledger.
///
/// Every rejection leaves ledger state exactly as it was before the call.
///
/// # Important
///
/// NEVER reorder these variants. Hosts depend on stable error codes.
/// Always add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenError {
    // =========================================================================
    // OPERATION REJECTIONS (0-6)
    // =========================================================================

    /// Error 0: Mint configuration is invalid.
    ///
    /// Decimals above `MAX_DECIMALS` cannot be represented in a u64.
    #[error("Invalid mint configuration")]
    InvalidConfig,

    /// Error 1: The mint identifier is not registered.
    #[error("Unknown mint")]
    UnknownMint,

    /// Error 2: The caller is not the authority this operation requires.
    ///
    /// Mint authority for MintTo, owner for Transfer/Burn/Close,
    /// freeze authority for Freeze/Thaw.
    #[error("Caller is not authorized for this operation")]
    Unauthorized,

    /// Error 3: Amount is not acceptable (zero on MintTo).
    #[error("Invalid amount")]
    InvalidAmount,

    /// Error 4: Account is frozen.
    ///
    /// No balance may move into or out of a frozen account.
    #[error("Account is frozen")]
    AccountFrozen,

    /// Error 5: Accounts hold different mints.
    #[error("Mint mismatch")]
    MintMismatch,

    /// Error 6: Balance is lower than the requested amount.
    #[error("Insufficient funds")]
    InsufficientFunds,

    // =========================================================================
    // LOOKUP AND LIFECYCLE ERRORS (7-10)
    // =========================================================================

    /// Error 7: The holder account identifier is not registered.
    #[error("Unknown account")]
    UnknownAccount,

    /// Error 8: Arithmetic overflow.
    ///
    /// Minting would push supply or a balance above u64::MAX.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 9: Cannot close an account that still holds tokens.
    #[error("Account has non-zero balance")]
    NonZeroBalance,

    /// Error 10: A record already exists under this identifier.
    #[error("Account already initialized")]
    AlreadyInitialized,

    // =========================================================================
    // DECODING AND STORAGE ERRORS (11-13)
    // =========================================================================

    /// Error 11: Could not parse instruction data or its account list.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 12: A stored record has the wrong length or an invalid tag.
    #[error("Invalid account data")]
    InvalidAccountData,

    /// Error 13: The account store failed to read or commit.
    #[error("Account storage failure")]
    StorageFailure,
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert TokenError to ProgramError for hosts that report program errors.
///
/// The code is the variant's position: InvalidConfig = 0, UnknownMint = 1, ...
impl From<TokenError> for ProgramError {
    fn from(e: TokenError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ProgramError::from(TokenError::InvalidConfig), ProgramError::Custom(0));
        assert_eq!(ProgramError::from(TokenError::Unauthorized), ProgramError::Custom(2));
        assert_eq!(
            ProgramError::from(TokenError::InsufficientFunds),
            ProgramError::Custom(6)
        );
        assert_eq!(ProgramError::from(TokenError::StorageFailure), ProgramError::Custom(13));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TokenError::AccountFrozen.to_string(), "Account is frozen");
        assert_eq!(TokenError::MintMismatch.to_string(), "Mint mismatch");
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

ONE ENUM, COPY SEMANTICS
========================

TokenError carries no payload, so it is Copy.
Processors return it by value with `?` and tests compare it with assert_eq!.

ERROR CODE STABILITY
====================

Hosts may persist or forward the numeric code (ProgramError::Custom(n)).
Reordering variants silently changes every code after the move.

Safe changes:
- Add new variants at the end
- Change error messages

Unsafe changes:
- Reorder, remove or insert variants

RETRYABILITY
============

Everything except StorageFailure is a validation failure: the caller must
change the request. StorageFailure reports a store fault; the ledger never
retries on its own.
*/
