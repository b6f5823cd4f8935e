//! Assertion Helper Functions
//!
//! Common precondition checks used across all processors.
//! Every processor runs its checks first and only then builds the writes
//! it hands to the store.
//!
//! ```ignore
//! pub fn process(...) -> LedgerResult<u64> {
//!     validate_authority(mint.mint_authority.as_ref(), caller)?;
//!     assert_nonzero_amount(amount)?;
//!     assert_not_frozen(&destination)?;
//!
//!     // Then compute and commit
//!     ...
//! }
//! ```

use crate::error::{LedgerResult, TokenError};
use crate::state::HolderAccount;
use num_traits::{CheckedAdd, CheckedSub};
use solana_program::pubkey::Pubkey;

// =============================================================================
// STATE CHECKS
// =============================================================================

/// Assert that a holder account is not frozen.
///
/// # Errors
///
/// Returns `AccountFrozen` if the freeze authority has locked it.
pub fn assert_not_frozen(account: &HolderAccount) -> LedgerResult<()> {
    if account.is_frozen() {
        Err(TokenError::AccountFrozen)
    } else {
        Ok(())
    }
}

/// Assert that a holder account belongs to `mint`.
///
/// # Errors
///
/// Returns `MintMismatch` otherwise.
pub fn assert_account_mint(account: &HolderAccount, mint: &Pubkey) -> LedgerResult<()> {
    if account.mint != *mint {
        Err(TokenError::MintMismatch)
    } else {
        Ok(())
    }
}

// =============================================================================
// AMOUNT CHECKS
// =============================================================================

/// Assert that an amount is strictly positive.
///
/// # Errors
///
/// Returns `InvalidAmount` for zero.
pub fn assert_nonzero_amount(amount: u64) -> LedgerResult<()> {
    if amount == 0 {
        Err(TokenError::InvalidAmount)
    } else {
        Ok(())
    }
}

/// Assert that a holder account can cover `amount`.
///
/// # Errors
///
/// Returns `InsufficientFunds` if the balance is lower.
pub fn assert_sufficient_funds(account: &HolderAccount, amount: u64) -> LedgerResult<()> {
    if account.amount < amount {
        Err(TokenError::InsufficientFunds)
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition that returns `Overflow` instead of wrapping.
///
/// ```ignore
/// mint.supply = checked_add(mint.supply, amount)?;
/// ```
pub fn checked_add<T: CheckedAdd>(a: T, b: T) -> LedgerResult<T> {
    a.checked_add(&b).ok_or(TokenError::Overflow)
}

/// Checked subtraction that returns `InsufficientFunds` instead of wrapping.
///
/// ```ignore
/// source.amount = checked_sub(source.amount, amount)?;
/// ```
pub fn checked_sub<T: CheckedSub>(a: T, b: T) -> LedgerResult<T> {
    a.checked_sub(&b).ok_or(TokenError::InsufficientFunds)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AccountState;

    #[test]
    fn test_checked_add_success() {
        assert_eq!(checked_add(100u64, 200).unwrap(), 300);
        assert_eq!(checked_add(0u64, 0).unwrap(), 0);
        assert_eq!(checked_add(u64::MAX - 1, 1).unwrap(), u64::MAX);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(checked_add(u64::MAX, 1).unwrap_err(), TokenError::Overflow);
        assert!(checked_add(u64::MAX, u64::MAX).is_err());
    }

    #[test]
    fn test_checked_sub_success() {
        assert_eq!(checked_sub(300u64, 200).unwrap(), 100);
        assert_eq!(checked_sub(100u64, 100).unwrap(), 0);
    }

    #[test]
    fn test_checked_sub_underflow() {
        assert_eq!(checked_sub(0u64, 1).unwrap_err(), TokenError::InsufficientFunds);
        assert!(checked_sub(100u64, 101).is_err());
    }

    #[test]
    fn test_state_checks() {
        let mint = Pubkey::new_unique();
        let mut account = HolderAccount::new(Pubkey::new_unique(), mint);
        account.amount = 5;

        assert!(assert_not_frozen(&account).is_ok());
        assert!(assert_account_mint(&account, &mint).is_ok());
        assert_eq!(
            assert_account_mint(&account, &Pubkey::new_unique()).unwrap_err(),
            TokenError::MintMismatch
        );
        assert!(assert_sufficient_funds(&account, 5).is_ok());
        assert_eq!(
            assert_sufficient_funds(&account, 6).unwrap_err(),
            TokenError::InsufficientFunds
        );

        account.state = AccountState::Frozen;
        assert_eq!(assert_not_frozen(&account).unwrap_err(), TokenError::AccountFrozen);
    }

    #[test]
    fn test_nonzero_amount() {
        assert_eq!(assert_nonzero_amount(0).unwrap_err(), TokenError::InvalidAmount);
        assert!(assert_nonzero_amount(1).is_ok());
    }
}
