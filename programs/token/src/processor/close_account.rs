//! CloseAccount Processor
//!
//! Deletes an empty holder account from the store.

use crate::error::{LedgerResult, TokenError};
use crate::ledger::TokenLedger;
use crate::store::{AccountStore, StoreWrite};
use crate::utils::*;
use solana_program::{msg, pubkey::Pubkey};

/// Process CloseAccount
///
/// Records touched:
/// 0. `[writable]` Holder account to close
///
/// A later CreateAccount for the same (owner, mint) starts a fresh account.
pub fn process<S: AccountStore>(
    ledger: &TokenLedger<S>,
    account_id: &Pubkey,
    caller: &Pubkey,
) -> LedgerResult<()> {
    let _locks = ledger.locks().acquire(&[*account_id]);

    // Load account
    let account = ledger.load_account(account_id)?;

    // Validate owner
    validate_owner(&account, caller)?;

    // Frozen accounts stay put until thawed
    assert_not_frozen(&account)?;

    // Must have zero balance
    if account.amount != 0 {
        return Err(TokenError::NonZeroBalance);
    }

    ledger.commit(vec![StoreWrite::Remove(*account_id)])?;

    msg!("CloseAccount: {}", account_id);
    Ok(())
}
