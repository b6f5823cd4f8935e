//! Freeze / Thaw Processor
//!
//! Sets or clears the frozen state of a holder account.

use crate::error::LedgerResult;
use crate::ledger::TokenLedger;
use crate::state::{AccountState, Pack};
use crate::store::{AccountStore, StoreWrite};
use crate::utils::*;
use solana_program::{msg, pubkey::Pubkey};

/// Process FreezeAccount (`frozen = true`) or ThawAccount (`frozen = false`)
///
/// Records touched:
/// 0. `[writable]` Holder account
/// 1. `[]` Mint (authorities are immutable, so it is read without a lock)
pub fn process<S: AccountStore>(
    ledger: &TokenLedger<S>,
    mint_id: &Pubkey,
    account_id: &Pubkey,
    frozen: bool,
    caller: &Pubkey,
) -> LedgerResult<()> {
    let _locks = ledger.locks().acquire(&[*account_id]);

    // Load states
    let mint = ledger.load_mint(mint_id)?;
    let mut account = ledger.load_account(account_id)?;

    // Validate freeze authority
    validate_authority(mint.freeze_authority.as_ref(), caller)?;

    // Validate account is for this mint
    assert_account_mint(&account, mint_id)?;

    let state = if frozen {
        AccountState::Frozen
    } else {
        AccountState::Initialized
    };
    if account.state == state {
        msg!("SetFrozen: {} already frozen={}, unchanged", account_id, frozen);
        return Ok(());
    }
    account.state = state;

    // Save account
    ledger.commit(vec![StoreWrite::Put(*account_id, account.pack_to_vec()?)])?;

    msg!("SetFrozen: {} frozen={}", account_id, frozen);
    Ok(())
}
