//! MintTo Processor
//!
//! Mints new tokens into a holder account, increasing supply.

use crate::error::LedgerResult;
use crate::ledger::TokenLedger;
use crate::state::Pack;
use crate::store::{AccountStore, StoreWrite};
use crate::utils::*;
use solana_program::{msg, pubkey::Pubkey};

/// Process MintTo
///
/// Records touched:
/// 0. `[writable]` Mint
/// 1. `[writable]` Destination holder account
///
/// Returns the destination's new balance.
pub fn process<S: AccountStore>(
    ledger: &TokenLedger<S>,
    mint_id: &Pubkey,
    destination: &Pubkey,
    amount: u64,
    caller: &Pubkey,
) -> LedgerResult<u64> {
    let _locks = ledger.locks().acquire(&[*mint_id, *destination]);

    // Load states
    let mut mint = ledger.load_mint(mint_id)?;
    let mut dest_account = ledger.load_account(destination)?;

    // Validate mint authority
    validate_authority(mint.mint_authority.as_ref(), caller)?;

    // Validate amount
    assert_nonzero_amount(amount)?;

    // Validate destination
    assert_not_frozen(&dest_account)?;
    assert_account_mint(&dest_account, mint_id)?;

    // Update balances
    mint.supply = checked_add(mint.supply, amount)?;
    dest_account.amount = checked_add(dest_account.amount, amount)?;

    // Save states
    ledger.commit(vec![
        StoreWrite::Put(*mint_id, mint.pack_to_vec()?),
        StoreWrite::Put(*destination, dest_account.pack_to_vec()?),
    ])?;

    msg!(
        "MintTo: {} +{} balance={} supply={}",
        destination,
        amount,
        dest_account.amount,
        mint.supply
    );
    Ok(dest_account.amount)
}
