//! Burn Processor
//!
//! Burns (destroys) tokens held by a holder account, decreasing supply.

use crate::error::LedgerResult;
use crate::ledger::TokenLedger;
use crate::state::Pack;
use crate::store::{AccountStore, StoreWrite};
use crate::utils::*;
use solana_program::{msg, pubkey::Pubkey};

/// Process Burn
///
/// Records touched:
/// 0. `[writable]` Mint
/// 1. `[writable]` Source holder account
///
/// Returns the source's new balance.
pub fn process<S: AccountStore>(
    ledger: &TokenLedger<S>,
    mint_id: &Pubkey,
    source: &Pubkey,
    amount: u64,
    caller: &Pubkey,
) -> LedgerResult<u64> {
    let _locks = ledger.locks().acquire(&[*mint_id, *source]);

    // Load states
    let mut mint = ledger.load_mint(mint_id)?;
    let mut account = ledger.load_account(source)?;

    // Validate owner
    validate_owner(&account, caller)?;

    // Validate mint matches
    assert_account_mint(&account, mint_id)?;

    // Validate not frozen
    assert_not_frozen(&account)?;

    // Validate sufficient funds
    assert_sufficient_funds(&account, amount)?;

    // Burn tokens
    account.amount = checked_sub(account.amount, amount)?;
    mint.supply = checked_sub(mint.supply, amount)?;

    // Save states
    ledger.commit(vec![
        StoreWrite::Put(*mint_id, mint.pack_to_vec()?),
        StoreWrite::Put(*source, account.pack_to_vec()?),
    ])?;

    msg!(
        "Burn: {} -{} balance={} supply={}",
        source,
        amount,
        account.amount,
        mint.supply
    );
    Ok(account.amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use crate::store::MemoryStore;

    fn setup() -> (TokenLedger<MemoryStore>, Pubkey, Pubkey, Pubkey, Pubkey) {
        let ledger = TokenLedger::new(MemoryStore::new());
        let authority = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mint = ledger.create_mint(0, authority, Some(authority)).unwrap();
        let account = ledger.create_account(owner, mint).unwrap();
        ledger.mint_to(&mint, &account, 10, &authority).unwrap();
        (ledger, authority, owner, mint, account)
    }

    #[test]
    fn test_burn() {
        let (ledger, _, owner, mint, account) = setup();

        assert_eq!(ledger.burn(&mint, &account, 4, &owner).unwrap(), 6);
        assert_eq!(ledger.supply(&mint).unwrap(), 6);

        assert_eq!(ledger.burn(&mint, &account, 6, &owner).unwrap(), 0);
        assert_eq!(ledger.supply(&mint).unwrap(), 0);
    }

    /// Only the owner burns; the mint authority has no say over balances.
    #[test]
    fn test_burn_by_mint_authority_rejected() {
        let (ledger, authority, _, mint, account) = setup();

        assert_eq!(
            ledger.burn(&mint, &account, 1, &authority).unwrap_err(),
            TokenError::Unauthorized
        );
        assert_eq!(ledger.balance(&account).unwrap(), 10);
    }

    #[test]
    fn test_burn_insufficient_funds() {
        let (ledger, _, owner, mint, account) = setup();

        assert_eq!(
            ledger.burn(&mint, &account, 11, &owner).unwrap_err(),
            TokenError::InsufficientFunds
        );
        assert_eq!(ledger.balance(&account).unwrap(), 10);
        assert_eq!(ledger.supply(&mint).unwrap(), 10);
    }

    #[test]
    fn test_burn_frozen() {
        let (ledger, authority, owner, mint, account) = setup();
        ledger.set_frozen(&mint, &account, true, &authority).unwrap();

        assert_eq!(
            ledger.burn(&mint, &account, 1, &owner).unwrap_err(),
            TokenError::AccountFrozen
        );
        assert_eq!(ledger.supply(&mint).unwrap(), 10);
    }

    #[test]
    fn test_burn_wrong_mint() {
        let (ledger, authority, owner, _, account) = setup();
        let other_mint = ledger.create_mint(0, authority, None).unwrap();

        assert_eq!(
            ledger.burn(&other_mint, &account, 1, &owner).unwrap_err(),
            TokenError::MintMismatch
        );
    }
}
