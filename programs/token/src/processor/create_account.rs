//! CreateAccount Processor
//!
//! Returns the holder account for an (owner, mint) pair, creating a
//! zero-balance, unfrozen one on first use.

use crate::error::{LedgerResult, TokenError};
use crate::ledger::TokenLedger;
use crate::state::{HolderAccount, Pack};
use crate::store::{AccountStore, StoreWrite};
use solana_program::{msg, pubkey::Pubkey};

/// Process CreateAccount
///
/// Idempotent: an existing account is returned untouched, balance included.
pub fn process<S: AccountStore>(
    ledger: &TokenLedger<S>,
    owner: Pubkey,
    mint: Pubkey,
) -> LedgerResult<Pubkey> {
    let address = ledger.holder_address(&owner, &mint);
    let _locks = ledger.locks().acquire(&[address]);

    // Mint must be registered
    ledger.load_mint(&mint)?;

    // Existing account: plain lookup
    if let Some(existing) = ledger.load_account_opt(&address)? {
        if existing.owner != owner || existing.mint != mint {
            return Err(TokenError::AlreadyInitialized);
        }
        return Ok(address);
    }

    let account = HolderAccount::new(owner, mint);
    ledger.commit(vec![StoreWrite::Put(address, account.pack_to_vec()?)])?;

    msg!("CreateAccount: {} owner={} mint={}", address, owner, mint);
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_create_account() {
        let ledger = TokenLedger::new(MemoryStore::new());
        let mint = ledger.create_mint(0, Pubkey::new_unique(), None).unwrap();
        let owner = Pubkey::new_unique();

        let address = ledger.create_account(owner, mint).unwrap();
        let account = ledger.account(&address).unwrap();

        assert_eq!(address, ledger.holder_address(&owner, &mint));
        assert_eq!(account.owner, owner);
        assert_eq!(account.mint, mint);
        assert_eq!(account.amount, 0);
        assert!(!account.is_frozen());
    }

    #[test]
    fn test_create_account_unknown_mint() {
        let ledger = TokenLedger::new(MemoryStore::new());

        assert_eq!(
            ledger
                .create_account(Pubkey::new_unique(), Pubkey::new_unique())
                .unwrap_err(),
            TokenError::UnknownMint
        );
        assert!(ledger.store().is_empty());
    }

    #[test]
    fn test_create_account_is_idempotent() {
        let ledger = TokenLedger::new(MemoryStore::new());
        let authority = Pubkey::new_unique();
        let mint = ledger.create_mint(0, authority, None).unwrap();
        let owner = Pubkey::new_unique();

        let first = ledger.create_account(owner, mint).unwrap();
        ledger.mint_to(&mint, &first, 7, &authority).unwrap();

        let second = ledger.create_account(owner, mint).unwrap();

        assert_eq!(first, second);
        assert_eq!(ledger.balance(&second).unwrap(), 7);
    }

    /// A foreign record sitting at the derived address is never overwritten.
    #[test]
    fn test_create_account_foreign_record() {
        let ledger = TokenLedger::new(MemoryStore::new());
        let mint = ledger.create_mint(0, Pubkey::new_unique(), None).unwrap();
        let owner = Pubkey::new_unique();
        let address = ledger.holder_address(&owner, &mint);

        let foreign = HolderAccount::new(Pubkey::new_unique(), mint);
        ledger
            .store()
            .put(&address, foreign.pack_to_vec().unwrap())
            .unwrap();

        assert_eq!(
            ledger.create_account(owner, mint).unwrap_err(),
            TokenError::AlreadyInitialized
        );
        assert_eq!(ledger.account(&address).unwrap(), foreign);
    }
}
