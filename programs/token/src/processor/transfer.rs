//! Transfer Processor
//!
//! Moves tokens between two holder accounts of the same mint.

use crate::error::{LedgerResult, TokenError};
use crate::ledger::TokenLedger;
use crate::state::Pack;
use crate::store::{AccountStore, StoreWrite};
use crate::utils::*;
use solana_program::{msg, pubkey::Pubkey};

/// Process Transfer
///
/// Records touched:
/// 0. `[writable]` Source holder account
/// 1. `[writable]` Destination holder account
///
/// Returns `(source balance, destination balance)` after the move.
/// A transfer to the same account is fully validated and changes nothing.
pub fn process<S: AccountStore>(
    ledger: &TokenLedger<S>,
    source: &Pubkey,
    destination: &Pubkey,
    amount: u64,
    caller: &Pubkey,
) -> LedgerResult<(u64, u64)> {
    let _locks = ledger.locks().acquire(&[*source, *destination]);

    // Load states
    let mut source_account = ledger.load_account(source)?;
    let mut dest_account = if source == destination {
        source_account
    } else {
        ledger.load_account(destination)?
    };

    // Validate owner
    validate_owner(&source_account, caller)?;

    // Validate mints match
    if source_account.mint != dest_account.mint {
        return Err(TokenError::MintMismatch);
    }

    // Validate not frozen
    assert_not_frozen(&source_account)?;
    assert_not_frozen(&dest_account)?;

    // Validate sufficient funds
    assert_sufficient_funds(&source_account, amount)?;

    if source == destination {
        return Ok((source_account.amount, dest_account.amount));
    }

    // Move tokens
    source_account.amount = checked_sub(source_account.amount, amount)?;
    dest_account.amount = checked_add(dest_account.amount, amount)?;

    // Save states
    ledger.commit(vec![
        StoreWrite::Put(*source, source_account.pack_to_vec()?),
        StoreWrite::Put(*destination, dest_account.pack_to_vec()?),
    ])?;

    msg!(
        "Transfer: {} -> {} amount={} balances={}/{}",
        source,
        destination,
        amount,
        source_account.amount,
        dest_account.amount
    );
    Ok((source_account.amount, dest_account.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    struct Fixture {
        ledger: TokenLedger<MemoryStore>,
        authority: Pubkey,
        mint: Pubkey,
        alice: Pubkey,
        alice_account: Pubkey,
        bob_account: Pubkey,
    }

    fn setup() -> Fixture {
        let ledger = TokenLedger::new(MemoryStore::new());
        let authority = Pubkey::new_unique();
        let mint = ledger.create_mint(0, authority, Some(authority)).unwrap();
        let alice = Pubkey::new_unique();
        let alice_account = ledger.create_account(alice, mint).unwrap();
        let bob_account = ledger.create_account(Pubkey::new_unique(), mint).unwrap();
        ledger.mint_to(&mint, &alice_account, 10, &authority).unwrap();
        Fixture {
            ledger,
            authority,
            mint,
            alice,
            alice_account,
            bob_account,
        }
    }

    #[test]
    fn test_transfer() {
        let f = setup();

        assert_eq!(
            f.ledger
                .transfer(&f.alice_account, &f.bob_account, 5, &f.alice)
                .unwrap(),
            (5, 5)
        );
        assert_eq!(f.ledger.supply(&f.mint).unwrap(), 10);
    }

    #[test]
    fn test_transfer_not_owner() {
        let f = setup();

        assert_eq!(
            f.ledger
                .transfer(&f.alice_account, &f.bob_account, 5, &f.authority)
                .unwrap_err(),
            TokenError::Unauthorized
        );
        assert_eq!(f.ledger.balance(&f.alice_account).unwrap(), 10);
    }

    #[test]
    fn test_transfer_insufficient_funds() {
        let f = setup();

        assert_eq!(
            f.ledger
                .transfer(&f.alice_account, &f.bob_account, 11, &f.alice)
                .unwrap_err(),
            TokenError::InsufficientFunds
        );
        assert_eq!(f.ledger.balance(&f.alice_account).unwrap(), 10);
        assert_eq!(f.ledger.balance(&f.bob_account).unwrap(), 0);
    }

    #[test]
    fn test_transfer_mint_mismatch() {
        let f = setup();
        let other_mint = f.ledger.create_mint(0, f.authority, None).unwrap();
        let other_account = f.ledger.create_account(f.alice, other_mint).unwrap();

        assert_eq!(
            f.ledger
                .transfer(&f.alice_account, &other_account, 1, &f.alice)
                .unwrap_err(),
            TokenError::MintMismatch
        );
    }

    #[test]
    fn test_transfer_into_frozen_account() {
        let f = setup();
        f.ledger
            .set_frozen(&f.mint, &f.bob_account, true, &f.authority)
            .unwrap();

        assert_eq!(
            f.ledger
                .transfer(&f.alice_account, &f.bob_account, 1, &f.alice)
                .unwrap_err(),
            TokenError::AccountFrozen
        );
    }

    #[test]
    fn test_transfer_to_self() {
        let f = setup();

        assert_eq!(
            f.ledger
                .transfer(&f.alice_account, &f.alice_account, 4, &f.alice)
                .unwrap(),
            (10, 10)
        );
        assert_eq!(
            f.ledger
                .transfer(&f.alice_account, &f.alice_account, 11, &f.alice)
                .unwrap_err(),
            TokenError::InsufficientFunds
        );
        assert_eq!(f.ledger.balance(&f.alice_account).unwrap(), 10);
    }

    #[test]
    fn test_transfer_zero() {
        let f = setup();

        assert_eq!(
            f.ledger
                .transfer(&f.alice_account, &f.bob_account, 0, &f.alice)
                .unwrap(),
            (10, 0)
        );
    }
}
