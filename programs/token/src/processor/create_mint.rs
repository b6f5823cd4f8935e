//! CreateMint Processor
//!
//! Registers a new token type with zero supply.

use crate::error::{LedgerResult, TokenError};
use crate::ledger::TokenLedger;
use crate::state::{Mint, Pack};
use crate::store::{AccountStore, StoreWrite};
use crate::MAX_DECIMALS;
use solana_program::{msg, pubkey::Pubkey};

/// Process CreateMint
///
/// Derives candidate identifiers from the mint authority and a nonce until
/// one is free in the store, then writes the new record under its lock.
pub fn process<S: AccountStore>(
    ledger: &TokenLedger<S>,
    decimals: u8,
    mint_authority: Pubkey,
    freeze_authority: Option<Pubkey>,
) -> LedgerResult<Pubkey> {
    // Validate configuration
    if decimals > MAX_DECIMALS {
        return Err(TokenError::InvalidConfig);
    }

    let mint = Mint::new(decimals, mint_authority, freeze_authority);
    let data = mint.pack_to_vec()?;

    loop {
        let mint_id = ledger.next_mint_address(&mint_authority);
        let _locks = ledger.locks().acquire(&[mint_id]);

        // Taken by a mint from an earlier ledger instance over the same store
        if ledger.exists(&mint_id)? {
            continue;
        }

        ledger.commit(vec![StoreWrite::Put(mint_id, data)])?;

        msg!("CreateMint: {} decimals={}", mint_id, decimals);
        return Ok(mint_id);
    }
}
