//! Token Ledger Engine
//!
//! `TokenLedger` ties together the account store, the per-record lock table
//! and the program id that namespaces derived identifiers. Each public
//! operation routes to its processor in [`crate::processor`].
//!
//! # Atomicity
//!
//! Every mutating operation follows the same shape:
//!
//! ```text
//! 1. Lock every record it touches (ascending identifier order)
//! 2. Load the records from the store
//! 3. Validate every precondition
//! 4. Compute the new records
//! 5. Commit all writes as one batch
//! 6. Release the locks
//! ```
//!
//! A rejection in step 3 or 4 returns before anything is written.
//!
//! # Example
//!
//! ```ignore
//! let ledger = TokenLedger::new(MemoryStore::new());
//! let mint = ledger.create_mint(0, authority, Some(authority))?;
//! let alice = ledger.create_account(alice_key, mint)?;
//! ledger.mint_to(&mint, &alice, 10, &authority)?;
//! ```

use crate::error::{LedgerResult, TokenError};
use crate::processor;
use crate::state::{HolderAccount, Mint, Pack};
use crate::store::{AccountStore, StoreWrite};
use crate::utils::locks::LockTable;
use solana_program::pubkey::Pubkey;
use std::sync::atomic::{AtomicU64, Ordering};

/// Seed prefix for mint identifiers.
pub const MINT_SEED: &[u8] = b"mint";

// =============================================================================
// LEDGER
// =============================================================================

/// The token ledger engine.
///
/// `TokenLedger<S>` is `Send + Sync`; share it across threads with `Arc`.
#[derive(Debug)]
pub struct TokenLedger<S: AccountStore> {
    store: S,
    locks: LockTable,
    program_id: Pubkey,
    mint_nonce: AtomicU64,
}

impl<S: AccountStore> TokenLedger<S> {
    /// Create a ledger over `store`, namespaced by this crate's program id.
    pub fn new(store: S) -> Self {
        Self::with_program_id(store, crate::id())
    }

    /// Create a ledger whose derived identifiers live under `program_id`.
    pub fn with_program_id(store: S, program_id: Pubkey) -> Self {
        TokenLedger {
            store,
            locks: LockTable::new(),
            program_id,
            mint_nonce: AtomicU64::new(0),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The program id namespacing derived identifiers.
    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// The per-record lock table.
    pub fn locks(&self) -> &LockTable {
        &self.locks
    }

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================

    /// Identifier of the holder account for (owner, mint).
    ///
    /// Deterministic, so `create_account` finds an existing account without a
    /// secondary index.
    pub fn holder_address(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[owner.as_ref(), mint.as_ref()], &self.program_id).0
    }

    /// Next candidate identifier for a mint created by `mint_authority`.
    pub(crate) fn next_mint_address(&self, mint_authority: &Pubkey) -> Pubkey {
        let nonce = self.mint_nonce.fetch_add(1, Ordering::Relaxed);
        Pubkey::find_program_address(
            &[MINT_SEED, mint_authority.as_ref(), &nonce.to_le_bytes()],
            &self.program_id,
        )
        .0
    }

    // =========================================================================
    // RECORD ACCESS
    // =========================================================================

    /// True if any record is stored at `id`.
    pub(crate) fn exists(&self, id: &Pubkey) -> LedgerResult<bool> {
        Ok(self.store.get(id)?.is_some())
    }

    /// Load an initialized mint.
    ///
    /// # Errors
    ///
    /// * `UnknownMint` - nothing stored, or the record is not initialized
    /// * `InvalidAccountData` - the record does not decode as a mint
    pub(crate) fn load_mint(&self, id: &Pubkey) -> LedgerResult<Mint> {
        let data = self.store.get(id)?.ok_or(TokenError::UnknownMint)?;
        let mint = Mint::unpack_from_slice(&data)?;
        if !mint.is_initialized {
            return Err(TokenError::UnknownMint);
        }
        Ok(mint)
    }

    /// Load an initialized holder account.
    ///
    /// # Errors
    ///
    /// * `UnknownAccount` - nothing stored, or the record is not initialized
    /// * `InvalidAccountData` - the record does not decode as a holder account
    pub(crate) fn load_account(&self, id: &Pubkey) -> LedgerResult<HolderAccount> {
        self.load_account_opt(id)?.ok_or(TokenError::UnknownAccount)
    }

    /// Like `load_account`, but a missing record is `Ok(None)`.
    pub(crate) fn load_account_opt(&self, id: &Pubkey) -> LedgerResult<Option<HolderAccount>> {
        match self.store.get(id)? {
            None => Ok(None),
            Some(data) => {
                let account = HolderAccount::unpack_from_slice(&data)?;
                if !account.is_initialized() {
                    return Err(TokenError::UnknownAccount);
                }
                Ok(Some(account))
            }
        }
    }

    /// Hand one operation's writes to the store.
    pub(crate) fn commit(&self, writes: Vec<StoreWrite>) -> LedgerResult<()> {
        self.store.commit(writes)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Register a new mint with zero supply and return its identifier.
    pub fn create_mint(
        &self,
        decimals: u8,
        mint_authority: Pubkey,
        freeze_authority: Option<Pubkey>,
    ) -> LedgerResult<Pubkey> {
        processor::create_mint::process(self, decimals, mint_authority, freeze_authority)
    }

    /// Return the holder account for (owner, mint), creating it if needed.
    pub fn create_account(&self, owner: Pubkey, mint: Pubkey) -> LedgerResult<Pubkey> {
        processor::create_account::process(self, owner, mint)
    }

    /// Mint `amount` new tokens into `destination`; returns its new balance.
    pub fn mint_to(
        &self,
        mint: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        caller: &Pubkey,
    ) -> LedgerResult<u64> {
        processor::mint_to::process(self, mint, destination, amount, caller)
    }

    /// Move `amount` from `source` to `destination`; returns both new balances.
    pub fn transfer(
        &self,
        source: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        caller: &Pubkey,
    ) -> LedgerResult<(u64, u64)> {
        processor::transfer::process(self, source, destination, amount, caller)
    }

    /// Destroy `amount` tokens held by `source`; returns its new balance.
    pub fn burn(
        &self,
        mint: &Pubkey,
        source: &Pubkey,
        amount: u64,
        caller: &Pubkey,
    ) -> LedgerResult<u64> {
        processor::burn::process(self, mint, source, amount, caller)
    }

    /// Freeze (`true`) or thaw (`false`) a holder account.
    ///
    /// Requesting the state the account is already in succeeds without a
    /// store write. Authority and mint checks still apply.
    pub fn set_frozen(
        &self,
        mint: &Pubkey,
        account: &Pubkey,
        frozen: bool,
        caller: &Pubkey,
    ) -> LedgerResult<()> {
        processor::freeze_account::process(self, mint, account, frozen, caller)
    }

    /// Delete an empty holder account.
    pub fn close_account(&self, account: &Pubkey, caller: &Pubkey) -> LedgerResult<()> {
        processor::close_account::process(self, account, caller)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Current mint record.
    pub fn mint(&self, id: &Pubkey) -> LedgerResult<Mint> {
        self.load_mint(id)
    }

    /// Current holder account record.
    pub fn account(&self, id: &Pubkey) -> LedgerResult<HolderAccount> {
        self.load_account(id)
    }

    /// Current balance of a holder account.
    pub fn balance(&self, id: &Pubkey) -> LedgerResult<u64> {
        Ok(self.load_account(id)?.amount)
    }

    /// Current total supply of a mint.
    pub fn supply(&self, id: &Pubkey) -> LedgerResult<u64> {
        Ok(self.load_mint(id)?.supply)
    }
}
