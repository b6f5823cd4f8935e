//! Account Store
//!
//! The ledger never owns storage. Every Mint and HolderAccount record lives
//! in an external key-value store addressed by its 32-byte identifier, and
//! the ledger borrows records for the duration of one operation.
//!
//! # Contract
//!
//! - `get` returns the packed bytes last written for an identifier
//! - `commit` applies a batch of writes all-or-nothing; the default rolls
//!   back a partial batch through `put`/`remove`
//! - Records are opaque bytes to the store; see [`crate::state::Pack`]

use crate::error::{LedgerResult, TokenError};
use dashmap::DashMap;
use solana_program::{msg, pubkey::Pubkey};

// =============================================================================
// WRITE BATCH
// =============================================================================

/// One write in a committed batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreWrite {
    /// Create or overwrite the record at this identifier.
    Put(Pubkey, Vec<u8>),

    /// Delete the record at this identifier.
    Remove(Pubkey),
}

impl StoreWrite {
    /// Identifier this write targets.
    pub fn id(&self) -> &Pubkey {
        match self {
            StoreWrite::Put(id, _) | StoreWrite::Remove(id) => id,
        }
    }
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Get/put-by-identifier collaborator the ledger reads and writes through.
pub trait AccountStore: Send + Sync {
    /// Read the record stored at `id`, if any.
    fn get(&self, id: &Pubkey) -> LedgerResult<Option<Vec<u8>>>;

    /// Create or overwrite the record at `id`.
    fn put(&self, id: &Pubkey, data: Vec<u8>) -> LedgerResult<()>;

    /// Delete the record at `id`. Deleting a missing record is not an error.
    fn remove(&self, id: &Pubkey) -> LedgerResult<()>;

    /// Apply every write of one ledger operation, all or nothing.
    ///
    /// The ledger calls this exactly once per successful mutation, after all
    /// validation, while holding the locks of every identifier in the batch.
    ///
    /// The default applies writes one at a time. It snapshots every record
    /// in the batch first, and if a write fails it restores the records
    /// already written, newest first, before returning the error. A store
    /// with native transactions should override this.
    fn commit(&self, writes: Vec<StoreWrite>) -> LedgerResult<()> {
        // Snapshot before the first write
        let prior = writes
            .iter()
            .map(|write| self.get(write.id()))
            .collect::<LedgerResult<Vec<_>>>()?;

        for (applied, write) in writes.iter().enumerate() {
            let result = match write {
                StoreWrite::Put(id, data) => self.put(id, data.clone()),
                StoreWrite::Remove(id) => self.remove(id),
            };

            if let Err(e) = result {
                msg!("Store write failed on {}, rolling back {} write(s)", write.id(), applied);
                for (done, previous) in writes[..applied].iter().zip(&prior[..applied]).rev() {
                    let restored = match previous {
                        Some(data) => self.put(done.id(), data.clone()),
                        None => self.remove(done.id()),
                    };
                    if restored.is_err() {
                        msg!("Rollback failed on {}", done.id());
                        return Err(TokenError::StorageFailure);
                    }
                }
                return Err(e);
            }
        }
        Ok(())
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Concurrent in-memory store.
///
/// Each `get`/`put` is atomic per identifier. Multi-record atomicity comes
/// from the ledger's lock table: no other ledger operation can observe a
/// half-applied batch because every identifier in it is locked.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<Pubkey, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of every stored identifier.
    pub fn ids(&self) -> Vec<Pubkey> {
        self.records.iter().map(|entry| *entry.key()).collect()
    }
}

impl AccountStore for MemoryStore {
    fn get(&self, id: &Pubkey) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.records.get(id).map(|data| data.value().clone()))
    }

    fn put(&self, id: &Pubkey, data: Vec<u8>) -> LedgerResult<()> {
        self.records.insert(*id, data);
        Ok(())
    }

    fn remove(&self, id: &Pubkey) -> LedgerResult<()> {
        self.records.remove(id);
        Ok(())
    }
}
