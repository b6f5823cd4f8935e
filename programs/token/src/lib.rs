//! # Token Ledger
//!
//! A fungible-token ledger engine: mints, holder accounts, and the
//! operations that move balances between them under authority checks.
//!
//! ## Overview
//!
//! This crate allows you to:
//! - Create token mints (define new token types)
//! - Create holder accounts (one per owner and mint)
//! - Mint new tokens (increase supply)
//! - Transfer tokens between accounts
//! - Burn tokens (decrease supply)
//! - Freeze and thaw accounts
//! - Close empty accounts
//!
//! Every operation is atomic: it validates everything first, then commits
//! all of its writes as one batch, or returns an error and writes nothing.
//!
//! ## Record Types
//!
//! | Record | Size | Description |
//! |--------|------|-------------|
//! | Mint | 82 bytes | Defines a token type |
//! | HolderAccount | 73 bytes | Holds tokens for an owner |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | CreateMint | Create a new token mint |
//! | 1 | CreateAccount | Create or look up a holder account |
//! | 2 | MintTo | Mint new tokens |
//! | 3 | Transfer | Transfer tokens |
//! | 4 | Burn | Burn tokens |
//! | 5 | FreezeAccount | Freeze an account |
//! | 6 | ThawAccount | Thaw a frozen account |
//! | 7 | CloseAccount | Delete an empty account |
//!
//! ## Example
//!
//! ```ignore
//! use token_ledger::{MemoryStore, TokenLedger};
//!
//! let ledger = TokenLedger::new(MemoryStore::new());
//! let mint = ledger.create_mint(0, authority, Some(authority))?;
//! let alice_account = ledger.create_account(alice, mint)?;
//! let bob_account = ledger.create_account(bob, mint)?;
//!
//! ledger.mint_to(&mint, &alice_account, 10, &authority)?;
//! ledger.transfer(&alice_account, &bob_account, 5, &alice)?;
//! ledger.burn(&mint, &alice_account, 5, &alice)?;
//! ```

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Error types with stable codes
pub mod error;

/// Instruction definitions and parsing
pub mod instruction;

/// The ledger engine
pub mod ledger;

/// Operation processors (business logic)
pub mod processor;

/// Record structures (Mint, HolderAccount)
pub mod state;

/// Account store seam and in-memory store
pub mod store;

/// Precondition checks, authority checks, lock table
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::{LedgerResult, TokenError};
pub use instruction::TokenInstruction;
pub use ledger::TokenLedger;
pub use processor::{LedgerOutcome, Processor};
pub use state::{AccountState, HolderAccount, Mint, Pack};
pub use store::{AccountStore, MemoryStore, StoreWrite};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Largest accepted mint precision: 10^19 is the largest power of ten that
/// fits in a u64, so one whole token is still representable.
pub const MAX_DECIMALS: u8 = 19;

// Default namespace for derived mint and holder account identifiers.
solana_program::declare_id!("EGLQX6HoYfPxnNd8LSQh4taqPFLXhAjeUxtrU65Zn8TU");
