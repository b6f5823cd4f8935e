//! Instruction Processors
//!
//! This module contains the business logic for each ledger operation.
//! Each operation has its own file; `Processor` decodes encoded
//! instructions from an execution layer and routes them.

pub mod burn;
pub mod close_account;
pub mod create_account;
pub mod create_mint;
pub mod freeze_account;
pub mod mint_to;
pub mod transfer;

use crate::error::{LedgerResult, TokenError};
use crate::instruction::TokenInstruction;
use crate::ledger::TokenLedger;
use crate::store::AccountStore;
use solana_program::{msg, pubkey::Pubkey};

/// Success result of one processed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerOutcome {
    /// A mint was registered under this identifier.
    MintCreated {
        /// New mint identifier
        mint: Pubkey,
    },

    /// The holder account for the requested pair (new or existing).
    AccountCreated {
        /// Holder account identifier
        account: Pubkey,
    },

    /// Balance of the touched account after MintTo or Burn.
    Balance {
        /// New balance
        amount: u64,
    },

    /// Balances of both accounts after a Transfer.
    Transferred {
        /// New source balance
        source: u64,
        /// New destination balance
        destination: u64,
    },

    /// Freeze, Thaw or Close completed.
    Done,
}

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process one encoded instruction.
    ///
    /// `caller` is the identity the execution layer already authenticated.
    /// `accounts` lists the record identifiers in the order documented on
    /// each [`TokenInstruction`] variant.
    pub fn process<S: AccountStore>(
        ledger: &TokenLedger<S>,
        caller: &Pubkey,
        accounts: &[Pubkey],
        instruction_data: &[u8],
    ) -> LedgerResult<LedgerOutcome> {
        let instruction = TokenInstruction::unpack(instruction_data)?;
        let account_iter = &mut accounts.iter();

        match instruction {
            TokenInstruction::CreateMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                msg!("Instruction: CreateMint");
                let mint = create_mint::process(ledger, decimals, mint_authority, freeze_authority)?;
                Ok(LedgerOutcome::MintCreated { mint })
            }

            TokenInstruction::CreateAccount => {
                msg!("Instruction: CreateAccount");
                let owner = next_key(account_iter)?;
                let mint = next_key(account_iter)?;
                let account = create_account::process(ledger, *owner, *mint)?;
                Ok(LedgerOutcome::AccountCreated { account })
            }

            TokenInstruction::MintTo { amount } => {
                msg!("Instruction: MintTo");
                let mint = next_key(account_iter)?;
                let destination = next_key(account_iter)?;
                let amount = mint_to::process(ledger, mint, destination, amount, caller)?;
                Ok(LedgerOutcome::Balance { amount })
            }

            TokenInstruction::Transfer { amount } => {
                msg!("Instruction: Transfer");
                let source = next_key(account_iter)?;
                let destination = next_key(account_iter)?;
                let (source, destination) =
                    transfer::process(ledger, source, destination, amount, caller)?;
                Ok(LedgerOutcome::Transferred {
                    source,
                    destination,
                })
            }

            TokenInstruction::Burn { amount } => {
                msg!("Instruction: Burn");
                let mint = next_key(account_iter)?;
                let source = next_key(account_iter)?;
                let amount = burn::process(ledger, mint, source, amount, caller)?;
                Ok(LedgerOutcome::Balance { amount })
            }

            TokenInstruction::FreezeAccount => {
                msg!("Instruction: FreezeAccount");
                let account = next_key(account_iter)?;
                let mint = next_key(account_iter)?;
                freeze_account::process(ledger, mint, account, true, caller)?;
                Ok(LedgerOutcome::Done)
            }

            TokenInstruction::ThawAccount => {
                msg!("Instruction: ThawAccount");
                let account = next_key(account_iter)?;
                let mint = next_key(account_iter)?;
                freeze_account::process(ledger, mint, account, false, caller)?;
                Ok(LedgerOutcome::Done)
            }

            TokenInstruction::CloseAccount => {
                msg!("Instruction: CloseAccount");
                let account = next_key(account_iter)?;
                close_account::process(ledger, account, caller)?;
                Ok(LedgerOutcome::Done)
            }
        }
    }
}

/// Next record identifier, or `InvalidInstruction` if the list ran out.
fn next_key<'a, I: Iterator<Item = &'a Pubkey>>(iter: &mut I) -> LedgerResult<&'a Pubkey> {
    iter.next().ok_or(TokenError::InvalidInstruction)
}
