//! Instruction Types
//!
//! This module defines the instructions an execution layer can hand to the
//! ledger. Each instruction has:
//! - A discriminant (first byte, identifies the instruction type)
//! - Instruction-specific data (remaining bytes)
//! - Expected record identifiers (passed alongside, not encoded in data)
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | CreateMint |
//! | 1 | CreateAccount |
//! | 2 | MintTo |
//! | 3 | Transfer |
//! | 4 | Burn |
//! | 5 | FreezeAccount |
//! | 6 | ThawAccount |
//! | 7 | CloseAccount |

use crate::error::{LedgerResult, TokenError};
use solana_program::pubkey::Pubkey;

// =============================================================================
// INSTRUCTION ENUM
// =============================================================================

/// Instructions supported by the token ledger.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenInstruction {
    /// Register a new mint.
    ///
    /// # Records
    ///
    /// None. The new identifier is returned.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1]: decimals (u8)
    /// [2..34]: mint_authority (Pubkey, 32 bytes)
    /// [34]: freeze_authority_option (0 = None, 1 = Some)
    /// [35..67]: freeze_authority (Pubkey, 32 bytes, if option = 1)
    /// ```
    CreateMint {
        /// Display precision
        decimals: u8,

        /// Identity that can mint new tokens
        mint_authority: Pubkey,

        /// Optional identity that can freeze holder accounts
        freeze_authority: Option<Pubkey>,
    },

    /// Create (or look up) the holder account for an owner.
    ///
    /// | # | Record |
    /// |---|--------|
    /// | 0 | owner identity |
    /// | 1 | mint |
    CreateAccount,

    /// Mint new tokens into a holder account.
    ///
    /// | # | Record |
    /// |---|--------|
    /// | 0 | mint |
    /// | 1 | destination |
    ///
    /// ```text
    /// [0]: discriminant (2)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    MintTo {
        /// Amount of new tokens
        amount: u64,
    },

    /// Move tokens between holder accounts.
    ///
    /// | # | Record |
    /// |---|--------|
    /// | 0 | source |
    /// | 1 | destination |
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    Transfer {
        /// Amount of tokens to move
        amount: u64,
    },

    /// Destroy tokens held by a holder account.
    ///
    /// | # | Record |
    /// |---|--------|
    /// | 0 | mint |
    /// | 1 | source |
    ///
    /// ```text
    /// [0]: discriminant (4)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    Burn {
        /// Amount of tokens to destroy
        amount: u64,
    },

    /// Freeze a holder account.
    ///
    /// | # | Record |
    /// |---|--------|
    /// | 0 | holder account |
    /// | 1 | mint |
    FreezeAccount,

    /// Thaw a frozen holder account. Same records as FreezeAccount.
    ThawAccount,

    /// Delete an empty holder account.
    ///
    /// | # | Record |
    /// |---|--------|
    /// | 0 | holder account |
    CloseAccount,
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl TokenInstruction {
    /// Parse instruction data into a TokenInstruction.
    ///
    /// # Errors
    ///
    /// `InvalidInstruction` for an empty buffer, an unknown discriminant,
    /// missing bytes, or a bad option byte.
    pub fn unpack(input: &[u8]) -> LedgerResult<Self> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(TokenError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => {
                // decimals(1) + mint_authority(32) + option(1)
                if rest.len() < 34 {
                    return Err(TokenError::InvalidInstruction);
                }

                let decimals = rest[0];
                let mint_authority = unpack_pubkey(&rest[1..33])?;

                let freeze_authority = match rest[33] {
                    0 => None,
                    1 => Some(unpack_pubkey(rest.get(34..66).ok_or(TokenError::InvalidInstruction)?)?),
                    _ => return Err(TokenError::InvalidInstruction),
                };

                TokenInstruction::CreateMint {
                    decimals,
                    mint_authority,
                    freeze_authority,
                }
            }
            1 => TokenInstruction::CreateAccount,
            2 => TokenInstruction::MintTo {
                amount: unpack_amount(rest)?,
            },
            3 => TokenInstruction::Transfer {
                amount: unpack_amount(rest)?,
            },
            4 => TokenInstruction::Burn {
                amount: unpack_amount(rest)?,
            },
            5 => TokenInstruction::FreezeAccount,
            6 => TokenInstruction::ThawAccount,
            7 => TokenInstruction::CloseAccount,
            _ => return Err(TokenError::InvalidInstruction),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for hosts and tests)
    // =========================================================================

    /// Pack instruction into bytes. Inverse of `unpack()`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            TokenInstruction::CreateMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                buf.push(0);
                buf.push(*decimals);
                buf.extend_from_slice(mint_authority.as_ref());
                match freeze_authority {
                    Some(authority) => {
                        buf.push(1);
                        buf.extend_from_slice(authority.as_ref());
                    }
                    None => buf.push(0),
                }
            }
            TokenInstruction::CreateAccount => buf.push(1),
            TokenInstruction::MintTo { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            TokenInstruction::Transfer { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            TokenInstruction::Burn { amount } => {
                buf.push(4);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            TokenInstruction::FreezeAccount => buf.push(5),
            TokenInstruction::ThawAccount => buf.push(6),
            TokenInstruction::CloseAccount => buf.push(7),
        }

        buf
    }
}

/// Read a little-endian u64 amount from the start of `rest`.
fn unpack_amount(rest: &[u8]) -> LedgerResult<u64> {
    let bytes = rest.get(..8).ok_or(TokenError::InvalidInstruction)?;
    Ok(u64::from_le_bytes(
        bytes.try_into().map_err(|_| TokenError::InvalidInstruction)?,
    ))
}

fn unpack_pubkey(bytes: &[u8]) -> LedgerResult<Pubkey> {
    let array: [u8; 32] = bytes.try_into().map_err(|_| TokenError::InvalidInstruction)?;
    Ok(Pubkey::new_from_array(array))
}
