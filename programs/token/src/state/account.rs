//! Holder Account Record
//!
//! A Holder Account is one owner's balance of one mint.
//! An owner holding two token types has two holder accounts.
//!
//! # Size: 73 bytes

use crate::error::{LedgerResult, TokenError};
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::pubkey::Pubkey;

// =============================================================================
// ACCOUNT STATE ENUM
// =============================================================================

/// Lifecycle state of a holder account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountState {
    /// Zeroed bytes. Never stored by the ledger itself.
    #[default]
    Uninitialized,

    /// Normal operating state.
    Initialized,

    /// Locked by the mint's freeze authority.
    ///
    /// Nothing may move into or out of the account until it is thawed.
    Frozen,
}

impl AccountState {
    /// Convert a stored byte to AccountState.
    ///
    /// 0 = Uninitialized, 1 = Initialized, 2 = Frozen.
    pub fn from_u8(value: u8) -> LedgerResult<Self> {
        match value {
            0 => Ok(AccountState::Uninitialized),
            1 => Ok(AccountState::Initialized),
            2 => Ok(AccountState::Frozen),
            _ => Err(TokenError::InvalidAccountData),
        }
    }

    /// Convert AccountState to its stored byte.
    pub fn to_u8(self) -> u8 {
        match self {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
            AccountState::Frozen => 2,
        }
    }
}

// =============================================================================
// HOLDER ACCOUNT STRUCTURE
// =============================================================================

/// Holder account record.
///
/// # Memory Layout (73 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 32   │ mint             │ Pubkey                      │
/// │ 32     │ 32   │ owner            │ Pubkey                      │
/// │ 64     │ 8    │ amount           │ u64                         │
/// │ 72     │ 1    │ state            │ AccountState (u8)           │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 73   │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HolderAccount {
    /// The mint this account holds. Fixed at creation.
    pub mint: Pubkey,

    /// The identity allowed to transfer, burn and close.
    pub owner: Pubkey,

    /// Balance in raw units.
    pub amount: u64,

    /// Lifecycle state; see [`AccountState`].
    pub state: AccountState,
}

impl HolderAccount {
    /// Size of a HolderAccount record: 32 + 32 + 8 + 1.
    pub const LEN: usize = 73;

    /// Create a zero-balance, unfrozen account for (owner, mint).
    pub fn new(owner: Pubkey, mint: Pubkey) -> Self {
        HolderAccount {
            mint,
            owner,
            amount: 0,
            state: AccountState::Initialized,
        }
    }

    /// Check if the account is frozen.
    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }

    /// Check if the account is initialized (frozen counts as initialized).
    pub fn is_initialized(&self) -> bool {
        self.state != AccountState::Uninitialized
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for HolderAccount {
    const LEN: usize = 73;

    fn unpack(input: &[u8]) -> LedgerResult<Self> {
        let input = array_ref![input, 0, HolderAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint, owner, amount, state) = array_refs![input, 32, 32, 8, 1];

        Ok(HolderAccount {
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
            state: AccountState::from_u8(state[0])?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> LedgerResult<()> {
        let output = array_mut_ref![output, 0, HolderAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_dst, owner_dst, amount_dst, state_dst) =
            mut_array_refs![output, 32, 32, 8, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        state_dst[0] = self.state.to_u8();

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
