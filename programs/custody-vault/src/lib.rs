// Suppress warnings from Anchor/Solana version mismatches
#![allow(unexpected_cfgs)]
#![allow(ambiguous_glob_reexports)]

//! # Custody Vault
//!
//! A Solana program (Anchor) that lets a single owner park lamports in a
//! program-derived account that only they can empty.
//!
//! ## Overview
//!
//! - **Deposit**: the owner moves lamports into their vault PDA; the first
//!   deposit creates it
//! - **Withdraw**: the owner takes every lamport back; the vault is closed
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  CUSTODY VAULT PROGRAM                    │
//! │                                                           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐    │
//! │  │ Vault (Alice)│  │ Vault (Bob)  │  │ Vault (Carol)│ ...│
//! │  │ ["vault", A] │  │ ["vault", B] │  │ ["vault", C] │    │
//! │  └──────────────┘  └──────────────┘  └──────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              │ CPI (transfer)
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                     SYSTEM PROGRAM                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Model
//!
//! 1. **PDA Control**: vaults are PDAs - no private key exists for them
//! 2. **Re-derivation**: the vault address is recomputed from the signer on
//!    every call and compared, never trusted from the client
//! 3. **Atomic Operations**: a failed check aborts the whole instruction
//! 4. **Overflow Protection**: balance arithmetic is checked
//!
//! ## Instructions Summary
//!
//! | Instruction | Who Can Call | Description |
//! |-------------|--------------|-------------|
//! | `deposit` | Vault owner | Add lamports to the vault |
//! | `withdraw` | Vault owner | Take every lamport back and close the vault |

use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("22222222222222222222222222222222222222222222");

#[program]
pub mod custody_vault {
    use super::*;

    /// Deposit `amount` lamports into the caller's vault.
    ///
    /// ## Accounts Required:
    /// - `signer`: vault owner (signer, writable)
    /// - `vault`: the owner's vault PDA (writable)
    /// - System program
    ///
    /// ## Errors:
    /// - `InvalidVault`: vault is not `["vault", signer]`
    /// - `InvalidAmount`: amount is 0, or a first deposit below rent exemption
    /// - `InsufficientFunds`: signer cannot cover the amount, or would be
    ///   left with dust below the rent-exempt reserve
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Return the caller's entire vault balance and close the vault.
    ///
    /// ## Errors:
    /// - `InvalidVault`: vault is not `["vault", signer]`
    /// - `InvalidAmount`: vault is empty
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }
}
