//! # Events Module
//!
//! Structured records emitted into the transaction logs. They change no state;
//! indexers and wallets decode them to follow vault activity without
//! re-reading account balances.
//!
//! ```typescript
//! program.addEventListener("depositEvent", (event) => {
//!     console.log(`${event.owner} deposited ${event.amount}`);
//! });
//! ```

use anchor_lang::prelude::*;

/// # DepositEvent
///
/// Emitted after lamports move from the owner into the vault.
///
/// ## Example Log:
/// ```text
/// DepositEvent {
///     owner: "7xKt9Fj2...",
///     vault: "9Yht3Mk7...",
///     amount: 1_000_000_000,   // 1 SOL
///     balance: 1_000_000_000,  // vault lamports after the deposit
///     created: true,           // first deposit allocated the vault
///     timestamp: 1699123456
/// }
/// ```
#[event]
pub struct DepositEvent {
    /// Wallet that signed the deposit
    pub owner: Pubkey,
    /// The vault PDA address
    pub vault: Pubkey,
    /// Lamports deposited
    pub amount: u64,
    /// Vault lamports after the deposit
    pub balance: u64,
    /// True when this deposit brought the vault into existence
    pub created: bool,
    /// Unix timestamp
    pub timestamp: i64,
}

/// # WithdrawEvent
///
/// Emitted after the vault has been emptied back into the owner's wallet.
/// Withdrawals are always total, so there is no remaining balance to report.
#[event]
pub struct WithdrawEvent {
    /// Wallet that signed the withdrawal and received the lamports
    pub owner: Pubkey,
    /// The vault PDA address (closed after this instruction)
    pub vault: Pubkey,
    /// Lamports returned, rent reserve included
    pub amount: u64,
    /// Unix timestamp
    pub timestamp: i64,
}
