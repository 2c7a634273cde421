//! # Error Handling Module
//!
//! Every way a vault request can be refused. Each variant becomes an Anchor
//! error with a stable numeric code and a message, both of which reach the
//! client in the transaction logs.
//!
//! ## How Errors Work in Anchor:
//!
//! ```rust,ignore
//! require!(amount > 0, VaultError::InvalidAmount);
//! ```
//!
//! Returning an error aborts the whole instruction. Any lamports already
//! moved by a CPI inside the same instruction are rolled back by the
//! runtime, so a failed request never leaves a partial transfer behind.
//!
//! ## Error Codes:
//! Anchor assigns custom codes starting at 6000 (0x1770), in declaration
//! order. Clients match on these numbers, so new variants go at the end.

use anchor_lang::prelude::*;

/// # VaultError
///
/// | Code | Variant | Recoverable? |
/// |------|---------|--------------|
/// | 6000 | `InvalidAmount` | Yes, retry with a valid amount |
/// | 6001 | `InvalidVault` | No, the client derived the wrong address |
/// | 6002 | `InsufficientFunds` | Yes, fund the owner wallet first |
/// | 6003 | `AccountNotFound` | No |
/// | 6004 | `Overflow` | No |
#[error_code]
pub enum VaultError {
    /// Deposit of zero lamports, a first deposit too small to make the vault
    /// rent-exempt, or a withdraw from a vault that holds nothing.
    #[msg("Amount must be greater than zero and the vault must hold a balance")]
    InvalidAmount, // 6000

    /// The vault account passed in is not `derive("vault", signer, program)`.
    ///
    /// ## Security:
    /// This is the spoofing check. The address is never corrected silently;
    /// a mismatch means a buggy or malicious client.
    #[msg("Vault address does not match the derivation for this signer")]
    InvalidVault, // 6001

    /// The signer's wallet cannot cover the deposit.
    #[msg("Signer does not hold enough lamports for this deposit")]
    InsufficientFunds, // 6002

    /// Something other than a plain lamport account sits at the vault
    /// address.
    #[msg("No vault account exists at this address")]
    AccountNotFound, // 6003

    /// Vault lamports would exceed u64::MAX.
    #[msg("Arithmetic overflow - this should never happen")]
    Overflow, // 6004
}
