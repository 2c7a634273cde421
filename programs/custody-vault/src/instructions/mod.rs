//! # Instructions Module
//!
//! | Instruction | Who Can Call | Description |
//! |-------------|--------------|-------------|
//! | `deposit` | Vault owner | Move lamports into the owner's vault, creating it on first use |
//! | `withdraw` | Vault owner | Move every lamport back to the owner and close the vault |
//!
//! ## Instruction Flow:
//!
//! ```text
//! NoAccount ── deposit ──> Funded ── deposit ──> Funded ── withdraw ──> NoAccount
//! ```
//!
//! Both instructions take the same three accounts: the signing owner, the
//! vault PDA and the System Program.

pub mod deposit;
pub mod withdraw;

pub use deposit::*;
pub use withdraw::*;

use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::state::{VaultAccount, VaultAddress};

/// Re-derive the signer's vault, reject any other address, and read the
/// lifecycle state of the account that was passed in.
///
/// The accounts are handed over explicitly rather than pulled from the
/// instruction context, which keeps this usable from both handlers.
pub fn load_vault(
    signer: &Pubkey,
    vault: &AccountInfo,
    program_id: &Pubkey,
) -> Result<(VaultAddress, VaultAccount)> {
    let expected = VaultAddress::derive(signer, program_id);
    require!(expected.matches(vault.key), VaultError::InvalidVault);

    let account = VaultAccount::load(vault.lamports(), vault.owner, vault.data_is_empty())?;

    Ok((expected, account))
}
