//! # Withdraw Instruction
//!
//! Empties the owner's vault back into the owner's wallet and closes it.
//!
//! ## Key Differences from Deposit:
//!
//! 1. **Direction**: lamports flow FROM the vault TO the owner
//! 2. **Authority**: the vault PDA signs the transfer, using its seeds
//! 3. **All or nothing**: there is no amount argument, the full balance
//!    (rent reserve included) leaves the vault
//!
//! ## What Happens During a Withdrawal:
//!
//! ```text
//! BEFORE:                              AFTER:
//!
//! Owner Wallet                         Owner Wallet
//! └── lamports: 1 SOL                  └── lamports: 2 SOL - fees (+1 SOL)
//!
//! Vault PDA (Funded)                   Vault PDA (NoAccount)
//! └── lamports: 1 SOL                  └── lamports: 0, purged by the runtime
//! ```
//!
//! ## PDA Signing:
//!
//! ```text
//! Program provides ["vault", owner, [bump]] → runtime re-derives the PDA →
//! PDA is treated as a signer of the System Program transfer
//! ```

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::events::WithdrawEvent;
use crate::instructions::load_vault;
use crate::state::VaultAddress;

/// # withdraw
///
/// ## Returns
///
/// * `Ok(())` - vault emptied and closed
/// * `Err(VaultError::InvalidVault)` - vault is not the signer's PDA
/// * `Err(VaultError::InvalidAmount)` - vault holds nothing
/// * `Err(VaultError::AccountNotFound)` - the address holds something
///   other than a vault
///
/// ## Example (TypeScript client):
///
/// ```typescript
/// await program.methods
///     .withdraw()
///     .accounts({ signer: wallet.publicKey, vault })
///     .rpc();
/// ```
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    // ===================================
    // STEP 1: Validate
    // ===================================

    let owner = ctx.accounts.signer.key();
    let (address, vault_account) = load_vault(&owner, &ctx.accounts.vault, ctx.program_id)?;
    let amount = vault_account.withdraw()?;

    // ===================================
    // STEP 2: Transfer everything back (CPI with PDA signing)
    // ===================================

    let bump = [address.bump];
    let seeds = &[VaultAddress::SEED_PREFIX, owner.as_ref(), &bump];
    let signer_seeds = &[&seeds[..]];

    let cpi_context = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.signer.to_account_info(),
        },
        signer_seeds,
    );
    system_program::transfer(cpi_context, amount)?;

    // ===================================
    // STEP 3: Emit Event
    // ===================================

    let clock = Clock::get()?;
    emit!(WithdrawEvent {
        owner,
        vault: address.address,
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!("Withdrew {} lamports. Vault closed", amount);

    Ok(())
}

/// # Withdraw Accounts
///
/// Same shape as `Deposit`; only the owner whose key derives `vault` can
/// ever empty it.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The owner, receiving every lamport in the vault.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: The owner's vault PDA, validated by `load_vault`.
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    /// System Program (needed for the transfer CPI).
    pub system_program: Program<'info, System>,
}
