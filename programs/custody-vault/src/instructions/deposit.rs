//! # Deposit Instruction
//!
//! Moves lamports from the owner's wallet into the owner's vault PDA.
//!
//! ## What Happens During a Deposit:
//!
//! ```text
//! BEFORE:                              AFTER:
//!
//! Owner Wallet                         Owner Wallet
//! └── lamports: 2 SOL                  └── lamports: 1 SOL - fees (-1 SOL)
//!
//! Vault PDA (NoAccount)                Vault PDA (Funded)
//! └── lamports: 0                      └── lamports: 1 SOL (+1 SOL)
//! ```
//!
//! ## Account Creation:
//!
//! The vault never needs an explicit `create_account`. It is a zero-data
//! account owned by the System Program, so the first transfer that leaves it
//! rent-exempt is what brings it into existence. That is why the first
//! deposit must be at least `Rent::minimum_balance(0)`.
//!
//! ## Security:
//!
//! - The owner must sign (they are the `from` of the transfer)
//! - The vault must be the owner's own PDA, re-derived here
//! - Amount must be greater than zero

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::events::DepositEvent;
use crate::instructions::load_vault;

/// # deposit
///
/// ## Returns
///
/// * `Ok(())` - Deposit successful
/// * `Err(VaultError::InvalidVault)` - vault is not the signer's PDA
/// * `Err(VaultError::InvalidAmount)` - amount is zero, or a first deposit
///   below the rent-exempt reserve
/// * `Err(VaultError::InsufficientFunds)` - signer cannot cover `amount`, or
///   would be left with a non-zero balance below the rent-exempt reserve
///
/// ## Example (TypeScript client):
///
/// ```typescript
/// const [vault] = PublicKey.findProgramAddressSync(
///     [Buffer.from("vault"), wallet.publicKey.toBuffer()],
///     program.programId,
/// );
///
/// await program.methods
///     .deposit(new BN(LAMPORTS_PER_SOL))
///     .accounts({ signer: wallet.publicKey, vault })
///     .rpc();
/// ```
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    // ===================================
    // STEP 1: Validate
    // ===================================

    let owner = ctx.accounts.signer.key();
    let (address, before) = load_vault(&owner, &ctx.accounts.vault, ctx.program_id)?;

    let rent_exempt_minimum = Rent::get()?.minimum_balance(0);
    let after = before.deposit(amount, ctx.accounts.signer.lamports(), rent_exempt_minimum)?;

    // ===================================
    // STEP 2: Transfer (CPI to System Program)
    // ===================================

    let cpi_context = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.signer.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_context, amount)?;

    // ===================================
    // STEP 3: Emit Event
    // ===================================

    let clock = Clock::get()?;
    emit!(DepositEvent {
        owner,
        vault: address.address,
        amount,
        balance: after.lamports(),
        created: !before.exists(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Deposited {} lamports. Vault balance: {}",
        amount,
        after.lamports()
    );

    Ok(())
}

/// # Deposit Accounts
///
/// ```text
/// signer (Signer) ── derives ──> vault (PDA ["vault", signer])
///        │                           ^
///        └──── system transfer ──────┘
/// ```
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The owner depositing lamports. Pays both the deposit and the fee.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: The owner's vault PDA. It holds no data and may not exist yet,
    /// so it is validated by `load_vault` (address re-derived from `signer`,
    /// System Program ownership, empty data) instead of an Anchor account type.
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    /// System Program (needed for the transfer CPI).
    pub system_program: Program<'info, System>,
}
