//! # Vault Address and Account Lifecycle
//!
//! The vault carries no data of its own. It is a plain lamport account that
//! lives at a PDA derived from the owner's key, so everything the program
//! needs to know about it is:
//!
//! - **where** it must be (`VaultAddress`), and
//! - **whether** it currently exists and how much it holds (`VaultAccount`).
//!
//! Both are plain values with no dependency on the runtime, so the rules
//! below can be exercised natively in tests.

use anchor_lang::prelude::*;

use crate::errors::VaultError;

/// # VaultAddress
///
/// The deterministic address of an owner's vault plus its canonical bump.
///
/// ## How PDA derivation works:
/// ```text
/// Seeds: ["vault", owner_public_key] + bump
///                    ↓
///         Hash Function (SHA256)
///                    ↓
///         PDA Address: "7xKt..." (unique per owner, off the ed25519 curve)
/// ```
///
/// `find_program_address` walks the bump down from 255 and keeps the first
/// candidate that is off the curve. That first hit is the canonical bump and
/// the only one this program accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultAddress {
    pub address: Pubkey,
    pub bump: u8,
}

impl VaultAddress {
    /// Constant domain tag in front of every vault seed.
    pub const SEED_PREFIX: &'static [u8] = b"vault";

    /// Derive the vault for `owner` under `program_id`.
    pub fn derive(owner: &Pubkey, program_id: &Pubkey) -> Self {
        let (address, bump) =
            Pubkey::find_program_address(&[Self::SEED_PREFIX, owner.as_ref()], program_id);
        Self { address, bump }
    }

    /// True only when `candidate` is exactly the canonical vault of `owner`.
    ///
    /// ## Security:
    /// Always re-derives. A caller-supplied address is never trusted, and an
    /// address built from a non-canonical bump is rejected even though it is
    /// also a valid PDA.
    pub fn verify(candidate: &Pubkey, owner: &Pubkey, program_id: &Pubkey) -> bool {
        Self::derive(owner, program_id).matches(candidate)
    }

    pub fn matches(&self, candidate: &Pubkey) -> bool {
        self.address == *candidate
    }
}

/// # VaultAccount
///
/// Lifecycle state of a vault, modelled explicitly instead of reading a
/// sentinel balance:
///
/// ```text
///              Deposit(amount > 0)
///   NoAccount ─────────────────────> Funded
///       ^                              │  Deposit(amount > 0): lamports += amount
///       │          Withdraw            │
///       └──────────────────────────────┘
/// ```
///
/// There is no "exists but empty" state: a withdraw always takes everything
/// out, including the rent reserve, and the runtime then drops the account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaultAccount {
    /// Nothing at the vault address yet (or it was closed by a withdraw).
    NoAccount,
    /// A live, system-owned, zero-data account holding `lamports`.
    Funded { lamports: u64 },
}

impl VaultAccount {
    /// Classify what the runtime shows at the vault address.
    ///
    /// A zero-lamport account does not persist between transactions, so no
    /// lamports means no vault. Anything with lamports must be the plain
    /// system-owned shape that deposits create.
    pub fn load(lamports: u64, owner: &Pubkey, data_is_empty: bool) -> Result<Self> {
        if lamports == 0 {
            return Ok(Self::NoAccount);
        }

        require_keys_eq!(*owner, System::id(), VaultError::AccountNotFound);
        require!(data_is_empty, VaultError::AccountNotFound);

        Ok(Self::Funded { lamports })
    }

    /// Lamports currently held.
    pub fn lamports(&self) -> u64 {
        match self {
            Self::NoAccount => 0,
            Self::Funded { lamports } => *lamports,
        }
    }

    pub fn exists(&self) -> bool {
        matches!(self, Self::Funded { .. })
    }

    /// Validate a deposit of `amount` and return the state it leads to.
    ///
    /// ## Arguments
    ///
    /// * `signer_lamports` - what the owner holds right now (fees are
    ///   already taken by the runtime before the program runs)
    /// * `rent_exempt_minimum` - `Rent::minimum_balance(0)`; the first
    ///   deposit creates the account, so it alone has to cover the reserve
    ///
    /// ## Returns
    ///
    /// * `Ok(Funded)` - vault lamports increased by exactly `amount`
    /// * `Err(VaultError::InvalidAmount)` - zero, or a first deposit below
    ///   the reserve
    /// * `Err(VaultError::InsufficientFunds)` - owner cannot cover `amount`,
    ///   or would be left holding less than the rent-exempt reserve
    /// * `Err(VaultError::Overflow)` - impossible in practice
    pub fn deposit(
        self,
        amount: u64,
        signer_lamports: u64,
        rent_exempt_minimum: u64,
    ) -> Result<Self> {
        require!(amount > 0, VaultError::InvalidAmount);

        if !self.exists() {
            require_gte!(amount, rent_exempt_minimum, VaultError::InvalidAmount);
        }

        // The signer is a zero-data system account too: it may be drained to
        // zero but never left below the rent-exempt reserve.
        let remaining = signer_lamports
            .checked_sub(amount)
            .ok_or(VaultError::InsufficientFunds)?;
        require!(
            remaining == 0 || remaining >= rent_exempt_minimum,
            VaultError::InsufficientFunds
        );

        let lamports = self
            .lamports()
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;

        Ok(Self::Funded { lamports })
    }

    /// Validate a withdrawal and return how many lamports go back to the
    /// owner. The state afterwards is always `NoAccount`.
    pub fn withdraw(self) -> Result<u64> {
        match self {
            Self::Funded { lamports } if lamports > 0 => Ok(lamports),
            _ => err!(VaultError::InvalidAmount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_native_token::LAMPORTS_PER_SOL;

    const RENT_MINIMUM: u64 = 890_880;

    #[test]
    fn derivation_is_deterministic() {
        let owner = Pubkey::new_unique();
        let program = Pubkey::new_unique();

        let first = VaultAddress::derive(&owner, &program);
        let second = VaultAddress::derive(&owner, &program);

        assert_eq!(first, second);
        assert_eq!(
            first.address,
            Pubkey::create_program_address(
                &[VaultAddress::SEED_PREFIX, owner.as_ref(), &[first.bump]],
                &program,
            )
            .unwrap()
        );
    }

    #[test]
    fn derived_address_has_no_private_key() {
        let owner = Pubkey::new_unique();
        let vault = VaultAddress::derive(&owner, &crate::ID);

        assert!(!vault.address.is_on_curve());
        assert_ne!(vault.address, owner);
    }

    #[test]
    fn one_vault_per_owner_and_program() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let other_program = Pubkey::new_unique();

        let alice_vault = VaultAddress::derive(&alice, &crate::ID);

        assert_ne!(alice_vault, VaultAddress::derive(&bob, &crate::ID));
        assert_ne!(alice_vault.address, VaultAddress::derive(&alice, &other_program).address);
    }

    #[test]
    fn verify_accepts_only_the_signers_vault() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let alice_vault = VaultAddress::derive(&alice, &crate::ID).address;
        let bob_vault = VaultAddress::derive(&bob, &crate::ID).address;

        assert!(VaultAddress::verify(&alice_vault, &alice, &crate::ID));
        assert!(!VaultAddress::verify(&bob_vault, &alice, &crate::ID));
        assert!(!VaultAddress::verify(&alice, &alice, &crate::ID));
        assert!(!VaultAddress::verify(&Pubkey::new_unique(), &alice, &crate::ID));
    }

    #[test]
    fn verify_rejects_non_canonical_bump() {
        let owner = Pubkey::new_unique();
        let canonical = VaultAddress::derive(&owner, &crate::ID);

        let other = (0..canonical.bump).rev().find_map(|bump| {
            Pubkey::create_program_address(
                &[VaultAddress::SEED_PREFIX, owner.as_ref(), &[bump]],
                &crate::ID,
            )
            .ok()
        });

        // Roughly half of all bumps land off the curve, so one always turns up.
        let other = other.expect("a second valid bump");
        assert_ne!(other, canonical.address);
        assert!(!VaultAddress::verify(&other, &owner, &crate::ID));
    }

    #[test]
    fn load_classifies_account_shapes() {
        let system = System::id();

        assert_eq!(
            VaultAccount::load(0, &system, true).unwrap(),
            VaultAccount::NoAccount
        );
        assert_eq!(
            VaultAccount::load(RENT_MINIMUM, &system, true).unwrap(),
            VaultAccount::Funded { lamports: RENT_MINIMUM }
        );
        assert_eq!(
            VaultAccount::load(RENT_MINIMUM, &crate::ID, true).unwrap_err(),
            VaultError::AccountNotFound.into()
        );
        assert_eq!(
            VaultAccount::load(RENT_MINIMUM, &system, false).unwrap_err(),
            VaultError::AccountNotFound.into()
        );
    }

    #[test]
    fn zero_deposit_is_rejected_in_every_state() {
        for state in [VaultAccount::NoAccount, VaultAccount::Funded { lamports: LAMPORTS_PER_SOL }] {
            assert_eq!(
                state.deposit(0, 2 * LAMPORTS_PER_SOL, RENT_MINIMUM).unwrap_err(),
                VaultError::InvalidAmount.into()
            );
        }
    }

    #[test]
    fn first_deposit_must_cover_rent_reserve() {
        assert_eq!(
            VaultAccount::NoAccount
                .deposit(RENT_MINIMUM - 1, LAMPORTS_PER_SOL, RENT_MINIMUM)
                .unwrap_err(),
            VaultError::InvalidAmount.into()
        );
        assert_eq!(
            VaultAccount::NoAccount
                .deposit(RENT_MINIMUM, LAMPORTS_PER_SOL, RENT_MINIMUM)
                .unwrap(),
            VaultAccount::Funded { lamports: RENT_MINIMUM }
        );
    }

    #[test]
    fn top_up_may_be_below_rent_reserve() {
        let funded = VaultAccount::Funded { lamports: LAMPORTS_PER_SOL };

        assert_eq!(
            funded.deposit(1, LAMPORTS_PER_SOL, RENT_MINIMUM).unwrap(),
            VaultAccount::Funded { lamports: LAMPORTS_PER_SOL + 1 }
        );
    }

    #[test]
    fn deposit_beyond_signer_balance_is_rejected() {
        assert_eq!(
            VaultAccount::NoAccount
                .deposit(2 * LAMPORTS_PER_SOL, LAMPORTS_PER_SOL, RENT_MINIMUM)
                .unwrap_err(),
            VaultError::InsufficientFunds.into()
        );
    }

    #[test]
    fn deposit_leaving_signer_below_rent_reserve_is_rejected() {
        let signer_lamports = LAMPORTS_PER_SOL;

        assert_eq!(
            VaultAccount::NoAccount
                .deposit(signer_lamports - 1, signer_lamports, RENT_MINIMUM)
                .unwrap_err(),
            VaultError::InsufficientFunds.into()
        );
        assert_eq!(
            VaultAccount::NoAccount
                .deposit(signer_lamports - RENT_MINIMUM + 1, signer_lamports, RENT_MINIMUM)
                .unwrap_err(),
            VaultError::InsufficientFunds.into()
        );
        assert!(VaultAccount::NoAccount
            .deposit(signer_lamports - RENT_MINIMUM, signer_lamports, RENT_MINIMUM)
            .is_ok());
    }

    #[test]
    fn deposit_may_drain_signer_completely() {
        assert_eq!(
            VaultAccount::NoAccount
                .deposit(LAMPORTS_PER_SOL, LAMPORTS_PER_SOL, RENT_MINIMUM)
                .unwrap(),
            VaultAccount::Funded { lamports: LAMPORTS_PER_SOL }
        );
    }

    #[test]
    fn deposit_overflow_is_caught() {
        let full = VaultAccount::Funded { lamports: u64::MAX };

        assert_eq!(
            full.deposit(1, u64::MAX, RENT_MINIMUM).unwrap_err(),
            VaultError::Overflow.into()
        );
    }

    #[test]
    fn withdraw_returns_everything() {
        let funded = VaultAccount::Funded { lamports: LAMPORTS_PER_SOL };

        assert_eq!(funded.withdraw().unwrap(), LAMPORTS_PER_SOL);
    }

    #[test]
    fn withdraw_without_account_is_rejected() {
        assert_eq!(
            VaultAccount::NoAccount.withdraw().unwrap_err(),
            VaultError::InvalidAmount.into()
        );
    }
}
