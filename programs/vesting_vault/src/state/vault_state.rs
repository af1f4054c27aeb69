use anchor_lang::prelude::*;

use crate::constants::MAX_VAULT_NAME_LEN;
use crate::error::VaultError;

/// Distinguishes the two vault layouts sharing the TokenVault record
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VaultKind {
    /// Keyed by mint; pays out only through vesting claims
    #[default]
    Claims,
    /// Keyed by mint and owner; drained only by owner sweeps
    OwnerScoped,
}

/**
 * Pooled token vault
 *
 * Tracks one deposit of a single mint and the accounting of every claim
 * created against it. Undistributed tokens sit in the treasury token account,
 * whose authority is this PDA.
 *
 * Derivation:
 * - Claims:      ["token_vault", mint]
 * - OwnerScoped: ["token_vault_okx", mint, owner]
 *
 * Lifecycle:
 * 1. Created and funded by the owner
 * 2. Capacity reserved on each claim creation
 * 3. Counters advanced on each claim withdrawal
 * 4. Never closed
 *
 * Invariants:
 * - tokens_claimed <= tokens_released <= total_tokens
 * - tokens_allocated <= total_tokens
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenVault {
    /// Vault layout, fixed at creation
    pub kind: VaultKind,

    /// Depositing authority
    /// - Only signer allowed to create claims or sweep
    pub owner: Pubkey,

    /// Human-readable label
    pub vault_name: String,

    /// Token mint distributed by this vault
    pub mint: Pubkey,

    /// Amount deposited at creation
    pub total_tokens: u64,

    /// Treasury token account address
    /// - Derived from: ["treasury", vault_key]
    pub treasury: Pubkey,

    /// Sum of total_tokens of all claims created against this vault
    /// - Reserved capacity, whether or not it has been withdrawn yet
    pub tokens_allocated: u64,

    /// Cumulative amount unlocked and paid out through claims
    pub tokens_released: u64,

    /// Cumulative amount withdrawn through claims
    pub tokens_claimed: u64,

    /// Number of claims created against this vault
    pub total_token_holders: u64,

    /// Bump seed of the vault PDA
    pub bump: u8,

    /// Bump seed of the treasury PDA
    pub treasury_bump: u8,
}

impl TokenVault {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator and the length-prefixed name
    pub const LEN: usize = 8 + // discriminator
        1 +  // kind
        32 + // owner
        4 + MAX_VAULT_NAME_LEN + // vault_name
        32 + // mint
        8 +  // total_tokens
        32 + // treasury
        8 +  // tokens_allocated
        8 +  // tokens_released
        8 +  // tokens_claimed
        8 +  // total_token_holders
        1 +  // bump
        1;   // treasury_bump

    /**
     * Records a freshly funded vault with zeroed counters
     *
     * @param treasury - Treasury token account derived from the vault address
     * @param bump - Vault PDA bump, kept for re-derivation and signing
     */
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        kind: VaultKind,
        owner: Pubkey,
        vault_name: String,
        mint: Pubkey,
        total_tokens: u64,
        treasury: Pubkey,
        bump: u8,
        treasury_bump: u8,
    ) -> Result<()> {
        validate_vault_name(&vault_name)?;
        require!(total_tokens > 0, VaultError::InvalidAmount);

        self.kind = kind;
        self.owner = owner;
        self.vault_name = vault_name;
        self.mint = mint;
        self.total_tokens = total_tokens;
        self.treasury = treasury;
        self.tokens_allocated = 0;
        self.tokens_released = 0;
        self.tokens_claimed = 0;
        self.total_token_holders = 0;
        self.bump = bump;
        self.treasury_bump = treasury_bump;

        Ok(())
    }

    /// Capacity not yet reserved by any claim
    pub fn remaining_capacity(&self) -> u64 {
        self.total_tokens.saturating_sub(self.tokens_allocated)
    }

    /// Fails with Unauthorized unless `signer` is the vault owner
    pub fn require_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.owner, VaultError::Unauthorized);
        Ok(())
    }

    /// Reserves capacity for a new claim of `amount` tokens
    ///
    /// Checked against the sum of all previously created claims, so tokens
    /// allocated but not yet withdrawn stay reserved.
    pub fn register_claim(&mut self, signer: &Pubkey, amount: u64) -> Result<()> {
        self.require_owner(signer)?;
        require!(self.kind == VaultKind::Claims, VaultError::VaultKindMismatch);
        require!(amount > 0, VaultError::InvalidAmount);
        require!(
            amount <= self.remaining_capacity(),
            VaultError::InsufficientTokens
        );

        self.tokens_allocated = self
            .tokens_allocated
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        self.total_token_holders = self
            .total_token_holders
            .checked_add(1)
            .ok_or(VaultError::ArithmeticOverflow)?;

        Ok(())
    }

    /**
     * Checks a sweep of `amount` tokens out of the treasury
     *
     * Only the owner of an owner-scoped vault may sweep, and never more than
     * the treasury currently holds. Nothing is written: a sweep changes the
     * treasury balance only.
     *
     * @param treasury_balance - Live balance of the treasury token account
     */
    pub fn authorize_sweep(&self, signer: &Pubkey, amount: u64, treasury_balance: u64) -> Result<()> {
        self.require_owner(signer)?;
        require!(
            self.kind == VaultKind::OwnerScoped,
            VaultError::VaultKindMismatch
        );
        require!(amount > 0, VaultError::InvalidAmount);
        require!(amount <= treasury_balance, VaultError::InsufficientTokens);
        Ok(())
    }

    /// Advances the released and claimed counters by a withdrawn amount
    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        let tokens_released = self
            .tokens_released
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        let tokens_claimed = self
            .tokens_claimed
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;

        require!(
            tokens_released <= self.tokens_allocated && tokens_released <= self.total_tokens,
            VaultError::InsufficientTokens
        );
        require!(
            tokens_claimed <= tokens_released,
            VaultError::InsufficientTokens
        );

        self.tokens_released = tokens_released;
        self.tokens_claimed = tokens_claimed;

        Ok(())
    }
}

/// Validates a vault label before it is stored
pub fn validate_vault_name(vault_name: &str) -> Result<()> {
    require!(
        !vault_name.is_empty() && vault_name.len() <= MAX_VAULT_NAME_LEN,
        VaultError::InvalidVaultName
    );
    Ok(())
}
