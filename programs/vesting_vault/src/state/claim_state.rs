use anchor_lang::prelude::*;

use crate::error::VaultError;
use crate::utils::schedule;

/**
 * Beneficiary claim account
 *
 * A single vesting entitlement against a claims vault. Tokens stay in the
 * vault treasury until the beneficiary withdraws them; each withdrawal pays
 * out whatever has unlocked since the previous one.
 *
 * Derivation: ["claim_account", vault_key, beneficiary_key]
 *
 * Lifecycle:
 * 1. Created by the vault owner (capacity reserved in the vault)
 * 2. Updated on each successful withdrawal
 * 3. Never closed, kept as an audit trail once drained
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimAccount {
    /// Party entitled to withdraw
    pub beneficiary: Pubkey,

    /// Owning vault
    pub token_vault: Pubkey,

    /// Total entitlement, fixed at creation
    pub total_tokens: u64,

    /// Cumulative amount withdrawn
    pub tokens_claimed: u64,

    /// Vesting start (Unix timestamp)
    pub created_at: i64,

    /// Bump seed of the claim PDA
    pub bump: u8,
}

impl ClaimAccount {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

    /// Cumulative amount unlocked at `now`, rounded down
    pub fn unlocked_amount(&self, now: i64) -> Result<u64> {
        schedule::unlocked_amount(self.total_tokens, self.created_at, now)
    }

    /// Amount that could be withdrawn at `now`
    pub fn claimable(&self, now: i64) -> Result<u64> {
        Ok(self.unlocked_amount(now)?.saturating_sub(self.tokens_claimed))
    }

    /// Marks everything claimable at `now` as withdrawn and returns the amount
    ///
    /// Callers must pair this with the treasury transfer in the same
    /// transaction; a failed transfer aborts the transaction and discards
    /// this update.
    pub fn record_withdrawal(&mut self, now: i64) -> Result<u64> {
        let amount = self.claimable(now)?;
        require!(amount > 0, VaultError::InsufficientUnlockedTokens);

        let tokens_claimed = self
            .tokens_claimed
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        require!(
            tokens_claimed <= self.total_tokens,
            VaultError::InsufficientTokens
        );

        self.tokens_claimed = tokens_claimed;
        Ok(amount)
    }
}
