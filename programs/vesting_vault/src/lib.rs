use anchor_lang::prelude::*;

declare_id!("3N5mmGWtTie7Nw3pKzH9CCRzUczYSc2dTR5bQGFYTtyk");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Vesting Vault Program
 *
 * A Solana program that holds a fixed token deposit and pays it out to
 * beneficiaries on a fixed vesting curve.
 *
 * Key Features:
 * - One claims vault per mint, funded once by its owner
 * - Per-beneficiary claims, capacity-checked against the vault deposit
 * - 20% unlocked at claim creation, the rest linear over 112 days
 * - Incremental withdrawals: each claim pays out only what unlocked since the last one
 * - Owner-scoped sweep vaults for direct owner-controlled transfers
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Token Vault PDA: deposit, capacity and payout counters
 * - Treasury PDA: token account holding undistributed tokens
 * - Claim Account PDAs: entitlement and cumulative withdrawals per beneficiary
 *
 * Workflow:
 * 1. Owner creates a vault and deposits tokens
 * 2. Owner creates claims for beneficiaries
 * 3. Beneficiaries withdraw unlocked tokens over time
 * 4. Owners of sweep vaults transfer tokens directly at any time
 */
#[program]
pub mod vesting_vault {
    use super::*;

    /**
     * Creates the claims vault of a mint and deposits tokens into its treasury
     *
     * @param ctx - Account context containing vault, treasury, mint and owner accounts
     * @param vault_name - Human-readable label (1..=32 bytes)
     * @param total_tokens - Amount moved from the owner's token account
     *
     * Access Control: Any token holder; the signer becomes the vault owner
     */
    pub fn initialize_token_vault(
        ctx: Context<InitializeTokenVault>,
        vault_name: String,
        total_tokens: u64,
    ) -> Result<()> {
        handle_initialize_token_vault(ctx, vault_name, total_tokens)
    }

    /**
     * Creates an owner-scoped sweep vault and deposits tokens into its treasury
     *
     * @param ctx - Account context containing vault, treasury, mint and owner accounts
     * @param vault_name - Human-readable label (1..=32 bytes)
     * @param total_tokens - Amount moved from the owner's token account
     *
     * Access Control: Any token holder; the signer becomes the vault owner
     */
    pub fn initialize_owner_scoped_vault(
        ctx: Context<InitializeOwnerScopedVault>,
        vault_name: String,
        total_tokens: u64,
    ) -> Result<()> {
        handle_initialize_owner_scoped_vault(ctx, vault_name, total_tokens)
    }

    /**
     * Creates a vesting claim for a beneficiary
     *
     * @param ctx - Account context containing vault, claim and beneficiary accounts
     * @param amount - Total entitlement reserved from the vault's remaining capacity
     *
     * Access Control: Vault owner only
     */
    pub fn create_claim_account(ctx: Context<CreateClaimAccount>, amount: u64) -> Result<()> {
        handle_create_claim_account(ctx, amount)
    }

    /**
     * Withdraws all tokens unlocked and not yet claimed
     *
     * @param ctx - Account context containing vault, treasury, claim and beneficiary accounts
     *
     * Access Control: Beneficiary of the claim only
     */
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        handle_claim_tokens(ctx)
    }

    /**
     * Transfers tokens from an owner-scoped vault to any wallet
     *
     * @param ctx - Account context containing vault, treasury and destination accounts
     * @param amount - Tokens to move, at most the treasury balance
     *
     * Access Control: Vault owner only
     */
    pub fn sweep_tokens(ctx: Context<SweepTokens>, amount: u64) -> Result<()> {
        handle_sweep_tokens(ctx, amount)
    }

    /**
     * Emits the unlocked and claimable amounts of a claim at the current clock
     *
     * Access Control: Anyone (read-only)
     */
    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>) -> Result<()> {
        handle_emit_claim_quote(ctx)
    }
}
