use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{verify_claim_address, verify_vault_address};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

/**
 * Account context for creating a beneficiary claim
 *
 * Reserves part of the vault's deposit for one beneficiary. No tokens move:
 * they stay in the treasury until the beneficiary withdraws them.
 *
 * Access Control: Vault owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateClaimAccount<'info> {
    /// The vault owner
    /// - Pays for the claim account
    #[account(mut)]
    pub signer: Signer<'info>,

    /// Party entitled to the claim
    /// CHECK: Only used as a key; stored in the claim and used in its PDA seeds
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The claims vault of this mint
    /// - Derived from: ["token_vault", mint]
    /// - Capacity and holder count are updated
    #[account(
        mut,
        seeds = [TOKEN_VAULT_SEED.as_bytes(), mint.key().as_ref()],
        bump = token_vault.bump,
        has_one = mint @ VaultError::TokenMintMismatch,
        constraint = token_vault.kind == VaultKind::Claims @ VaultError::VaultKindMismatch,
        constraint = signer.key() == token_vault.owner @ VaultError::Unauthorized,
    )]
    pub token_vault: Account<'info, TokenVault>,

    /// The new claim account (PDA)
    /// - Derived from: ["claim_account", vault_key, beneficiary_key]
    /// - `init` fails if this beneficiary already holds a claim on the vault
    #[account(
        init,
        payer = signer,
        space = ClaimAccount::LEN,
        seeds = [CLAIM_SEED.as_bytes(), token_vault.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub claim_account: Account<'info, ClaimAccount>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/**
 * Creates a claim of `amount` tokens for the beneficiary
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Total entitlement of the beneficiary
 *
 * Fails with InsufficientTokens when `amount` exceeds the capacity not yet
 * reserved by earlier claims.
 */
pub fn handle_create_claim_account(ctx: Context<CreateClaimAccount>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.beneficiary.key() != Pubkey::default(),
        VaultError::InvalidBeneficiary
    );

    let now = Clock::get()?.unix_timestamp;
    let token_vault_key = ctx.accounts.token_vault.key();
    let token_vault = &mut ctx.accounts.token_vault;
    verify_vault_address(token_vault, &token_vault_key)?;

    // ===== EFFECTS PHASE =====

    token_vault.register_claim(&ctx.accounts.signer.key(), amount)?;

    let claim_account = &mut ctx.accounts.claim_account;
    claim_account.beneficiary = ctx.accounts.beneficiary.key();
    claim_account.token_vault = token_vault_key;
    claim_account.total_tokens = amount;
    claim_account.tokens_claimed = 0;
    claim_account.created_at = now;
    claim_account.bump = ctx.bumps.claim_account;

    verify_claim_address(claim_account, &claim_account.key())?;

    emit_cpi!(ClaimAccountCreated {
        token_vault: token_vault_key,
        claim_account: claim_account.key(),
        beneficiary: claim_account.beneficiary,
        total_tokens: amount,
        created_at: now,
        remaining_capacity: token_vault.remaining_capacity(),
    });

    Ok(())
}
