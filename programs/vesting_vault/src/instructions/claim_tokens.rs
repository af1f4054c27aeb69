use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{transfer_token, verify_claim_address, verify_vault_addresses};
use crate::event::*;

/**
 * Account context for withdrawing unlocked tokens
 *
 * The beneficiary of a claim withdraws everything that has unlocked since
 * their previous withdrawal. The instruction recomputes the unlocked amount
 * from the claim's vesting start and the current clock, advances the claim and
 * vault counters, and transfers the delta from the treasury.
 *
 * Access Control: Beneficiary recorded in the claim only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    /// The beneficiary withdrawing tokens
    /// - Must sign the transaction
    /// - Pays for their associated token account if it does not exist yet
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The claims vault of this mint
    /// - Derived from: ["token_vault", mint]
    /// - Released and claimed counters are updated
    #[account(
        mut,
        seeds = [TOKEN_VAULT_SEED.as_bytes(), mint.key().as_ref()],
        bump = token_vault.bump,
        has_one = mint @ VaultError::TokenMintMismatch,
        has_one = treasury @ VaultError::AddressMismatch,
        constraint = token_vault.kind == VaultKind::Claims @ VaultError::VaultKindMismatch,
    )]
    pub token_vault: Account<'info, TokenVault>,

    /// Treasury token account holding the vault's undistributed tokens
    /// - Derived from: ["treasury", vault_key]
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), token_vault.key().as_ref()],
        bump = token_vault.treasury_bump,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// The beneficiary's claim on this vault
    /// - Derived from: ["claim_account", vault_key, beneficiary_key]
    #[account(
        mut,
        seeds = [CLAIM_SEED.as_bytes(), token_vault.key().as_ref(), beneficiary.key().as_ref()],
        bump = claim_account.bump,
        has_one = beneficiary @ VaultError::Unauthorized,
        has_one = token_vault @ VaultError::AddressMismatch,
    )]
    pub claim_account: Account<'info, ClaimAccount>,

    /// Beneficiary's associated token account receiving the tokens
    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Withdraws every token unlocked and not yet claimed
 *
 * @param ctx - The account context containing all required accounts
 *
 * Validation Process:
 * 1. Re-derive vault, treasury and claim addresses from stored seeds
 * 2. Compute claimable amount at the current clock
 * 3. Fail with InsufficientUnlockedTokens when nothing new has unlocked
 * 4. Advance counters, then transfer from the treasury
 */
pub fn handle_claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    let token_vault_key = ctx.accounts.token_vault.key();
    let claim_account_key = ctx.accounts.claim_account.key();
    let token_vault = &mut ctx.accounts.token_vault;
    let claim_account = &mut ctx.accounts.claim_account;

    // ===== VALIDATION PHASE =====

    verify_vault_addresses(token_vault, &token_vault_key, &ctx.accounts.treasury.key())?;
    verify_claim_address(claim_account, &claim_account_key)?;

    let current_time = Clock::get()?.unix_timestamp;

    // ===== EFFECTS PHASE (State Updates) =====

    // Recomputed from current state; nothing cached across instructions
    let amount = claim_account.record_withdrawal(current_time)?;
    token_vault.record_withdrawal(amount)?;

    require!(
        ctx.accounts.treasury.amount >= amount,
        VaultError::InsufficientTokens
    );

    let mint_key = token_vault.mint;
    let vault_bump = token_vault.bump;
    let vault_tokens_claimed = token_vault.tokens_claimed;
    let claim_tokens_claimed = claim_account.tokens_claimed;
    let claim_total_tokens = claim_account.total_tokens;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let seeds = &[
        TOKEN_VAULT_SEED.as_bytes(),
        mint_key.as_ref(),
        &[vault_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.treasury.to_account_info(),
        ctx.accounts.beneficiary_token_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokensClaimed {
        token_vault: token_vault_key,
        beneficiary: ctx.accounts.beneficiary.key(),
        amount,
        claim_tokens_claimed,
        claim_total_tokens,
        vault_tokens_claimed,
    });

    Ok(())
}
