use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{received_amount, transfer_token};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating the claims vault of a token mint
 *
 * This instruction:
 * - Creates the vault PDA for the mint (one per mint)
 * - Creates the treasury token account PDA, owned by the vault PDA
 * - Transfers the full deposit from the owner's token account to the treasury
 *
 * Access Control: Any signer holding the tokens; the signer becomes the vault owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeTokenVault<'info> {
    /// The depositing authority
    /// - Pays for account creation and signs the deposit transfer
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The vault account (PDA)
    /// - Derived from: ["token_vault", mint]
    #[account(
        init,
        payer = owner,
        space = TokenVault::LEN,
        seeds = [TOKEN_VAULT_SEED.as_bytes(), mint.key().as_ref()],
        bump
    )]
    pub token_vault: Account<'info, TokenVault>,

    /// The token mint distributed by the vault
    #[account(
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Treasury token account (PDA) holding undistributed tokens
    /// - Controlled by the vault PDA as token authority
    /// - Derived from: ["treasury", vault_key]
    #[account(
        init,
        token::mint = mint,
        token::authority = token_vault,
        token::token_program = token_program,
        seeds = [TREASURY_SEED.as_bytes(), token_vault.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account funding the deposit
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub source_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates and funds the claims vault of a mint
 *
 * @param ctx - The account context containing all required accounts
 * @param vault_name - Label stored in the vault (1..=32 bytes)
 * @param total_tokens - Amount moved from the source account into the treasury
 */
pub fn handle_initialize_token_vault(
    ctx: Context<InitializeTokenVault>,
    vault_name: String,
    total_tokens: u64,
) -> Result<()> {
    validate_vault_name(&vault_name)?;
    require!(total_tokens > 0, VaultError::InvalidAmount);
    require!(
        ctx.accounts.source_token_account.amount >= total_tokens,
        VaultError::InsufficientTokens
    );

    let balance_before = ctx.accounts.treasury.amount;
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.source_token_account.to_account_info(),
        ctx.accounts.treasury.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_tokens,
        ctx.accounts.mint.decimals,
        None, // Owner signs for its own account
    )?;

    // Record what the treasury received, net of any transfer fee
    ctx.accounts.treasury.reload()?;
    let deposited = received_amount(balance_before, ctx.accounts.treasury.amount)?;

    let token_vault = &mut ctx.accounts.token_vault;
    token_vault.initialize(
        VaultKind::Claims,
        ctx.accounts.owner.key(),
        vault_name.clone(),
        ctx.accounts.mint.key(),
        deposited,
        ctx.accounts.treasury.key(),
        ctx.bumps.token_vault,
        ctx.bumps.treasury,
    )?;

    emit_cpi!(TokenVaultInitialized {
        token_vault: token_vault.key(),
        kind: VaultKind::Claims,
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.mint.key(),
        treasury: ctx.accounts.treasury.key(),
        vault_name,
        total_tokens: deposited,
    });

    Ok(())
}
