use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{received_amount, transfer_token};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating an owner-scoped (sweep) vault
 *
 * Same deposit flow as the claims vault, but the vault PDA is keyed by both
 * mint and owner, so every owner gets an independent vault per mint. Tokens
 * leave this vault only through owner sweeps; no claims can be created
 * against it.
 *
 * Access Control: Any signer holding the tokens; the signer becomes the vault owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeOwnerScopedVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The vault account (PDA)
    /// - Derived from: ["token_vault_okx", mint, owner]
    #[account(
        init,
        payer = owner,
        space = TokenVault::LEN,
        seeds = [OWNER_VAULT_SEED.as_bytes(), mint.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub token_vault: Account<'info, TokenVault>,

    #[account(
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Treasury token account (PDA)
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

    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub source_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_initialize_owner_scoped_vault(
    ctx: Context<InitializeOwnerScopedVault>,
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
        None,
    )?;

    // Record what the treasury received, net of any transfer fee
    ctx.accounts.treasury.reload()?;
    let deposited = received_amount(balance_before, ctx.accounts.treasury.amount)?;

    let token_vault = &mut ctx.accounts.token_vault;
    token_vault.initialize(
        VaultKind::OwnerScoped,
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
        kind: VaultKind::OwnerScoped,
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.mint.key(),
        treasury: ctx.accounts.treasury.key(),
        vault_name,
        total_tokens: deposited,
    });

    Ok(())
}
