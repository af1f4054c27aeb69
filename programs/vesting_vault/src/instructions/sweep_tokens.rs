use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{transfer_token, verify_vault_addresses};
use crate::event::*;

/**
 * Account context for sweeping tokens out of an owner-scoped vault
 *
 * The owner moves any amount up to the current treasury balance to an
 * arbitrary wallet. There is no vesting gate and no ledger counter changes;
 * the treasury balance is the only state affected.
 *
 * Access Control: Vault owner only (also enforced by the PDA seeds)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SweepTokens<'info> {
    /// The vault owner
    /// - Pays for the destination token account if it does not exist yet
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The owner-scoped vault
    /// - Derived from: ["token_vault_okx", mint, owner]
    #[account(
        seeds = [OWNER_VAULT_SEED.as_bytes(), mint.key().as_ref(), owner.key().as_ref()],
        bump = token_vault.bump,
        has_one = owner @ VaultError::Unauthorized,
        has_one = mint @ VaultError::TokenMintMismatch,
        has_one = treasury @ VaultError::AddressMismatch,
        constraint = token_vault.kind == VaultKind::OwnerScoped @ VaultError::VaultKindMismatch,
    )]
    pub token_vault: Account<'info, TokenVault>,

    /// Treasury token account of the vault
    /// - Derived from: ["treasury", vault_key]
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), token_vault.key().as_ref()],
        bump = token_vault.treasury_bump,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// Wallet receiving the swept tokens
    /// CHECK: Any wallet; only used as the authority of its associated token account
    pub destination_wallet: UncheckedAccount<'info>,

    /// Destination wallet's associated token account
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = destination_wallet,
        associated_token::token_program = token_program,
    )]
    pub destination_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Transfers `amount` tokens from the treasury to the destination wallet
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Tokens to move; must not exceed the current treasury balance
 */
pub fn handle_sweep_tokens(ctx: Context<SweepTokens>, amount: u64) -> Result<()> {
    let token_vault = &ctx.accounts.token_vault;

    // ===== VALIDATION PHASE =====

    verify_vault_addresses(token_vault, &token_vault.key(), &ctx.accounts.treasury.key())?;

    // Read the live balance right before debiting
    let treasury_balance = ctx.accounts.treasury.amount;
    token_vault.authorize_sweep(&ctx.accounts.owner.key(), amount, treasury_balance)?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let seeds = &[
        OWNER_VAULT_SEED.as_bytes(),
        token_vault.mint.as_ref(),
        token_vault.owner.as_ref(),
        &[token_vault.bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.treasury.to_account_info(),
        ctx.accounts.destination_token_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokensSwept {
        token_vault: token_vault.key(),
        owner: ctx.accounts.owner.key(),
        destination: ctx.accounts.destination_wallet.key(),
        amount,
        treasury_balance: treasury_balance - amount,
    });

    Ok(())
}
