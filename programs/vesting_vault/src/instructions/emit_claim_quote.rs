use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;
use crate::utils::schedule;

/**
 * Account context for quoting a claim
 *
 * Read-only: reports how much a beneficiary could withdraw right now without
 * sending a withdrawal that might fail. Any account may pay for the call.
 */
#[derive(Accounts)]
pub struct EmitClaimQuote<'info> {
    /// Vault the claim belongs to
    pub token_vault: Account<'info, TokenVault>,

    /// CHECK: Only used as a key in the claim PDA seeds
    pub beneficiary: UncheckedAccount<'info>,

    /// Claim account, possibly not created yet
    /// - Derived from: ["claim_account", vault_key, beneficiary_key]
    /// CHECK: Existence and ownership are checked in the handler
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), token_vault.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub claim_account: UncheckedAccount<'info>,
}

/**
 * Emits a ClaimQuote event for the claim at the current clock
 *
 * Fails with RecordNotFound when no claim exists for the beneficiary.
 */
pub fn handle_emit_claim_quote(ctx: Context<EmitClaimQuote>) -> Result<()> {
    let claim_info = &ctx.accounts.claim_account;

    require!(claim_info.data_len() != 0, VaultError::RecordNotFound);
    require!(
        claim_info.owner == &crate::ID,
        VaultError::RecordNotFound
    );

    let claim_data = claim_info.try_borrow_data()?;
    let claim = ClaimAccount::try_deserialize(&mut claim_data.as_ref())?;

    require_keys_eq!(
        claim.token_vault,
        ctx.accounts.token_vault.key(),
        VaultError::AddressMismatch
    );

    let current_time = Clock::get()?.unix_timestamp;
    let unlocked_amount = claim.unlocked_amount(current_time)?;
    let claimable = claim.claimable(current_time)?;

    emit!(ClaimQuote {
        token_vault: claim.token_vault,
        beneficiary: claim.beneficiary,
        elapsed_days: schedule::elapsed_days(claim.created_at, current_time),
        fully_vested: schedule::is_fully_vested(claim.created_at, current_time),
        unlocked_amount,
        tokens_claimed: claim.tokens_claimed,
        claimable,
    });

    Ok(())
}
