use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::error::VaultError;

/**
 * Moves tokens into or out of a vault treasury (SPL Token and Token 2022)
 *
 * Every deposit, claim payout and sweep goes through here. Callers pass an
 * amount they have just recomputed from ledger state. A token program that
 * fails inside the CPI aborts the whole transaction on its own, so no ledger
 * counter written earlier in the instruction survives it. The SubstrateFailure
 * mapping below only covers errors raised before the CPI is invoked.
 *
 * @param signer_seeds - Vault PDA seeds when the treasury is the source,
 *                       None when a wallet signs for its own account
 */
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    require!(amount > 0, VaultError::InvalidAmount);

    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals).map_err(|err| {
        msg!("Token transfer of {} failed: {}", amount, err);
        error!(VaultError::SubstrateFailure)
    })
}

/// Amount a treasury actually gained across a deposit
///
/// Transfer-fee mints (Token 2022) credit less than the amount sent, so
/// vault capacity is taken from the balances, not from the requested amount.
pub fn received_amount(balance_before: u64, balance_after: u64) -> Result<u64> {
    let received = balance_after
        .checked_sub(balance_before)
        .ok_or(VaultError::ArithmeticOverflow)?;
    require!(received > 0, VaultError::InvalidAmount);
    Ok(received)
}
