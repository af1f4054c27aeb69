use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::VaultError;
use crate::state::{ClaimAccount, TokenVault, VaultKind};

/// Standard vault PDA for a mint: ["token_vault", mint]
pub fn find_token_vault_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_VAULT_SEED.as_bytes(), mint.as_ref()], &crate::ID)
}

/// Owner-scoped vault PDA: ["token_vault_okx", mint, owner]
pub fn find_owner_vault_address(mint: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[OWNER_VAULT_SEED.as_bytes(), mint.as_ref(), owner.as_ref()],
        &crate::ID,
    )
}

/// Treasury token account PDA of a vault: ["treasury", vault]
pub fn find_treasury_address(token_vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED.as_bytes(), token_vault.as_ref()], &crate::ID)
}

/// Claim account PDA: ["claim_account", vault, beneficiary]
pub fn find_claim_address(token_vault: &Pubkey, beneficiary: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CLAIM_SEED.as_bytes(), token_vault.as_ref(), beneficiary.as_ref()],
        &crate::ID,
    )
}

// The helpers below re-derive with a stored bump, which is cheap enough to
// run inside every handler.

fn create_address(seeds: &[&[u8]]) -> Result<Pubkey> {
    Pubkey::create_program_address(seeds, &crate::ID).map_err(|_| error!(VaultError::AddressMismatch))
}

pub fn token_vault_address(mint: &Pubkey, bump: u8) -> Result<Pubkey> {
    create_address(&[TOKEN_VAULT_SEED.as_bytes(), mint.as_ref(), &[bump]])
}

pub fn owner_vault_address(mint: &Pubkey, owner: &Pubkey, bump: u8) -> Result<Pubkey> {
    create_address(&[
        OWNER_VAULT_SEED.as_bytes(),
        mint.as_ref(),
        owner.as_ref(),
        &[bump],
    ])
}

pub fn treasury_address(token_vault: &Pubkey, bump: u8) -> Result<Pubkey> {
    create_address(&[TREASURY_SEED.as_bytes(), token_vault.as_ref(), &[bump]])
}

pub fn claim_address(token_vault: &Pubkey, beneficiary: &Pubkey, bump: u8) -> Result<Pubkey> {
    create_address(&[
        CLAIM_SEED.as_bytes(),
        token_vault.as_ref(),
        beneficiary.as_ref(),
        &[bump],
    ])
}

/// Re-derives a vault address from its stored kind, mint, owner and bump
pub fn verify_vault_address(vault: &TokenVault, vault_key: &Pubkey) -> Result<()> {
    let expected = match vault.kind {
        VaultKind::Claims => token_vault_address(&vault.mint, vault.bump)?,
        VaultKind::OwnerScoped => owner_vault_address(&vault.mint, &vault.owner, vault.bump)?,
    };
    require_keys_eq!(*vault_key, expected, VaultError::AddressMismatch);
    Ok(())
}

/**
 * Re-derives a vault's own address and its treasury address from the stored
 * mint, owner and bumps, and compares them with the accounts supplied.
 *
 * @param vault_key - Address the vault record was loaded from
 * @param treasury_key - Address of the supplied treasury token account
 */
pub fn verify_vault_addresses(
    vault: &TokenVault,
    vault_key: &Pubkey,
    treasury_key: &Pubkey,
) -> Result<()> {
    verify_vault_address(vault, vault_key)?;

    let expected_treasury = treasury_address(vault_key, vault.treasury_bump)?;
    require_keys_eq!(expected_treasury, vault.treasury, VaultError::AddressMismatch);
    require_keys_eq!(*treasury_key, expected_treasury, VaultError::AddressMismatch);

    Ok(())
}

/// Re-derives a claim address from its stored vault, beneficiary and bump
pub fn verify_claim_address(claim: &ClaimAccount, claim_key: &Pubkey) -> Result<()> {
    let expected = claim_address(&claim.token_vault, &claim.beneficiary, claim.bump)?;
    require_keys_eq!(*claim_key, expected, VaultError::AddressMismatch);
    Ok(())
}
