use anchor_lang::prelude::*;

use crate::state::VaultKind;

/// Event emitted when a vault is created and funded
#[event]
pub struct TokenVaultInitialized {
    /// The vault account public key
    pub token_vault: Pubkey,
    /// Claims vault or owner-scoped sweep vault
    pub kind: VaultKind,
    /// Depositing authority
    pub owner: Pubkey,
    /// Token mint address
    pub mint: Pubkey,
    /// Treasury token account holding the deposit
    pub treasury: Pubkey,
    /// Human-readable vault label
    pub vault_name: String,
    /// Amount of tokens deposited
    pub total_tokens: u64,
}

/// Event emitted when a beneficiary claim is created
#[event]
pub struct ClaimAccountCreated {
    /// The vault the claim reserves capacity in
    pub token_vault: Pubkey,
    /// The claim account public key
    pub claim_account: Pubkey,
    /// Beneficiary entitled to the claim
    pub beneficiary: Pubkey,
    /// Total entitlement of the claim
    pub total_tokens: u64,
    /// Vesting start
    pub created_at: i64,
    /// Capacity left in the vault after this reservation
    pub remaining_capacity: u64,
}

/// Event emitted when a beneficiary withdraws unlocked tokens
#[event]
pub struct TokensClaimed {
    pub token_vault: Pubkey,
    pub beneficiary: Pubkey,
    /// Amount transferred in this transaction
    pub amount: u64,
    /// Cumulative amount claimed by this beneficiary
    pub claim_tokens_claimed: u64,
    /// Entitlement of this beneficiary
    pub claim_total_tokens: u64,
    /// Cumulative amount claimed from the vault by all beneficiaries
    pub vault_tokens_claimed: u64,
}

/// Event emitted when an owner sweeps tokens out of an owner-scoped vault
#[event]
pub struct TokensSwept {
    pub token_vault: Pubkey,
    pub owner: Pubkey,
    /// Wallet whose token account received the tokens
    pub destination: Pubkey,
    pub amount: u64,
    /// Treasury balance left after the sweep
    pub treasury_balance: u64,
}

/// Read-only snapshot of a claim at the current clock
#[event]
pub struct ClaimQuote {
    pub token_vault: Pubkey,
    pub beneficiary: Pubkey,
    pub elapsed_days: i64,
    pub fully_vested: bool,
    pub unlocked_amount: u64,
    pub tokens_claimed: u64,
    pub claimable: u64,
}
