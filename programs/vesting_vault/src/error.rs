use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    // Capacity errors
    #[msg("Insufficient tokens available in vault")]
    InsufficientTokens,
    #[msg("Insufficient unlocked tokens available to claim")]
    InsufficientUnlockedTokens,

    // Access control errors
    #[msg("Signer is not the designated authority of this record")]
    Unauthorized,

    // Record and address errors
    #[msg("Referenced record does not exist")]
    RecordNotFound,
    #[msg("Supplied address does not match the derived address")]
    AddressMismatch,
    #[msg("Vault kind does not support this operation")]
    VaultKindMismatch,
    #[msg("Token mint does not match vault's token mint")]
    TokenMintMismatch,

    // Input validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Vault name must be between 1 and 32 bytes")]
    InvalidVaultName,
    #[msg("Invalid beneficiary account")]
    InvalidBeneficiary,

    // System level errors
    #[msg("Token transfer failed")]
    SubstrateFailure,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
