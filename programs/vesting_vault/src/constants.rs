use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Vesting curve parameters, PDA seeds and record limits used throughout
 * the vesting vault program.
 */

/// ===== VESTING SCHEDULE CONSTANTS =====

/// Length of one vesting day in seconds
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Length of the linear vesting window (16 weeks)
/// - The remaining entitlement after the cliff unlocks over this many days
/// - A claim is fully vested at created_at + VESTING_DAYS days
#[constant]
pub const VESTING_DAYS: i64 = 112;

/// Basis point denominator (100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Portion unlocked immediately at claim creation (20%)
#[constant]
pub const CLIFF_BPS: u64 = 2_000;

/// Fixed-point scale of an unlocked fraction
/// - One whole entitlement equals FRACTION_SCALE
/// - Chosen so that every whole elapsed day maps to an integer numerator
pub const FRACTION_SCALE: u64 = BPS_DENOMINATOR * VESTING_DAYS as u64;

/// ===== RECORD LIMITS =====

/// Maximum length in bytes of a vault name
#[constant]
pub const MAX_VAULT_NAME_LEN: usize = 32;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the standard (claims) vault PDA
/// - Used in: ["token_vault", mint]
/// - One claims vault per token mint
#[constant]
pub const TOKEN_VAULT_SEED: &str = "token_vault";

/// Seed for the owner-scoped (sweep) vault PDA
/// - Used in: ["token_vault_okx", mint, owner]
/// - One sweep vault per (mint, owner) pair
#[constant]
pub const OWNER_VAULT_SEED: &str = "token_vault_okx";

/// Seed for the treasury token account PDA
/// - Used in: ["treasury", vault_key]
/// - Holds every undistributed token of the vault, with the vault PDA as authority
#[constant]
pub const TREASURY_SEED: &str = "treasury";

/// Seed for the claim account PDA
/// - Used in: ["claim_account", vault_key, beneficiary_key]
/// - A (vault, beneficiary) pair always maps to exactly one claim
#[constant]
pub const CLAIM_SEED: &str = "claim_account";
