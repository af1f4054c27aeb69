//! Vesting curve: 20% cliff at creation, the rest linear over 112 days.
//!
//! Fractions are fixed-point numerators over `FRACTION_SCALE`, progressing in
//! whole-day steps. Amounts are rounded down so a vault never over-pays.

use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, CLIFF_BPS, FRACTION_SCALE, SECONDS_PER_DAY, VESTING_DAYS};
use crate::error::VaultError;

/// Whole days elapsed since `created_at`, clamped to `[0, VESTING_DAYS]`
pub fn elapsed_days(created_at: i64, now: i64) -> i64 {
    if now <= created_at {
        return 0;
    }
    // now > created_at, so the difference fits once widened
    let elapsed = (now as i128 - created_at as i128) / SECONDS_PER_DAY as i128;
    elapsed.min(VESTING_DAYS as i128) as i64
}

/// Unlocked fraction at `now`, scaled by `FRACTION_SCALE`
///
/// Ranges from `CLIFF_BPS * VESTING_DAYS` (20%) at creation up to
/// `FRACTION_SCALE` (100%) once the vesting window has passed.
pub fn unlocked_fraction(created_at: i64, now: i64) -> u64 {
    let days = elapsed_days(created_at, now) as u64;
    CLIFF_BPS * VESTING_DAYS as u64 + (BPS_DENOMINATOR - CLIFF_BPS) * days
}

/// Cumulative amount of `total_tokens` unlocked at `now`, rounded down
pub fn unlocked_amount(total_tokens: u64, created_at: i64, now: i64) -> Result<u64> {
    let fraction = unlocked_fraction(created_at, now);
    let unlocked = (total_tokens as u128)
        .checked_mul(fraction as u128)
        .ok_or(VaultError::ArithmeticOverflow)?
        / FRACTION_SCALE as u128;
    Ok(u64::try_from(unlocked).map_err(|_| VaultError::ArithmeticOverflow)?)
}

/// True once the whole entitlement has unlocked
pub fn is_fully_vested(created_at: i64, now: i64) -> bool {
    elapsed_days(created_at, now) >= VESTING_DAYS
}
