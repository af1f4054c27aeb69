use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;

use crate::constants::*;
use crate::error::VaultError;
use crate::state::*;
use crate::utils::received_amount;

const CREATED_AT: i64 = 1_700_000_000;
const VAULT_TOTAL: u64 = 100_000;
const CLAIM_TOTAL: u64 = 1_000;

fn days(n: i64) -> i64 {
    CREATED_AT + n * SECONDS_PER_DAY
}

fn new_vault(kind: VaultKind, total_tokens: u64) -> TokenVault {
    let mut vault = TokenVault::default();
    vault
        .initialize(
            kind,
            Pubkey::new_unique(),
            "Vesting Drop".to_string(),
            Pubkey::new_unique(),
            total_tokens,
            Pubkey::new_unique(),
            254,
            253,
        )
        .unwrap();
    vault
}

fn new_claim(vault: &mut TokenVault, total_tokens: u64) -> ClaimAccount {
    let owner = vault.owner;
    vault.register_claim(&owner, total_tokens).unwrap();
    ClaimAccount {
        beneficiary: Pubkey::new_unique(),
        token_vault: Pubkey::new_unique(),
        total_tokens,
        tokens_claimed: 0,
        created_at: CREATED_AT,
        bump: 255,
    }
}

/// Withdraws from the claim and books it in the vault, as claim_tokens does
fn withdraw(vault: &mut TokenVault, claim: &mut ClaimAccount, now: i64) -> anchor_lang::Result<u64> {
    let amount = claim.record_withdrawal(now)?;
    vault.record_withdrawal(amount)?;
    Ok(amount)
}

fn assert_vault_invariants(vault: &TokenVault) {
    assert!(vault.tokens_claimed <= vault.tokens_released);
    assert!(vault.tokens_released <= vault.total_tokens);
    assert!(vault.tokens_allocated <= vault.total_tokens);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_initialize() {
        let vault = new_vault(VaultKind::Claims, VAULT_TOTAL);

        assert_eq!(vault.kind, VaultKind::Claims);
        assert_eq!(vault.vault_name, "Vesting Drop");
        assert_eq!(vault.total_tokens, VAULT_TOTAL);
        assert_eq!(vault.tokens_allocated, 0);
        assert_eq!(vault.tokens_released, 0);
        assert_eq!(vault.tokens_claimed, 0);
        assert_eq!(vault.total_token_holders, 0);
        assert_eq!(vault.remaining_capacity(), VAULT_TOTAL);
    }

    #[test]
    fn test_vault_initialize_rejects_bad_input() {
        let mut vault = TokenVault::default();
        let err = vault
            .initialize(
                VaultKind::Claims,
                Pubkey::new_unique(),
                "x".repeat(MAX_VAULT_NAME_LEN + 1),
                Pubkey::new_unique(),
                VAULT_TOTAL,
                Pubkey::new_unique(),
                1,
                1,
            )
            .unwrap_err();
        assert_eq!(err, Error::from(VaultError::InvalidVaultName));

        let err = vault
            .initialize(
                VaultKind::Claims,
                Pubkey::new_unique(),
                String::new(),
                Pubkey::new_unique(),
                VAULT_TOTAL,
                Pubkey::new_unique(),
                1,
                1,
            )
            .unwrap_err();
        assert_eq!(err, Error::from(VaultError::InvalidVaultName));

        let err = vault
            .initialize(
                VaultKind::Claims,
                Pubkey::new_unique(),
                "Vesting Drop".to_string(),
                Pubkey::new_unique(),
                0,
                Pubkey::new_unique(),
                1,
                1,
            )
            .unwrap_err();
        assert_eq!(err, Error::from(VaultError::InvalidAmount));

        // Longest allowed name fits in the reserved space
        assert!(validate_vault_name(&"x".repeat(MAX_VAULT_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_vesting_scenario() {
        println!("=== Testing 1000 token claim against a 100000 token vault ===");

        let mut vault = new_vault(VaultKind::Claims, VAULT_TOTAL);
        let mut claim = new_claim(&mut vault, CLAIM_TOTAL);

        assert_eq!(claim.claimable(CREATED_AT).unwrap(), 200);
        assert_eq!(withdraw(&mut vault, &mut claim, CREATED_AT).unwrap(), 200);
        assert_eq!(claim.tokens_claimed, 200);

        assert_eq!(withdraw(&mut vault, &mut claim, days(14)).unwrap(), 100);
        assert_eq!(claim.tokens_claimed, 300);

        assert_eq!(withdraw(&mut vault, &mut claim, days(28)).unwrap(), 100);
        assert_eq!(claim.tokens_claimed, 400);

        assert_eq!(withdraw(&mut vault, &mut claim, days(112)).unwrap(), 600);
        assert_eq!(claim.tokens_claimed, CLAIM_TOTAL);

        let err = withdraw(&mut vault, &mut claim, days(119)).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InsufficientUnlockedTokens));

        assert_eq!(vault.tokens_released, CLAIM_TOTAL);
        assert_eq!(vault.tokens_claimed, CLAIM_TOTAL);
        assert_vault_invariants(&vault);

        println!("✅ Scenario passed: claimed={}", claim.tokens_claimed);
    }

    #[test]
    fn test_double_withdraw_same_time() {
        let mut vault = new_vault(VaultKind::Claims, VAULT_TOTAL);
        let mut claim = new_claim(&mut vault, CLAIM_TOTAL);

        let now = days(30);
        let first = withdraw(&mut vault, &mut claim, now).unwrap();
        assert!(first > 0);
        assert_eq!(claim.claimable(now).unwrap(), 0);

        let before = (claim.tokens_claimed, vault.tokens_claimed, vault.tokens_released);
        let err = withdraw(&mut vault, &mut claim, now).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InsufficientUnlockedTokens));
        assert_eq!(
            before,
            (claim.tokens_claimed, vault.tokens_claimed, vault.tokens_released)
        );
    }

    #[test]
    fn test_withdraw_skipping_checkpoints() {
        let mut vault = new_vault(VaultKind::Claims, VAULT_TOTAL);
        let mut claim = new_claim(&mut vault, CLAIM_TOTAL);

        // First withdrawal only after the window closed pays everything at once
        assert_eq!(withdraw(&mut vault, &mut claim, days(200)).unwrap(), CLAIM_TOTAL);
        assert_eq!(claim.claimable(days(400)).unwrap(), 0);
    }

    #[test]
    fn test_claimed_never_exceeds_total() {
        let mut vault = new_vault(VaultKind::Claims, VAULT_TOTAL);
        let mut claim = new_claim(&mut vault, 999);

        let mut previous = 0;
        for day in 0..=130 {
            let _ = withdraw(&mut vault, &mut claim, days(day));
            assert!(claim.tokens_claimed >= previous);
            assert!(claim.tokens_claimed <= claim.total_tokens);
            assert!(claim.tokens_claimed <= claim.unlocked_amount(days(day)).unwrap());
            previous = claim.tokens_claimed;
            assert_vault_invariants(&vault);
        }
        assert_eq!(claim.tokens_claimed, 999);
    }

    #[test]
    fn test_claim_capacity() {
        let mut vault = new_vault(VaultKind::Claims, 2_500);
        let owner = vault.owner;

        vault.register_claim(&owner, 1_000).unwrap();
        vault.register_claim(&owner, 1_000).unwrap();
        assert_eq!(vault.remaining_capacity(), 500);
        assert_eq!(vault.total_token_holders, 2);

        let err = vault.register_claim(&owner, 501).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InsufficientTokens));
        assert_eq!(vault.tokens_allocated, 2_000);
        assert_eq!(vault.total_token_holders, 2);

        vault.register_claim(&owner, 500).unwrap();
        assert_eq!(vault.remaining_capacity(), 0);
        assert_eq!(vault.total_token_holders, 3);
        assert_vault_invariants(&vault);
    }

    #[test]
    fn test_capacity_ignores_withdrawals() {
        // Withdrawn tokens do not free capacity: allocated claims stay reserved
        let mut vault = new_vault(VaultKind::Claims, 1_000);
        let owner = vault.owner;
        let mut claim = new_claim(&mut vault, 1_000);

        withdraw(&mut vault, &mut claim, days(112)).unwrap();
        let err = vault.register_claim(&owner, 1).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InsufficientTokens));
    }

    #[test]
    fn test_register_claim_rejects_invalid() {
        let mut vault = new_vault(VaultKind::Claims, VAULT_TOTAL);
        let owner = vault.owner;
        let err = vault.register_claim(&owner, 0).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InvalidAmount));

        let mut sweep_vault = new_vault(VaultKind::OwnerScoped, VAULT_TOTAL);
        let sweep_owner = sweep_vault.owner;
        let err = sweep_vault.register_claim(&sweep_owner, CLAIM_TOTAL).unwrap_err();
        assert_eq!(err, Error::from(VaultError::VaultKindMismatch));
        assert_eq!(sweep_vault.tokens_allocated, 0);
        assert_eq!(sweep_vault.total_token_holders, 0);
    }

    #[test]
    fn test_vault_withdrawal_bounded_by_allocation() {
        let mut vault = new_vault(VaultKind::Claims, VAULT_TOTAL);
        let owner = vault.owner;
        vault.register_claim(&owner, CLAIM_TOTAL).unwrap();

        vault.record_withdrawal(CLAIM_TOTAL).unwrap();
        let err = vault.record_withdrawal(1).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InsufficientTokens));
        assert_eq!(vault.tokens_released, CLAIM_TOTAL);
        assert_eq!(vault.tokens_claimed, CLAIM_TOTAL);
    }

    #[test]
    fn test_many_claims_share_vault() {
        let mut vault = new_vault(VaultKind::Claims, 10_000);
        let mut claims: Vec<ClaimAccount> = (0..10).map(|_| new_claim(&mut vault, 1_000)).collect();
        assert_eq!(vault.remaining_capacity(), 0);

        for day in [0, 7, 50, 112] {
            for claim in claims.iter_mut() {
                let _ = withdraw(&mut vault, claim, days(day));
            }
            assert_vault_invariants(&vault);
        }

        assert_eq!(vault.tokens_claimed, 10_000);
        assert!(claims.iter().all(|c| c.tokens_claimed == 1_000));
    }

    #[test]
    fn test_register_claim_requires_owner() {
        let mut vault = new_vault(VaultKind::Claims, VAULT_TOTAL);

        let err = vault.register_claim(&Pubkey::new_unique(), CLAIM_TOTAL).unwrap_err();
        assert_eq!(err, Error::from(VaultError::Unauthorized));
        assert_eq!(vault.tokens_allocated, 0);
        assert_eq!(vault.total_token_holders, 0);

        let owner = vault.owner;
        vault.register_claim(&owner, CLAIM_TOTAL).unwrap();
        assert_eq!(vault.tokens_allocated, CLAIM_TOTAL);
        assert_eq!(vault.total_token_holders, 1);
    }

    #[test]
    fn test_sweep_authorization() {
        println!("=== Testing owner sweeps against a 100000 token treasury ===");

        let vault = new_vault(VaultKind::OwnerScoped, VAULT_TOTAL);
        let owner = vault.owner;

        // Whole treasury can go in one sweep, one token more cannot
        assert!(vault.authorize_sweep(&owner, VAULT_TOTAL, VAULT_TOTAL).is_ok());
        let err = vault.authorize_sweep(&owner, VAULT_TOTAL + 1, VAULT_TOTAL).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InsufficientTokens));

        // Bounded by the live balance, not by the original deposit
        let err = vault.authorize_sweep(&owner, 600, 500).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InsufficientTokens));

        let err = vault.authorize_sweep(&owner, 0, VAULT_TOTAL).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InvalidAmount));

        let err = vault
            .authorize_sweep(&Pubkey::new_unique(), 1, VAULT_TOTAL)
            .unwrap_err();
        assert_eq!(err, Error::from(VaultError::Unauthorized));

        // A sweep never touches the ledger counters
        assert_eq!(vault.total_tokens, VAULT_TOTAL);
        assert_eq!(vault.tokens_released, 0);
        assert_eq!(vault.tokens_claimed, 0);

        println!("✅ Sweep checks passed");
    }

    #[test]
    fn test_claims_vault_cannot_be_swept() {
        let vault = new_vault(VaultKind::Claims, VAULT_TOTAL);
        let owner = vault.owner;

        let err = vault.authorize_sweep(&owner, 1, VAULT_TOTAL).unwrap_err();
        assert_eq!(err, Error::from(VaultError::VaultKindMismatch));
    }

    #[test]
    fn test_capacity_follows_received_deposit() {
        // A transfer fee left 990 of the 1000 sent in the treasury
        let deposited = received_amount(0, 990).unwrap();
        assert_eq!(deposited, 990);

        let mut vault = new_vault(VaultKind::Claims, deposited);
        let owner = vault.owner;
        let err = vault.register_claim(&owner, 1_000).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InsufficientTokens));

        vault.register_claim(&owner, 990).unwrap();
        assert_eq!(vault.remaining_capacity(), 0);
    }

    #[test]
    fn test_received_amount_rejects_empty_deposit() {
        let err = received_amount(500, 500).unwrap_err();
        assert_eq!(err, Error::from(VaultError::InvalidAmount));

        let err = received_amount(500, 400).unwrap_err();
        assert_eq!(err, Error::from(VaultError::ArithmeticOverflow));

        assert_eq!(received_amount(500, 1_500).unwrap(), 1_000);
    }
}
