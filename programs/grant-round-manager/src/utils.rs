use anchor_lang::prelude::*;

use crate::{
    errors::GrantRoundManagerError,
    states::{GrantRound, MAX_META_PTR_LEN},
};

/// A mint with no supply can't back donations or a matching pool.
pub fn check_token_supply(supply: u64, error: GrantRoundManagerError) -> Result<()> {
    require!(supply > 0, GrantRoundManagerError::from(error));
    Ok(())
}

/// Swaps are issued to the CLMM program, so that is the only router a
/// manager can be configured with.
pub fn check_router(router: &Pubkey, executable: bool) -> Result<()> {
    require!(
        executable && *router == raydium_amm_v3::ID,
        GrantRoundManagerError::InvalidRouter
    );
    Ok(())
}

pub fn check_round_params(start_time: i64, end_time: i64, meta_ptr: &str) -> Result<()> {
    require!(start_time < end_time, GrantRoundManagerError::InvalidTimeRange);
    require!(
        meta_ptr.len() <= MAX_META_PTR_LEN,
        GrantRoundManagerError::MetaPtrTooLong
    );
    Ok(())
}

pub fn check_has_rounds(rounds: &[Pubkey]) -> Result<()> {
    require!(!rounds.is_empty(), GrantRoundManagerError::NoRounds);
    Ok(())
}

/// Grant ids are dense, so a grant exists iff its id is below the count.
pub fn check_grant_exists(grant_id: u64, grant_count: u64) -> Result<()> {
    require!(grant_id < grant_count, GrantRoundManagerError::GrantDoesNotExist);
    Ok(())
}

/// Runs the per-round checks of a donation. Every round is checked for the
/// donation mint before any round is checked for activity.
pub fn check_rounds(rounds: &[GrantRound], donation_mint: &Pubkey, now: i64) -> Result<()> {
    for round in rounds {
        require!(
            round.donation_mint == *donation_mint,
            GrantRoundManagerError::DonationTokenMismatch
        );
    }
    for round in rounds {
        require!(round.is_active(now), GrantRoundManagerError::GrantRoundNotActive);
    }
    Ok(())
}

/// The payee is resolved by the registry; the receiving token account must
/// belong to it.
pub fn check_payee_account(token_account_owner: &Pubkey, payee: &Pubkey) -> Result<()> {
    require!(
        token_account_owner == payee,
        GrantRoundManagerError::InvalidPayeeAccount
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn assert_fails_with(result: Result<()>, code: GrantRoundManagerError) {
        let expected: Error = code.into();
        assert_eq!(result.unwrap_err(), expected);
    }

    fn round(donation_mint: Pubkey, start_time: i64, end_time: i64) -> GrantRound {
        GrantRound {
            donation_mint,
            start_time,
            end_time,
            ..Default::default()
        }
    }

    #[test]
    fn zero_supply_is_rejected_with_given_error() {
        assert_fails_with(
            check_token_supply(0, GrantRoundManagerError::InvalidToken),
            GrantRoundManagerError::InvalidToken,
        );
        assert_fails_with(
            check_token_supply(0, GrantRoundManagerError::InvalidMatchingToken),
            GrantRoundManagerError::InvalidMatchingToken,
        );
        assert!(check_token_supply(1, GrantRoundManagerError::InvalidToken).is_ok());
    }

    #[test]
    fn router_must_be_deployed_clmm_program() {
        assert!(check_router(&raydium_amm_v3::ID, true).is_ok());
        assert_fails_with(
            check_router(&raydium_amm_v3::ID, false),
            GrantRoundManagerError::InvalidRouter,
        );
        assert_fails_with(
            check_router(&Pubkey::new_unique(), true),
            GrantRoundManagerError::InvalidRouter,
        );
    }

    #[test]
    fn round_window_must_be_ordered() {
        assert!(check_round_params(10, 11, "ipfs://meta").is_ok());
        assert_fails_with(
            check_round_params(11, 11, ""),
            GrantRoundManagerError::InvalidTimeRange,
        );
        assert_fails_with(
            check_round_params(12, 11, ""),
            GrantRoundManagerError::InvalidTimeRange,
        );
    }

    #[test]
    fn meta_ptr_is_bounded() {
        let longest = "a".repeat(MAX_META_PTR_LEN);
        assert!(check_round_params(0, 1, &longest).is_ok());
        assert_fails_with(
            check_round_params(0, 1, &format!("{longest}a")),
            GrantRoundManagerError::MetaPtrTooLong,
        );
    }

    #[test]
    fn empty_round_list_is_rejected() {
        assert_fails_with(check_has_rounds(&[]), GrantRoundManagerError::NoRounds);
        assert!(check_has_rounds(&[Pubkey::new_unique()]).is_ok());
    }

    #[test]
    fn grant_must_be_below_count() {
        assert!(check_grant_exists(0, 1).is_ok());
        assert_fails_with(check_grant_exists(1, 1), GrantRoundManagerError::GrantDoesNotExist);
        assert_fails_with(check_grant_exists(500, 1), GrantRoundManagerError::GrantDoesNotExist);
        assert_fails_with(check_grant_exists(0, 0), GrantRoundManagerError::GrantDoesNotExist);
    }

    #[test]
    fn active_rounds_with_matching_mint_pass() {
        let mint = Pubkey::new_unique();
        let rounds = [round(mint, 0, 100), round(mint, 50, 60)];
        assert!(check_rounds(&rounds, &mint, 55).is_ok());
    }

    #[test]
    fn any_foreign_donation_mint_fails() {
        let mint = Pubkey::new_unique();
        let rounds = [round(mint, 0, 100), round(Pubkey::new_unique(), 0, 100)];
        assert_fails_with(
            check_rounds(&rounds, &mint, 10),
            GrantRoundManagerError::DonationTokenMismatch,
        );
    }

    #[test]
    fn any_inactive_round_fails() {
        let mint = Pubkey::new_unique();
        let rounds = [round(mint, 0, 100), round(mint, 200, 300)];
        assert_fails_with(
            check_rounds(&rounds, &mint, 10),
            GrantRoundManagerError::GrantRoundNotActive,
        );
        assert_fails_with(
            check_rounds(&rounds[..1], &mint, 101),
            GrantRoundManagerError::GrantRoundNotActive,
        );
    }

    #[test]
    fn mint_mismatch_is_reported_before_inactivity() {
        let mint = Pubkey::new_unique();
        let rounds = [round(mint, 200, 300), round(Pubkey::new_unique(), 0, 100)];
        assert_fails_with(
            check_rounds(&rounds, &mint, 10),
            GrantRoundManagerError::DonationTokenMismatch,
        );
    }

    #[test]
    fn payee_account_must_belong_to_payee() {
        let payee = Pubkey::new_unique();
        assert!(check_payee_account(&payee, &payee).is_ok());
        assert_fails_with(
            check_payee_account(&Pubkey::new_unique(), &payee),
            GrantRoundManagerError::InvalidPayeeAccount,
        );
    }

    #[test]
    fn error_messages_are_stable() {
        let cases = [
            (GrantRoundManagerError::InvalidRouter, "GrantRoundManager: Invalid router"),
            (GrantRoundManagerError::InvalidToken, "GrantRoundManager: Invalid token"),
            (
                GrantRoundManagerError::InvalidMatchingToken,
                "GrantRoundManager: Invalid matching token",
            ),
            (
                GrantRoundManagerError::NoRounds,
                "GrantRoundManager: Must specify at least one round",
            ),
            (
                GrantRoundManagerError::GrantDoesNotExist,
                "GrantRoundManager: Grant does not exist in registry",
            ),
            (
                GrantRoundManagerError::DonationTokenMismatch,
                "GrantRoundManager: GrantRound's donation token does not match GrantRoundManager's donation token",
            ),
            (
                GrantRoundManagerError::GrantRoundNotActive,
                "GrantRoundManager: GrantRound is not active",
            ),
        ];
        for (code, msg) in cases {
            assert_eq!(code.to_string(), msg);
        }
    }
}
