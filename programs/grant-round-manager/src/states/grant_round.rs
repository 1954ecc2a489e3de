use anchor_lang::prelude::*;

use super::GrantRoundManager;

pub const MAX_META_PTR_LEN: usize = 256;

#[account]
#[derive(Debug, Default, InitSpace)]
pub struct GrantRound {
    pub metadata_admin: Pubkey,
    pub payout_admin: Pubkey,
    pub registry: Pubkey,
    /// Inherited from the creating manager.
    pub donation_mint: Pubkey,
    pub matching_mint: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    #[max_len(MAX_META_PTR_LEN)]
    pub meta_ptr: String,
    pub min_contribution: u64,
}

impl GrantRound {
    /// A round of `manager`. The donation mint always comes from the manager.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        manager: &GrantRoundManager,
        registry: Pubkey,
        matching_mint: Pubkey,
        metadata_admin: Pubkey,
        payout_admin: Pubkey,
        start_time: i64,
        end_time: i64,
        meta_ptr: String,
        min_contribution: u64,
    ) -> Self {
        Self {
            metadata_admin,
            payout_admin,
            registry,
            donation_mint: manager.donation_mint,
            matching_mint,
            start_time,
            end_time,
            meta_ptr,
            min_contribution,
        }
    }

    /// A round accepts donations from `start_time` through `end_time`, both inclusive.
    pub fn is_active(&self, now: i64) -> bool {
        self.start_time <= now && now <= self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(start_time: i64, end_time: i64) -> GrantRound {
        GrantRound {
            start_time,
            end_time,
            ..Default::default()
        }
    }

    #[test]
    fn not_active_before_start() {
        assert!(!round(100, 200).is_active(99));
    }

    #[test]
    fn active_on_window_bounds() {
        let r = round(100, 200);
        assert!(r.is_active(100));
        assert!(r.is_active(150));
        assert!(r.is_active(200));
    }

    #[test]
    fn not_active_after_end() {
        assert!(!round(100, 200).is_active(201));
    }

    #[test]
    fn new_round_keeps_parameters_and_manager_mint() {
        let manager = GrantRoundManager {
            donation_mint: Pubkey::new_unique(),
            ..Default::default()
        };
        let registry = Pubkey::new_unique();
        let matching_mint = Pubkey::new_unique();
        let metadata_admin = Pubkey::new_unique();
        let payout_admin = Pubkey::new_unique();

        let r = GrantRound::new(
            &manager,
            registry,
            matching_mint,
            metadata_admin,
            payout_admin,
            100,
            200,
            "ipfs://round".to_string(),
            5,
        );

        assert_eq!(r.metadata_admin, metadata_admin);
        assert_eq!(r.payout_admin, payout_admin);
        assert_eq!(r.registry, registry);
        assert_eq!(r.donation_mint, manager.donation_mint);
        assert_eq!(r.matching_mint, matching_mint);
        assert_eq!(r.start_time, 100);
        assert_eq!(r.end_time, 200);
        assert_eq!(r.meta_ptr, "ipfs://round");
        assert_eq!(r.min_contribution, 5);
    }

    #[test]
    fn space_fits_longest_meta_ptr() {
        let r = GrantRound {
            meta_ptr: "x".repeat(MAX_META_PTR_LEN),
            ..Default::default()
        };
        let encoded = r.try_to_vec().unwrap();
        assert_eq!(encoded.len(), GrantRound::INIT_SPACE);
    }
}
