use anchor_lang::prelude::*;

#[event]
pub struct GrantRoundManagerInitialized {
    pub manager: Pubkey,
    pub registry: Pubkey,
    pub router: Pubkey,
    pub donation_mint: Pubkey,
}

#[event]
pub struct GrantRoundCreated {
    pub grant_round: Pubkey,
    pub metadata_admin: Pubkey,
    pub payout_admin: Pubkey,
    pub matching_mint: Pubkey,
    pub registry: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub meta_ptr: String,
    pub min_contribution: u64,
}

/// The only record of a donation. Matching-pool accounting for every
/// listed round is done off-chain from this event.
#[event]
pub struct GrantDonation {
    pub grant_id: u64,
    pub token_in: Pubkey,
    pub amount_in: u64,
    pub amount_out: u64,
    pub rounds: Vec<Pubkey>,
}
