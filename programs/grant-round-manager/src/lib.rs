use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod interfaces;
pub mod states;
pub mod utils;

use instructions::*;

declare_id!("pyfNEHH99Xm61aC36Cv4Lvr8GCaGfsQuyqYRQ7U9DxS");

#[program]
pub mod grant_round_manager {
    use super::*;

    pub fn initialize_manager(ctx: Context<InitializeManager>) -> Result<()> {
        instructions::initialize_manager(ctx)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_grant_round(
        ctx: Context<CreateGrantRound>,
        metadata_admin: Pubkey,
        payout_admin: Pubkey,
        start_time: i64,
        end_time: i64,
        meta_ptr: String,
        min_contribution: u64,
    ) -> Result<()> {
        instructions::create_grant_round(
            ctx,
            metadata_admin,
            payout_admin,
            start_time,
            end_time,
            meta_ptr,
            min_contribution,
        )
    }

    pub fn grant_round_is_active(ctx: Context<GrantRoundIsActive>) -> Result<bool> {
        instructions::grant_round_is_active(ctx)
    }

    pub fn swap_and_donate<'info>(
        ctx: Context<'_, '_, '_, 'info, SwapAndDonate<'info>>,
        donation: Donation,
    ) -> Result<()> {
        instructions::swap_and_donate(ctx, donation)
    }
}
