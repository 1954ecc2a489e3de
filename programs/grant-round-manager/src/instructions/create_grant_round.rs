use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{
    errors::GrantRoundManagerError,
    events::GrantRoundCreated,
    interfaces::registry,
    states::{GrantRound, GrantRoundManager, DISCRIMINATOR_LEN},
    utils::{check_round_params, check_token_supply},
};

#[derive(Accounts)]
pub struct CreateGrantRound<'info> {
    pub manager: Account<'info, GrantRoundManager>,
    #[account(init, payer = payer, space = DISCRIMINATOR_LEN + GrantRound::INIT_SPACE)]
    pub grant_round: Account<'info, GrantRound>,

    pub matching_mint: Account<'info, Mint>,
    /// CHECK: validated against `registry_program` in the handler
    pub registry: AccountInfo<'info>,
    /// CHECK: must be executable, checked in the handler
    pub registry_program: AccountInfo<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
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
    check_token_supply(
        ctx.accounts.matching_mint.supply,
        GrantRoundManagerError::InvalidMatchingToken,
    )?;
    registry::check_registry(&ctx.accounts.registry, &ctx.accounts.registry_program)?;
    registry::grant_count(&ctx.accounts.registry_program, &ctx.accounts.registry)?;
    check_round_params(start_time, end_time, &meta_ptr)?;

    let grant_round_key = ctx.accounts.grant_round.key();
    let round = GrantRound::new(
        &ctx.accounts.manager,
        ctx.accounts.registry.key(),
        ctx.accounts.matching_mint.key(),
        metadata_admin,
        payout_admin,
        start_time,
        end_time,
        meta_ptr.clone(),
        min_contribution,
    );
    ctx.accounts.grant_round.set_inner(round);
    let grant_round = &ctx.accounts.grant_round;

    msg!(
        "GrantRound {} created, active [{}, {}]",
        grant_round_key,
        start_time,
        end_time
    );
    emit!(GrantRoundCreated {
        grant_round: grant_round_key,
        metadata_admin,
        payout_admin,
        matching_mint: grant_round.matching_mint,
        registry: grant_round.registry,
        start_time,
        end_time,
        meta_ptr,
        min_contribution,
    });

    Ok(())
}
