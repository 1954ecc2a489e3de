use anchor_lang::prelude::*;

use crate::states::GrantRound;

#[derive(Accounts)]
pub struct GrantRoundIsActive<'info> {
    pub grant_round: Account<'info, GrantRound>,
}

pub fn grant_round_is_active(ctx: Context<GrantRoundIsActive>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.grant_round.is_active(now))
}
