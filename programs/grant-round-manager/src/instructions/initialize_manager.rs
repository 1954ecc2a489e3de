use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{
    errors::GrantRoundManagerError,
    events::GrantRoundManagerInitialized,
    interfaces::registry,
    states::{GrantRoundManager, MANAGER_AUTHORITY_PREFIX},
    utils::{check_router, check_token_supply},
};

#[derive(Accounts)]
pub struct InitializeManager<'info> {
    #[account(init, payer = payer, space = GrantRoundManager::LEN)]
    pub manager: Account<'info, GrantRoundManager>,
    #[account(
      seeds = [MANAGER_AUTHORITY_PREFIX.as_bytes(), manager.key().as_ref()],
      bump,
    )]
    /// CHECK: pda account ["manager_authority", manager]
    pub manager_authority: AccountInfo<'info>,

    /// CHECK: validated against `registry_program` in the handler
    pub registry: AccountInfo<'info>,
    /// CHECK: must be executable, checked in the handler
    pub registry_program: AccountInfo<'info>,
    /// CHECK: must be executable, checked in the handler
    pub router: AccountInfo<'info>,

    pub donation_mint: Account<'info, Mint>,
    #[account(
      constraint = donation_vault.owner == manager_authority.key() @ GrantRoundManagerError::InvalidDonationVault,
      constraint = donation_vault.mint == donation_mint.key() @ GrantRoundManagerError::InvalidDonationVault,
    )]
    pub donation_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_manager(ctx: Context<InitializeManager>) -> Result<()> {
    let accounts = &ctx.accounts;

    registry::check_registry(&accounts.registry, &accounts.registry_program)?;
    // Probe the interface; a registry that can't count its grants can't
    // validate donations either.
    registry::grant_count(&accounts.registry_program, &accounts.registry)?;

    check_router(accounts.router.key, accounts.router.executable)?;
    check_token_supply(accounts.donation_mint.supply, GrantRoundManagerError::InvalidToken)?;

    let manager_key = ctx.accounts.manager.key();
    let manager = &mut ctx.accounts.manager;
    manager.registry = ctx.accounts.registry.key();
    manager.registry_program = ctx.accounts.registry_program.key();
    manager.router = ctx.accounts.router.key();
    manager.donation_mint = ctx.accounts.donation_mint.key();
    manager.donation_vault = ctx.accounts.donation_vault.key();
    manager.authority_bump = ctx.bumps.manager_authority;

    msg!("GrantRoundManager {} initialized", manager_key);
    emit!(GrantRoundManagerInitialized {
        manager: manager_key,
        registry: manager.registry,
        router: manager.router,
        donation_mint: manager.donation_mint,
    });

    Ok(())
}
