use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, spl_token::native_mint, Mint, SyncNative, Token, TokenAccount, Transfer};
use raydium_amm_v3::states::{AmmConfig, PoolState};

use crate::{
    errors::GrantRoundManagerError,
    events::GrantDonation,
    interfaces::{
        exchange::{self, ExchangeAccounts, SwapRequest},
        registry,
    },
    states::{GrantRound, GrantRoundManager, MANAGER_AUTHORITY_PREFIX},
    utils::{check_grant_exists, check_has_rounds, check_payee_account, check_rounds},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Donation {
    pub grant_id: u64,
    /// Rounds credited with the full donation. Their accounts must lead the
    /// remaining accounts, in this order.
    pub rounds: Vec<Pubkey>,
    pub token_in: Pubkey,
    /// `AmmConfig` index of the pool to swap through.
    pub fee: u16,
    pub deadline: i64,
    pub amount_in: u64,
    pub amount_out_minimum: u64,
    pub sqrt_price_limit_x64: u128,
}

/// Accounts for a donation. The exchange accounts and `input_vault` are only
/// required when `token_in` is not the donation mint; `donor_token_account`
/// is only required when `token_in` is not the native mint.
///
/// Remaining accounts: the `GrantRound` accounts listed in the donation,
/// followed by any extra tick arrays the swap crosses.
#[derive(Accounts)]
#[instruction(donation: Donation)]
pub struct SwapAndDonate<'info> {
    #[account(
      has_one = registry,
      has_one = registry_program,
      has_one = donation_mint,
      has_one = donation_vault,
    )]
    pub manager: Account<'info, GrantRoundManager>,
    #[account(
      seeds = [MANAGER_AUTHORITY_PREFIX.as_bytes(), manager.key().as_ref()],
      bump = manager.authority_bump,
    )]
    /// CHECK: pda account ["manager_authority", manager]
    pub manager_authority: AccountInfo<'info>,
    pub donation_mint: Account<'info, Mint>,
    #[account(mut)]
    pub donation_vault: Account<'info, TokenAccount>,

    #[account(
      constraint = token_in_mint.key() == donation.token_in,
    )]
    pub token_in_mint: Account<'info, Mint>,
    #[account(mut)]
    pub donor: Signer<'info>,
    #[account(mut,
      constraint = donor_token_account.owner == donor.key(),
      constraint = donor_token_account.mint == token_in_mint.key(),
    )]
    pub donor_token_account: Option<Account<'info, TokenAccount>>,
    #[account(mut,
      constraint = input_vault.owner == manager_authority.key(),
      constraint = input_vault.mint == token_in_mint.key(),
    )]
    pub input_vault: Option<Account<'info, TokenAccount>>,
    #[account(mut,
      constraint = payee_token_account.mint == donation_mint.key() @ GrantRoundManagerError::InvalidPayeeAccount,
    )]
    pub payee_token_account: Account<'info, TokenAccount>,

    /// CHECK: pinned by `manager.registry`
    pub registry: AccountInfo<'info>,
    /// CHECK: pinned by `manager.registry_program`
    pub registry_program: AccountInfo<'info>,
    /// CHECK: interpreted by the registry program
    pub grant: AccountInfo<'info>,

    /// CHECK: pinned by `manager.router`
    #[account(
      constraint = router.key() == manager.router @ GrantRoundManagerError::InvalidRouter,
    )]
    pub router: Option<UncheckedAccount<'info>>,
    pub amm_config: Option<Account<'info, AmmConfig>>,
    #[account(mut)]
    pub pool_state: Option<AccountLoader<'info, PoolState>>,
    /// CHECK: validated by the exchange program
    #[account(mut)]
    pub pool_input_vault: Option<UncheckedAccount<'info>>,
    /// CHECK: validated by the exchange program
    #[account(mut)]
    pub pool_output_vault: Option<UncheckedAccount<'info>>,
    /// CHECK: validated by the exchange program
    #[account(mut)]
    pub observation_state: Option<UncheckedAccount<'info>>,
    /// CHECK: validated by the exchange program
    #[account(mut)]
    pub tick_array: Option<UncheckedAccount<'info>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn swap_and_donate<'info>(
    ctx: Context<'_, '_, '_, 'info, SwapAndDonate<'info>>,
    donation: Donation,
) -> Result<()> {
    check_has_rounds(&donation.rounds)?;

    let grant_count =
        registry::grant_count(&ctx.accounts.registry_program, &ctx.accounts.registry)?;
    check_grant_exists(donation.grant_id, grant_count)?;

    let (round_accounts, extra_tick_arrays) =
        split_round_accounts(ctx.remaining_accounts, &donation.rounds)?;
    let rounds = round_accounts
        .iter()
        .map(load_grant_round)
        .collect::<Result<Vec<_>>>()?;
    let now = Clock::get()?.unix_timestamp;
    check_rounds(&rounds, &ctx.accounts.manager.donation_mint, now)?;

    let manager_key = ctx.accounts.manager.key();
    let bump = [ctx.accounts.manager.authority_bump];
    let seeds = GrantRoundManager::authority_seeds(&manager_key, &bump);
    let signer = &[&seeds[..]];

    // Funds are pulled before the swap and pushed only after it settles.
    let unconverted = unconverted_amount_out(&donation, &ctx.accounts.manager.donation_mint);
    let needs_swap = unconverted.is_none();
    let receiving_vault = if needs_swap {
        ctx.accounts
            .input_vault
            .as_ref()
            .ok_or(GrantRoundManagerError::MissingExchangeAccount)?
            .to_account_info()
    } else {
        ctx.accounts.donation_vault.to_account_info()
    };
    pull_funds(ctx.accounts, receiving_vault, donation.amount_in)?;

    let amount_out = if let Some(amount_out) = unconverted {
        amount_out
    } else {
        let balance_before = ctx.accounts.donation_vault.amount;
        let request = SwapRequest {
            fee: donation.fee,
            deadline: donation.deadline,
            amount_in: donation.amount_in,
            amount_out_minimum: donation.amount_out_minimum,
            sqrt_price_limit_x64: donation.sqrt_price_limit_x64,
        };
        exchange::swap_exact_input(
            exchange_accounts(ctx.accounts, &donation)?,
            &request,
            now,
            signer,
            extra_tick_arrays.to_vec(),
        )?;

        ctx.accounts.donation_vault.reload()?;
        let amount_out = exchange::realized_amount_out(
            balance_before,
            ctx.accounts.donation_vault.amount,
            donation.amount_out_minimum,
        )?;
        msg!("Swapped {} of {} into {}", donation.amount_in, donation.token_in, amount_out);
        amount_out
    };

    let payee = registry::get_grant_payee(
        &ctx.accounts.registry_program,
        &ctx.accounts.registry,
        &ctx.accounts.grant,
        donation.grant_id,
    )?;
    check_payee_account(&ctx.accounts.payee_token_account.owner, &payee)?;

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.donation_vault.to_account_info(),
                to: ctx.accounts.payee_token_account.to_account_info(),
                authority: ctx.accounts.manager_authority.to_account_info(),
            },
            signer,
        ),
        amount_out,
    )?;

    msg!(
        "Donated {} to grant {} across {} round(s)",
        amount_out,
        donation.grant_id,
        donation.rounds.len()
    );
    emit!(GrantDonation {
        grant_id: donation.grant_id,
        token_in: donation.token_in,
        amount_in: donation.amount_in,
        amount_out,
        rounds: donation.rounds,
    });

    Ok(())
}

/// A donation already in the donation mint is paid out as is.
pub fn unconverted_amount_out(donation: &Donation, donation_mint: &Pubkey) -> Option<u64> {
    (donation.token_in == *donation_mint).then_some(donation.amount_in)
}

/// Splits the remaining accounts into the requested round accounts and
/// whatever follows them.
pub fn split_round_accounts<'a, T: Key>(
    remaining_accounts: &'a [T],
    rounds: &[Pubkey],
) -> Result<(&'a [T], &'a [T])> {
    require!(
        remaining_accounts.len() >= rounds.len(),
        GrantRoundManagerError::GrantRoundAccountMismatch
    );
    let (round_accounts, rest) = remaining_accounts.split_at(rounds.len());
    require!(
        round_accounts
            .iter()
            .zip(rounds)
            .all(|(account, round)| account.key() == *round),
        GrantRoundManagerError::GrantRoundAccountMismatch
    );
    Ok((round_accounts, rest))
}

fn load_grant_round(info: &AccountInfo) -> Result<GrantRound> {
    require!(info.owner == &crate::ID, GrantRoundManagerError::InvalidGrantRound);
    let data = info.try_borrow_data()?;
    GrantRound::try_deserialize(&mut &data[..])
        .map_err(|_| error!(GrantRoundManagerError::InvalidGrantRound))
}

fn pull_funds<'info>(
    accounts: &SwapAndDonate<'info>,
    receiving_vault: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if accounts.token_in_mint.key() == native_mint::ID {
        system_program::transfer(
            CpiContext::new(
                accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: accounts.donor.to_account_info(),
                    to: receiving_vault.clone(),
                },
            ),
            amount,
        )?;
        return token::sync_native(CpiContext::new(
            accounts.token_program.to_account_info(),
            SyncNative {
                account: receiving_vault,
            },
        ));
    }

    let donor_token_account = accounts
        .donor_token_account
        .as_ref()
        .ok_or(GrantRoundManagerError::MissingDonorTokenAccount)?;
    token::transfer(
        CpiContext::new(
            accounts.token_program.to_account_info(),
            Transfer {
                from: donor_token_account.to_account_info(),
                to: receiving_vault,
                authority: accounts.donor.to_account_info(),
            },
        ),
        amount,
    )
}

fn exchange_accounts<'info>(
    accounts: &SwapAndDonate<'info>,
    donation: &Donation,
) -> Result<ExchangeAccounts<'info>> {
    let missing = || error!(GrantRoundManagerError::MissingExchangeAccount);

    let router = accounts.router.as_ref().ok_or_else(missing)?;
    let amm_config = accounts.amm_config.as_ref().ok_or_else(missing)?;
    let pool_state = accounts.pool_state.as_ref().ok_or_else(missing)?;
    let input_vault = accounts.input_vault.as_ref().ok_or_else(missing)?;
    let pool_input_vault = accounts.pool_input_vault.as_ref().ok_or_else(missing)?;
    let pool_output_vault = accounts.pool_output_vault.as_ref().ok_or_else(missing)?;
    let observation_state = accounts.observation_state.as_ref().ok_or_else(missing)?;
    let tick_array = accounts.tick_array.as_ref().ok_or_else(missing)?;

    exchange::check_fee_tier(amm_config.index, donation.fee)?;
    let (pool_amm_config, token_mint_0, token_mint_1) = {
        let pool = pool_state.load()?;
        (pool.amm_config, pool.token_mint_0, pool.token_mint_1)
    };
    require!(
        pool_amm_config == amm_config.key(),
        GrantRoundManagerError::FeeTierMismatch
    );
    exchange::check_pool_pair(
        &token_mint_0,
        &token_mint_1,
        &donation.token_in,
        &accounts.manager.donation_mint,
    )?;

    Ok(ExchangeAccounts {
        router: router.to_account_info(),
        authority: accounts.manager_authority.to_account_info(),
        amm_config: amm_config.to_account_info(),
        pool_state: pool_state.to_account_info(),
        input_token_account: input_vault.to_account_info(),
        output_token_account: accounts.donation_vault.to_account_info(),
        input_vault: pool_input_vault.to_account_info(),
        output_vault: pool_output_vault.to_account_info(),
        observation_state: observation_state.to_account_info(),
        token_program: accounts.token_program.to_account_info(),
        tick_array: tick_array.to_account_info(),
    })
}
