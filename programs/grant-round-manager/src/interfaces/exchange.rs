use anchor_lang::prelude::*;
use raydium_amm_v3::cpi;

use crate::errors::GrantRoundManagerError;

/// Parameters of a single-hop, exact-input conversion into the donation mint.
#[derive(Debug, Clone, Copy)]
pub struct SwapRequest {
    /// `index` of the pool's `AmmConfig`.
    pub fee: u16,
    pub deadline: i64,
    pub amount_in: u64,
    pub amount_out_minimum: u64,
    pub sqrt_price_limit_x64: u128,
}

/// Accounts of the CLMM `swap` instruction. `authority` owns
/// `input_token_account` and signs through the manager PDA seeds.
pub struct ExchangeAccounts<'info> {
    pub router: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub amm_config: AccountInfo<'info>,
    pub pool_state: AccountInfo<'info>,
    pub input_token_account: AccountInfo<'info>,
    pub output_token_account: AccountInfo<'info>,
    pub input_vault: AccountInfo<'info>,
    pub output_vault: AccountInfo<'info>,
    pub observation_state: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub tick_array: AccountInfo<'info>,
}

pub fn check_deadline(now: i64, deadline: i64) -> Result<()> {
    require!(now <= deadline, GrantRoundManagerError::DeadlineExceeded);
    Ok(())
}

pub fn check_fee_tier(amm_config_index: u16, fee: u16) -> Result<()> {
    require!(amm_config_index == fee, GrantRoundManagerError::FeeTierMismatch);
    Ok(())
}

/// The pool must trade exactly `token_in` against `token_out`, in either order.
pub fn check_pool_pair(
    token_mint_0: &Pubkey,
    token_mint_1: &Pubkey,
    token_in: &Pubkey,
    token_out: &Pubkey,
) -> Result<()> {
    require!(
        (token_mint_0 == token_in && token_mint_1 == token_out)
            || (token_mint_1 == token_in && token_mint_0 == token_out),
        GrantRoundManagerError::PoolMismatch
    );
    Ok(())
}

/// Output of a swap as observed on the receiving vault.
pub fn realized_amount_out(balance_before: u64, balance_after: u64, minimum: u64) -> Result<u64> {
    let amount_out = balance_after
        .checked_sub(balance_before)
        .ok_or(GrantRoundManagerError::MathOverflow)?;
    require!(
        amount_out >= minimum,
        GrantRoundManagerError::InsufficientOutputAmount
    );
    Ok(amount_out)
}

/// Swaps `amount_in` of the input vault's mint into the output token account.
/// The pool enforces `amount_out_minimum` and the price limit; the deadline is
/// enforced here because the pool has no notion of it.
pub fn swap_exact_input<'info>(
    accounts: ExchangeAccounts<'info>,
    request: &SwapRequest,
    now: i64,
    signer_seeds: &[&[&[u8]]],
    extra_tick_arrays: Vec<AccountInfo<'info>>,
) -> Result<()> {
    check_deadline(now, request.deadline)?;

    let cpi_accounts = cpi::accounts::SwapSingle {
        payer: accounts.authority,
        amm_config: accounts.amm_config,
        pool_state: accounts.pool_state,
        input_token_account: accounts.input_token_account,
        output_token_account: accounts.output_token_account,
        input_vault: accounts.input_vault,
        output_vault: accounts.output_vault,
        observation_state: accounts.observation_state,
        token_program: accounts.token_program,
        tick_array: accounts.tick_array,
    };
    let cpi_ctx = CpiContext::new_with_signer(accounts.router, cpi_accounts, signer_seeds)
        .with_remaining_accounts(extra_tick_arrays);

    cpi::swap(
        cpi_ctx,
        request.amount_in,
        request.amount_out_minimum,
        request.sqrt_price_limit_x64,
        true,
    )
}
