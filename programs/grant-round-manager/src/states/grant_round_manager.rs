use anchor_lang::prelude::*;
use std::mem;

use super::DISCRIMINATOR_LEN;

pub const MANAGER_AUTHORITY_PREFIX: &str = "manager_authority";

/// Configuration of a manager deployment. Written once by
/// `initialize_manager` and never mutated afterwards.
#[account]
#[derive(Default)]
pub struct GrantRoundManager {
    /// Registry state account that holds the grants.
    pub registry: Pubkey,
    /// Program owning `registry`, target of the registry CPIs.
    pub registry_program: Pubkey,
    /// Exchange program used to convert donations.
    pub router: Pubkey,
    pub donation_mint: Pubkey,
    /// Token account of `donation_mint` owned by the manager authority PDA.
    pub donation_vault: Pubkey,
    pub authority_bump: u8,
}

impl GrantRoundManager {
    const REGISTRY_LEN: usize = mem::size_of::<Pubkey>();
    const REGISTRY_PROGRAM_LEN: usize = mem::size_of::<Pubkey>();
    const ROUTER_LEN: usize = mem::size_of::<Pubkey>();
    const DONATION_MINT_LEN: usize = mem::size_of::<Pubkey>();
    const DONATION_VAULT_LEN: usize = mem::size_of::<Pubkey>();
    const AUTHORITY_BUMP_LEN: usize = mem::size_of::<u8>();

    pub const LEN: usize = DISCRIMINATOR_LEN
        + GrantRoundManager::REGISTRY_LEN
        + GrantRoundManager::REGISTRY_PROGRAM_LEN
        + GrantRoundManager::ROUTER_LEN
        + GrantRoundManager::DONATION_MINT_LEN
        + GrantRoundManager::DONATION_VAULT_LEN
        + GrantRoundManager::AUTHORITY_BUMP_LEN;

    pub fn authority_seeds<'a>(manager: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
        [MANAGER_AUTHORITY_PREFIX.as_bytes(), manager.as_ref(), bump]
    }
}
