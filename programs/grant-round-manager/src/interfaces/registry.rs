//! Client side of the grant registry interface.
//!
//! The registry is an external program. It answers two queries through
//! return data, each addressed with an Anchor-style instruction discriminator:
//!
//! - `grant_count` with accounts `[registry]`, returns `u64`
//! - `get_grant_payee(grant_id: u64)` with accounts `[registry, grant]`, returns `Pubkey`

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    program::{get_return_data, invoke},
};

use crate::errors::GrantRoundManagerError;

const DISCRIMINATOR_NAMESPACE: &str = "global";

pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    let preimage = format!("{DISCRIMINATOR_NAMESPACE}:{name}");
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

pub fn grant_count_ix(registry_program: Pubkey, registry: Pubkey) -> Instruction {
    Instruction {
        program_id: registry_program,
        accounts: vec![AccountMeta::new_readonly(registry, false)],
        data: instruction_discriminator("grant_count").to_vec(),
    }
}

pub fn get_grant_payee_ix(
    registry_program: Pubkey,
    registry: Pubkey,
    grant: Pubkey,
    grant_id: u64,
) -> Instruction {
    let mut data = instruction_discriminator("get_grant_payee").to_vec();
    data.extend_from_slice(&grant_id.to_le_bytes());

    Instruction {
        program_id: registry_program,
        accounts: vec![
            AccountMeta::new_readonly(registry, false),
            AccountMeta::new_readonly(grant, false),
        ],
        data,
    }
}

/// Rejects an account that can't be a live registry: the registry state must
/// be owned by the registry program, and that program must be deployed.
pub fn check_registry(registry: &AccountInfo, registry_program: &AccountInfo) -> Result<()> {
    require!(
        registry_program.executable && registry.owner == registry_program.key,
        GrantRoundManagerError::InvalidRegistry
    );
    Ok(())
}

pub fn grant_count<'info>(
    registry_program: &AccountInfo<'info>,
    registry: &AccountInfo<'info>,
) -> Result<u64> {
    invoke(
        &grant_count_ix(registry_program.key(), registry.key()),
        &[registry.clone(), registry_program.clone()],
    )?;

    decode_return_data(registry_program.key, get_return_data())
}

pub fn get_grant_payee<'info>(
    registry_program: &AccountInfo<'info>,
    registry: &AccountInfo<'info>,
    grant: &AccountInfo<'info>,
    grant_id: u64,
) -> Result<Pubkey> {
    invoke(
        &get_grant_payee_ix(registry_program.key(), registry.key(), grant.key(), grant_id),
        &[registry.clone(), grant.clone(), registry_program.clone()],
    )?;

    decode_return_data(registry_program.key, get_return_data())
}

/// Return data left behind by any other program, or data that doesn't decode
/// into the expected type, is not an answer from the registry.
pub fn decode_return_data<T: AnchorDeserialize>(
    registry_program: &Pubkey,
    return_data: Option<(Pubkey, Vec<u8>)>,
) -> Result<T> {
    let (program_id, data) =
        return_data.ok_or(GrantRoundManagerError::InvalidRegistryResponse)?;
    require!(
        program_id == *registry_program,
        GrantRoundManagerError::InvalidRegistryResponse
    );

    T::try_from_slice(&data).map_err(|_| GrantRoundManagerError::InvalidRegistryResponse.into())
}
