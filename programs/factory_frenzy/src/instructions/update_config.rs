use anchor_lang::prelude::*;
use crate::state::{GridConfig, MAX_JOBS_PER_SPOT, MAX_URI_BASE_LEN};
use crate::errors::FactoryError;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        constraint = grid_config.is_authority(&authority.key()) @ FactoryError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GridConfig::SEED],
        bump = grid_config.bump
    )]
    pub grid_config: Account<'info, GridConfig>,
}

/// Oracle parameters only matter until the grid is initialized; spots
/// already written keep their allocation.
pub fn handler(
    ctx: Context<UpdateConfig>,
    reward_per_job: Option<u64>,
    max_jobs_per_spot: Option<u8>,
    uri_base: Option<String>,
    collection: Option<Pubkey>,
) -> Result<()> {
    let config = &mut ctx.accounts.grid_config;

    if let Some(reward) = reward_per_job {
        config.reward_per_job = reward;
        msg!("Updated reward_per_job to {}", reward);
    }

    if let Some(max_jobs) = max_jobs_per_spot {
        require!(
            max_jobs > 0 && max_jobs <= MAX_JOBS_PER_SPOT,
            FactoryError::InvalidJobCap
        );
        config.max_jobs_per_spot = max_jobs;
        msg!("Updated max_jobs_per_spot to {}", max_jobs);
    }

    if let Some(uri) = uri_base {
        require!(uri.len() <= MAX_URI_BASE_LEN, FactoryError::UriTooLong);
        config.uri_base = uri;
        msg!("Updated uri_base");
    }

    if let Some(coll) = collection {
        config.collection = coll;
        msg!("Updated collection to {}", coll);
    }

    Ok(())
}
