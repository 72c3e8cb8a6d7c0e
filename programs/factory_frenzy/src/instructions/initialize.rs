use anchor_lang::prelude::*;
use crate::errors::FactoryError;
use crate::state::{GridConfig, JobGrid};
use crate::utils::derive_job_allocation;

#[derive(Accounts)]
pub struct Initialize<'info> {
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

    #[account(
        mut,
        seeds = [JobGrid::SEED],
        bump = job_grid.bump
    )]
    pub job_grid: Account<'info, JobGrid>,
}

pub fn handler(ctx: Context<Initialize>, grid_size: u8) -> Result<()> {
    // The config address seeds the oracle; it is fixed for the program
    let seed = ctx.accounts.grid_config.key().to_bytes();
    let max_jobs_per_spot = ctx.accounts.grid_config.max_jobs_per_spot;
    let reward_per_job = ctx.accounts.grid_config.reward_per_job;

    let total_jobs_issued = ctx.accounts.job_grid.populate(grid_size, |coordinate| {
        derive_job_allocation(&seed, coordinate, max_jobs_per_spot, reward_per_job)
    })?;

    ctx.accounts.grid_config.total_jobs_issued = total_jobs_issued;

    msg!(
        "Job grid initialized: {}x{} spots, {} jobs issued",
        grid_size,
        grid_size,
        total_jobs_issued
    );
    Ok(())
}
