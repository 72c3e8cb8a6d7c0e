use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount as InterfaceTokenAccount;
use crate::errors::FactoryError;
use crate::state::{CollectorRecord, Coordinate, GridConfig, JobGrid, JobSpot, JobSpotState};

/// Read-only access for the view instructions; values come back as return data
#[derive(Accounts)]
pub struct ReadGrid<'info> {
    #[account(
        seeds = [GridConfig::SEED],
        bump = grid_config.bump
    )]
    pub grid_config: Account<'info, GridConfig>,

    #[account(
        seeds = [JobGrid::SEED],
        bump = job_grid.bump
    )]
    pub job_grid: Account<'info, JobGrid>,
}

#[derive(Accounts)]
#[instruction(identity: Pubkey)]
pub struct ReadCollector<'info> {
    /// CHECK: may not exist yet; read through `CollectorRecord::jobs_held`
    #[account(
        seeds = [CollectorRecord::SEED, identity.as_ref()],
        bump
    )]
    pub collector_record: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(identity: Pubkey)]
pub struct ReadRewardBalance<'info> {
    #[account(
        seeds = [GridConfig::SEED],
        bump = grid_config.bump
    )]
    pub grid_config: Account<'info, GridConfig>,

    #[account(
        constraint = token_account.owner == identity @ FactoryError::Unauthorized,
        constraint = token_account.mint == grid_config.reward_mint @ FactoryError::InvalidRewardMint
    )]
    pub token_account: InterfaceAccount<'info, InterfaceTokenAccount>,
}

pub fn available_jobs_handler(ctx: Context<ReadGrid>, coordinate: Coordinate) -> Result<u32> {
    Ok(ctx.accounts.job_grid.spot(coordinate)?.available_jobs())
}

pub fn job_reward_handler(ctx: Context<ReadGrid>, coordinate: Coordinate) -> Result<u64> {
    Ok(ctx.accounts.job_grid.spot(coordinate)?.job_reward())
}

pub fn job_spot_handler(ctx: Context<ReadGrid>, coordinate: Coordinate) -> Result<JobSpot> {
    Ok(*ctx.accounts.job_grid.spot(coordinate)?)
}

pub fn job_spot_state_handler(ctx: Context<ReadGrid>, coordinate: Coordinate) -> Result<JobSpotState> {
    Ok(ctx.accounts.job_grid.spot_state(coordinate))
}

pub fn administrator_handler(ctx: Context<ReadGrid>) -> Result<Pubkey> {
    Ok(ctx.accounts.grid_config.authority)
}

pub fn total_jobs_issued_handler(ctx: Context<ReadGrid>) -> Result<u64> {
    Ok(ctx.accounts.job_grid.total_jobs_issued())
}

pub fn total_available_jobs_handler(ctx: Context<ReadGrid>) -> Result<u64> {
    Ok(ctx.accounts.job_grid.total_available_jobs())
}

pub fn asset_balance_of_handler(ctx: Context<ReadCollector>, _identity: Pubkey) -> Result<u32> {
    CollectorRecord::jobs_held(&ctx.accounts.collector_record.to_account_info(), ctx.program_id)
}

pub fn value_balance_of_handler(ctx: Context<ReadRewardBalance>, _identity: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.token_account.amount)
}
