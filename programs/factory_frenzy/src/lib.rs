use anchor_lang::prelude::*;

pub mod errors;
pub mod state;
pub mod utils;
pub mod instructions;

use instructions::*;
use state::{Coordinate, JobSpot, JobSpotState};

declare_id!("6rfWMgsLNv8TtzjXzTCj7MYGhw3En4wKBu399EJZPLpa");

#[program]
pub mod factory_frenzy {
    use super::*;

    pub fn create_factory(
        ctx: Context<CreateFactory>,
        max_jobs_per_spot: u8,
        reward_per_job: u64,
        uri_base: String,
    ) -> Result<()> {
        instructions::create_factory::handler(ctx, max_jobs_per_spot, reward_per_job, uri_base)
    }

    pub fn initialize(ctx: Context<Initialize>, grid_size: u8) -> Result<()> {
        instructions::initialize::handler(ctx, grid_size)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        reward_per_job: Option<u64>,
        max_jobs_per_spot: Option<u8>,
        uri_base: Option<String>,
        collection: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, reward_per_job, max_jobs_per_spot, uri_base, collection)
    }

    pub fn fund_reward_pool(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
        instructions::fund_reward_pool::handler(ctx, amount)
    }

    pub fn collect_all_jobs<'info>(
        ctx: Context<'_, '_, 'info, 'info, CollectAllJobs<'info>>,
        coordinate: Coordinate,
        correlation_token: Option<String>,
    ) -> Result<()> {
        instructions::collect_all_jobs::handler(ctx, coordinate, correlation_token)
    }

    pub fn collect_job(
        ctx: Context<CollectJob>,
        coordinate: Coordinate,
        correlation_token: Option<String>,
    ) -> Result<()> {
        instructions::collect_job::handler(ctx, coordinate, correlation_token)
    }

    pub fn available_jobs(ctx: Context<ReadGrid>, coordinate: Coordinate) -> Result<u32> {
        instructions::views::available_jobs_handler(ctx, coordinate)
    }

    pub fn job_reward(ctx: Context<ReadGrid>, coordinate: Coordinate) -> Result<u64> {
        instructions::views::job_reward_handler(ctx, coordinate)
    }

    pub fn job_spot(ctx: Context<ReadGrid>, coordinate: Coordinate) -> Result<JobSpot> {
        instructions::views::job_spot_handler(ctx, coordinate)
    }

    pub fn job_spot_state(ctx: Context<ReadGrid>, coordinate: Coordinate) -> Result<JobSpotState> {
        instructions::views::job_spot_state_handler(ctx, coordinate)
    }

    pub fn administrator(ctx: Context<ReadGrid>) -> Result<Pubkey> {
        instructions::views::administrator_handler(ctx)
    }

    pub fn total_jobs_issued(ctx: Context<ReadGrid>) -> Result<u64> {
        instructions::views::total_jobs_issued_handler(ctx)
    }

    pub fn total_available_jobs(ctx: Context<ReadGrid>) -> Result<u64> {
        instructions::views::total_available_jobs_handler(ctx)
    }

    pub fn asset_balance_of(ctx: Context<ReadCollector>, identity: Pubkey) -> Result<u32> {
        instructions::views::asset_balance_of_handler(ctx, identity)
    }

    pub fn value_balance_of(ctx: Context<ReadRewardBalance>, identity: Pubkey) -> Result<u64> {
        instructions::views::value_balance_of_handler(ctx, identity)
    }
}
