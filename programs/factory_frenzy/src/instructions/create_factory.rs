use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::errors::FactoryError;
use crate::state::{
    GridConfig, JobGrid, MAX_JOBS_PER_SPOT, MAX_URI_BASE_LEN, REWARD_POOL_SEED,
};

#[derive(Accounts)]
pub struct CreateFactory<'info> {
    /// Becomes the permanent administrator
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Reward token mint - supports both Token and Token-2022
    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = 8 + GridConfig::INIT_SPACE,
        seeds = [GridConfig::SEED],
        bump
    )]
    pub grid_config: Account<'info, GridConfig>,

    /// Empty until initialize populates it
    #[account(
        init,
        payer = authority,
        space = 8 + JobGrid::INIT_SPACE,
        seeds = [JobGrid::SEED],
        bump
    )]
    pub job_grid: Account<'info, JobGrid>,

    /// Reward pool - holds tokens paid out by collect_job
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_POOL_SEED, grid_config.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = grid_config,
        token::token_program = token_program,
    )]
    pub reward_pool: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateFactory>,
    max_jobs_per_spot: u8,
    reward_per_job: u64,
    uri_base: String,
) -> Result<()> {
    require!(
        max_jobs_per_spot > 0 && max_jobs_per_spot <= MAX_JOBS_PER_SPOT,
        FactoryError::InvalidJobCap
    );
    require!(uri_base.len() <= MAX_URI_BASE_LEN, FactoryError::UriTooLong);

    let config = &mut ctx.accounts.grid_config;

    config.authority = ctx.accounts.authority.key();
    config.reward_mint = ctx.accounts.reward_mint.key();
    config.reward_pool = ctx.accounts.reward_pool.key();
    config.collection = Pubkey::default(); // Set later via update_config
    config.uri_base = uri_base;
    config.max_jobs_per_spot = max_jobs_per_spot;
    config.reward_per_job = reward_per_job;
    config.total_jobs_issued = 0;
    config.total_jobs_collected = 0;
    config.total_rewards_paid = 0;
    config.bump = ctx.bumps.grid_config;
    config._padding = [0u8; 68];

    let job_grid = &mut ctx.accounts.job_grid;
    job_grid.grid_size = 0;
    job_grid.bump = ctx.bumps.job_grid;
    job_grid.spots = Vec::new();

    msg!(
        "Factory created by {} with up to {} jobs per spot, {} reward per job",
        config.authority,
        max_jobs_per_spot,
        reward_per_job
    );
    Ok(())
}
