use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint as InterfaceMint, TokenAccount as InterfaceTokenAccount,
    TokenInterface, TransferChecked,
};
use crate::state::{CollectorRecord, Coordinate, GridConfig, JobGrid, REWARD_POOL_SEED};
use crate::errors::FactoryError;
use crate::utils::ensure_pool_covers;

#[derive(Accounts)]
pub struct CollectJob<'info> {
    #[account(mut)]
    pub collector: Signer<'info>,

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

    #[account(
        init_if_needed,
        payer = collector,
        space = 8 + CollectorRecord::INIT_SPACE,
        seeds = [CollectorRecord::SEED, collector.key().as_ref()],
        bump
    )]
    pub collector_record: Account<'info, CollectorRecord>,

    /// Reward pool holding the tokens
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, grid_config.key().as_ref()],
        bump,
        constraint = reward_pool.key() == grid_config.reward_pool @ FactoryError::InvalidRewardPool
    )]
    pub reward_pool: InterfaceAccount<'info, InterfaceTokenAccount>,

    /// Collector's reward ATA; must already exist
    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = collector,
        associated_token::token_program = token_program,
    )]
    pub collector_token_account: InterfaceAccount<'info, InterfaceTokenAccount>,

    #[account(
        constraint = reward_mint.key() == grid_config.reward_mint @ FactoryError::InvalidRewardMint
    )]
    pub reward_mint: InterfaceAccount<'info, InterfaceMint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CollectJob>,
    coordinate: Coordinate,
    correlation_token: Option<String>,
) -> Result<()> {
    let collector = ctx.accounts.collector.key();
    let reward = ctx.accounts.job_grid.spot(coordinate)?.collectable_reward()?;

    ensure_pool_covers(ctx.accounts.reward_pool.amount, reward)?;

    let paid = ctx
        .accounts
        .job_grid
        .spot_mut(coordinate)?
        .collect_reward(collector)?;

    let record = &mut ctx.accounts.collector_record;
    record.open(collector, ctx.bumps.collector_record);
    record.record_reward(paid)?;

    let grid_config = &mut ctx.accounts.grid_config;
    grid_config.total_rewards_paid = grid_config
        .total_rewards_paid
        .checked_add(paid)
        .ok_or(FactoryError::Overflow)?;

    // Transfer from pool to collector (signed by GridConfig PDA)
    let bump = grid_config.bump;
    let seeds: &[&[u8]] = &[GridConfig::SEED, &[bump]];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.reward_pool.to_account_info(),
                mint: ctx.accounts.reward_mint.to_account_info(),
                to: ctx.accounts.collector_token_account.to_account_info(),
                authority: ctx.accounts.grid_config.to_account_info(),
            },
            signer_seeds,
        ),
        paid,
        ctx.accounts.reward_mint.decimals,
    )?;

    if let Some(token) = correlation_token.as_deref() {
        msg!("Correlation token: {}", token);
    }
    msg!("Collected reward of {} tokens at {} for {}", paid, coordinate, collector);

    Ok(())
}
