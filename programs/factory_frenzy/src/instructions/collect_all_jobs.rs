use anchor_lang::prelude::*;
use mpl_core::instructions::CreateV2CpiBuilder;
use crate::state::{CollectorRecord, Coordinate, GridConfig, JobGrid, JOB_ASSET_SEED};
use crate::errors::FactoryError;
use crate::utils::{ensure_asset_count, validate_job_assets};

// Metaplex Core program ID
pub const MPL_CORE_ID: Pubkey = pubkey!("CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d");

/// Remaining accounts: one writable job asset PDA per job being collected,
/// `["job_asset", row, col, ordinal]` for ordinals jobs_collected..jobs_issued.
#[derive(Accounts)]
pub struct CollectAllJobs<'info> {
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

    /// Core collection - must match grid_config.collection
    /// CHECK: Validated by constraint and Metaplex Core program
    #[account(
        mut,
        constraint = collection.key() == grid_config.collection @ FactoryError::InvalidCollection
    )]
    pub collection: UncheckedAccount<'info>,

    /// CHECK: Metaplex Core program
    #[account(address = MPL_CORE_ID)]
    pub mpl_core_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, CollectAllJobs<'info>>,
    coordinate: Coordinate,
    correlation_token: Option<String>,
) -> Result<()> {
    require!(
        ctx.accounts.grid_config.collection != Pubkey::default(),
        FactoryError::CollectionNotSet
    );

    let collector = ctx.accounts.collector.key();
    let (jobs, first_ordinal) = {
        let spot = ctx.accounts.job_grid.spot(coordinate)?;
        (spot.collectable_jobs()?, spot.jobs_collected)
    };

    let asset_accounts = ctx.remaining_accounts;
    ensure_asset_count(asset_accounts.len(), jobs)?;
    let job_seeds = validate_job_assets(asset_accounts, coordinate, first_ordinal, ctx.program_id)?;

    // Book the collection; any failing mint below reverts it with the transaction
    let collected = ctx
        .accounts
        .job_grid
        .spot_mut(coordinate)?
        .collect_all(collector)?;

    let record = &mut ctx.accounts.collector_record;
    record.open(collector, ctx.bumps.collector_record);
    record.record_jobs(collected)?;

    let grid_config = &mut ctx.accounts.grid_config;
    grid_config.total_jobs_collected = grid_config
        .total_jobs_collected
        .checked_add(collected)
        .ok_or(FactoryError::Overflow)?;

    let uri_base = grid_config.uri_base.clone();
    let config_bump = grid_config.bump;
    let label = coordinate.label();

    let mpl_core_program = ctx.accounts.mpl_core_program.to_account_info();
    let collection = ctx.accounts.collection.to_account_info();
    let grid_config_info = ctx.accounts.grid_config.to_account_info();
    let collector_info = ctx.accounts.collector.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    for (asset, (ordinal, asset_bump)) in asset_accounts.iter().zip(job_seeds) {
        // GridConfig signs as collection authority, the asset PDA signs its own creation
        let config_seeds: &[&[u8]] = &[GridConfig::SEED, &[config_bump]];
        let asset_seeds: &[&[u8]] = &[
            JOB_ASSET_SEED,
            &[coordinate.row],
            &[coordinate.col],
            &[ordinal],
            &[asset_bump],
        ];
        let signer_seeds: &[&[&[u8]]] = &[config_seeds, asset_seeds];

        CreateV2CpiBuilder::new(&mpl_core_program)
            .asset(asset)
            .collection(Some(&collection))
            .authority(Some(&grid_config_info))
            .payer(&collector_info)
            .owner(Some(&collector_info))
            .system_program(&system_program)
            .name(format!("Job {} #{}", label, ordinal as u16 + 1))
            .uri(format!("{}{}-{}", uri_base, label, ordinal))
            .invoke_signed(signer_seeds)?;
    }

    if let Some(token) = correlation_token.as_deref() {
        msg!("Correlation token: {}", token);
    }
    msg!("Collected {} jobs at {} for {}", collected, label, collector);

    Ok(())
}
