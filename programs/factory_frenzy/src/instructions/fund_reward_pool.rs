use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::FactoryError;
use crate::state::{GridConfig, REWARD_POOL_SEED};

#[derive(Accounts)]
pub struct FundRewardPool<'info> {
    pub funder: Signer<'info>,

    #[account(
        seeds = [GridConfig::SEED],
        bump = grid_config.bump
    )]
    pub grid_config: Account<'info, GridConfig>,

    #[account(
        constraint = reward_mint.key() == grid_config.reward_mint @ FactoryError::InvalidRewardMint
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, grid_config.key().as_ref()],
        bump,
        constraint = reward_pool.key() == grid_config.reward_pool @ FactoryError::InvalidRewardPool
    )]
    pub reward_pool: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = funder,
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
    require!(amount > 0, FactoryError::InvalidAmount);
    require!(
        ctx.accounts.funder_token_account.amount >= amount,
        FactoryError::InsufficientSupply
    );

    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.funder_token_account.to_account_info(),
                mint: ctx.accounts.reward_mint.to_account_info(),
                to: ctx.accounts.reward_pool.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.reward_mint.decimals,
    )?;

    msg!(
        "Funded reward pool with {} tokens from {}",
        amount,
        ctx.accounts.funder.key()
    );
    Ok(())
}
