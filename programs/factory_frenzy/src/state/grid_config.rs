use anchor_lang::prelude::*;

pub const REWARD_POOL_SEED: &[u8] = b"reward_pool";
pub const JOB_ASSET_SEED: &[u8] = b"job_asset";

pub const MAX_JOBS_PER_SPOT: u8 = 10;
pub const MAX_URI_BASE_LEN: usize = 128;

#[account]
#[derive(InitSpace)]
pub struct GridConfig {
    /// Administrator, fixed at factory creation
    pub authority: Pubkey,
    pub reward_mint: Pubkey,
    /// Token account holding the rewards paid out by collect_job
    pub reward_pool: Pubkey,
    pub collection: Pubkey, // Metaplex Core collection for job assets
    #[max_len(128)]
    pub uri_base: String,
    /// Upper bound for jobs the oracle places on a single spot
    pub max_jobs_per_spot: u8,
    /// Reward tokens attached per issued job
    pub reward_per_job: u64,
    /// Sum of jobs_issued over the grid, fixed by initialize
    pub total_jobs_issued: u32,
    pub total_jobs_collected: u32,
    pub total_rewards_paid: u64,
    pub bump: u8,
    pub _padding: [u8; 68],
}

impl GridConfig {
    pub const SEED: &'static [u8] = b"grid_config";

    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authority == *key
    }
}
