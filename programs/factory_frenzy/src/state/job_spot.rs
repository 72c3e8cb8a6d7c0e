use anchor_lang::prelude::*;

use crate::errors::FactoryError;

/// What the reward oracle hands out for one coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobAllocation {
    pub jobs_issued: u32,
    pub reward: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobSpotState {
    Uninitialized,
    Active,
    Depleted,
}

/// Issuance and collection record for a single grid coordinate
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct JobSpot {
    /// Job assets made available at initialization
    pub jobs_issued: u32,
    /// Job assets handed out so far, never above jobs_issued
    pub jobs_collected: u32,
    /// Reward tokens attached to the spot (base units)
    pub reward: u64,
    pub reward_claimed: bool,
    /// First successful collector, fixed once set
    pub collector: Option<Pubkey>,
}

impl JobSpot {
    pub fn new(allocation: JobAllocation) -> Self {
        Self {
            jobs_issued: allocation.jobs_issued,
            jobs_collected: 0,
            reward: allocation.reward,
            reward_claimed: false,
            collector: None,
        }
    }

    pub fn available_jobs(&self) -> u32 {
        self.jobs_issued.saturating_sub(self.jobs_collected)
    }

    /// Reward still payable, zero once claimed
    pub fn job_reward(&self) -> u64 {
        if self.reward_claimed {
            0
        } else {
            self.reward
        }
    }

    pub fn state(&self) -> JobSpotState {
        if self.collector.is_some() || (self.available_jobs() == 0 && self.job_reward() == 0) {
            JobSpotState::Depleted
        } else {
            JobSpotState::Active
        }
    }

    /// Number of job assets a bulk collection would issue right now
    pub fn collectable_jobs(&self) -> Result<u32> {
        require!(self.collector.is_none(), FactoryError::AlreadyCollected);
        let available = self.available_jobs();
        require!(available > 0, FactoryError::AlreadyCollected);
        Ok(available)
    }

    /// Reward a single-reward collection would pay right now
    pub fn collectable_reward(&self) -> Result<u64> {
        require!(self.collector.is_none(), FactoryError::AlreadyCollected);
        let reward = self.job_reward();
        require!(reward > 0, FactoryError::AlreadyCollected);
        Ok(reward)
    }

    /// Marks every remaining job collected by `collector` and returns how
    /// many were issued. Leaves the record untouched on error.
    pub fn collect_all(&mut self, collector: Pubkey) -> Result<u32> {
        let jobs = self.collectable_jobs()?;
        self.jobs_collected = self.jobs_issued;
        self.collector = Some(collector);
        Ok(jobs)
    }

    /// Marks the reward paid to `collector` and returns the amount.
    /// Leaves the record untouched on error.
    pub fn collect_reward(&mut self, collector: Pubkey) -> Result<u64> {
        let reward = self.collectable_reward()?;
        self.reward_claimed = true;
        self.collector = Some(collector);
        Ok(reward)
    }
}
