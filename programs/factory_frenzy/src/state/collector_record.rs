use anchor_lang::prelude::*;

use crate::errors::FactoryError;

/// What the factory has handed to one identity across all spots.
/// PDA seeds: ["collector", identity]
#[account]
#[derive(InitSpace)]
pub struct CollectorRecord {
    pub collector: Pubkey,
    /// Job assets minted to this identity
    pub jobs_collected: u32,
    /// Reward tokens paid to this identity (base units)
    pub rewards_collected: u64,
    pub spots_collected: u32,
    pub bump: u8,
}

impl CollectorRecord {
    pub const SEED: &'static [u8] = b"collector";

    /// First-use setup for an `init_if_needed` record; no-op afterwards
    pub fn open(&mut self, collector: Pubkey, bump: u8) {
        if self.collector == Pubkey::default() {
            self.collector = collector;
            self.bump = bump;
        }
    }

    pub fn record_jobs(&mut self, jobs: u32) -> Result<()> {
        self.jobs_collected = self
            .jobs_collected
            .checked_add(jobs)
            .ok_or(FactoryError::Overflow)?;
        self.spots_collected = self
            .spots_collected
            .checked_add(1)
            .ok_or(FactoryError::Overflow)?;
        Ok(())
    }

    pub fn record_reward(&mut self, amount: u64) -> Result<()> {
        self.rewards_collected = self
            .rewards_collected
            .checked_add(amount)
            .ok_or(FactoryError::Overflow)?;
        self.spots_collected = self
            .spots_collected
            .checked_add(1)
            .ok_or(FactoryError::Overflow)?;
        Ok(())
    }

    /// Jobs held by the record at `info`; an account never created reads as zero
    pub fn jobs_held(info: &AccountInfo, program_id: &Pubkey) -> Result<u32> {
        if info.data_is_empty() {
            return Ok(0);
        }
        require_keys_eq!(*info.owner, *program_id, anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram);
        let data = info.try_borrow_data()?;
        let record = CollectorRecord::try_deserialize(&mut &data[..])?;
        Ok(record.jobs_collected)
    }
}
