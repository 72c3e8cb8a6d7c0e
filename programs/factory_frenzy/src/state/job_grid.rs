use anchor_lang::prelude::*;

use crate::errors::FactoryError;
use crate::state::{Coordinate, JobAllocation, JobSpot, JobSpotState};

pub const MAX_GRID_SIZE: u8 = 10;
pub const MAX_SPOTS: usize = (MAX_GRID_SIZE as usize) * (MAX_GRID_SIZE as usize);

/// Every job spot of the factory, stored row-major.
/// Empty until `initialize` runs, then fixed at grid_size * grid_size spots.
#[account]
#[derive(InitSpace)]
pub struct JobGrid {
    /// Side length, 0 until populated
    pub grid_size: u8,
    pub bump: u8,
    #[max_len(100)] // MAX_SPOTS
    pub spots: Vec<JobSpot>,
}

impl JobGrid {
    pub const SEED: &'static [u8] = b"job_grid";

    pub fn is_initialized(&self) -> bool {
        self.grid_size > 0
    }

    fn index(&self, coordinate: Coordinate) -> Result<usize> {
        require!(
            self.is_initialized()
                && coordinate.row < self.grid_size
                && coordinate.col < self.grid_size,
            FactoryError::NotFound
        );
        Ok((coordinate.row as usize) * (self.grid_size as usize) + (coordinate.col as usize))
    }

    pub fn spot(&self, coordinate: Coordinate) -> Result<&JobSpot> {
        let index = self.index(coordinate)?;
        self.spots.get(index).ok_or_else(|| FactoryError::NotFound.into())
    }

    pub fn spot_mut(&mut self, coordinate: Coordinate) -> Result<&mut JobSpot> {
        let index = self.index(coordinate)?;
        self.spots.get_mut(index).ok_or_else(|| FactoryError::NotFound.into())
    }

    pub fn spot_state(&self, coordinate: Coordinate) -> JobSpotState {
        match self.spot(coordinate) {
            Ok(spot) => spot.state(),
            Err(_) => JobSpotState::Uninitialized,
        }
    }

    /// Fill every coordinate of a `grid_size` x `grid_size` grid from
    /// `allocate` and return the total jobs issued. All spots are built
    /// before the grid is touched, so a failing allocation leaves it empty.
    pub fn populate<F>(&mut self, grid_size: u8, mut allocate: F) -> Result<u32>
    where
        F: FnMut(Coordinate) -> Result<JobAllocation>,
    {
        require!(!self.is_initialized(), FactoryError::AlreadyInitialized);
        require!(
            grid_size > 0 && grid_size <= MAX_GRID_SIZE,
            FactoryError::InvalidGridSize
        );

        let mut spots = Vec::with_capacity((grid_size as usize) * (grid_size as usize));
        let mut total_issued: u32 = 0;
        for coordinate in Coordinate::all(grid_size) {
            let allocation = allocate(coordinate)?;
            total_issued = total_issued
                .checked_add(allocation.jobs_issued)
                .ok_or(FactoryError::Overflow)?;
            spots.push(JobSpot::new(allocation));
        }

        self.spots = spots;
        self.grid_size = grid_size;
        Ok(total_issued)
    }

    pub fn total_jobs_issued(&self) -> u64 {
        self.spots.iter().map(|s| s.jobs_issued as u64).sum()
    }

    pub fn total_available_jobs(&self) -> u64 {
        self.spots.iter().map(|s| s.available_jobs() as u64).sum()
    }
}
