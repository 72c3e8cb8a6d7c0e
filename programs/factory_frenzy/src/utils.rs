use anchor_lang::prelude::*;

use crate::errors::FactoryError;
use crate::state::{Coordinate, JobAllocation, JOB_ASSET_SEED, MAX_JOBS_PER_SPOT};

const ALLOCATION_DOMAIN: &[u8] = b"factory_frenzy:job_allocation:v1";

/// Jobs and reward for one coordinate.
///
/// jobs = 1 + (first 8 bytes of blake3(domain || seed || row || col)) mod max_jobs_per_spot
/// reward = jobs * reward_per_job
///
/// The seed is the GridConfig address, so the whole grid can be recomputed
/// off-chain and nothing a collector submits can steer it.
pub fn derive_job_allocation(
    seed: &[u8; 32],
    coordinate: Coordinate,
    max_jobs_per_spot: u8,
    reward_per_job: u64,
) -> Result<JobAllocation> {
    require!(
        max_jobs_per_spot > 0 && max_jobs_per_spot <= MAX_JOBS_PER_SPOT,
        FactoryError::InvalidJobCap
    );

    let mut hasher = blake3::Hasher::new();
    hasher.update(ALLOCATION_DOMAIN);
    hasher.update(seed);
    hasher.update(&[coordinate.row, coordinate.col]);
    let digest = hasher.finalize();

    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    let roll = u64::from_le_bytes(word);

    let jobs_issued = 1 + (roll % max_jobs_per_spot as u64) as u32;
    let reward = (jobs_issued as u64)
        .checked_mul(reward_per_job)
        .ok_or(FactoryError::Overflow)?;

    Ok(JobAllocation { jobs_issued, reward })
}

/// Address and bump of the Core asset for the `ordinal`-th job of a spot.
/// Addresses depend only on the spot, so collections on different spots
/// never compete for the same accounts.
pub fn job_asset_address(coordinate: Coordinate, ordinal: u8, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[JOB_ASSET_SEED, &[coordinate.row], &[coordinate.col], &[ordinal]],
        program_id,
    )
}

/// One asset account per job, no more and no fewer
pub fn ensure_asset_count(provided: usize, jobs: u32) -> Result<()> {
    require!(provided == jobs as usize, FactoryError::InvalidAssetAccounts);
    Ok(())
}

pub fn ensure_pool_covers(pool_amount: u64, reward: u64) -> Result<()> {
    require!(pool_amount >= reward, FactoryError::InsufficientSupply);
    Ok(())
}

/// Checks the asset accounts against the spot's job PDAs, starting at
/// `first_ordinal`, and returns `(ordinal, bump)` for each in order.
pub fn validate_job_assets(
    asset_accounts: &[AccountInfo],
    coordinate: Coordinate,
    first_ordinal: u32,
    program_id: &Pubkey,
) -> Result<Vec<(u8, u8)>> {
    let mut seeds = Vec::with_capacity(asset_accounts.len());
    for (offset, asset) in asset_accounts.iter().enumerate() {
        let ordinal = first_ordinal
            .checked_add(offset as u32)
            .and_then(|o| u8::try_from(o).ok())
            .ok_or(FactoryError::Overflow)?;
        let (expected, bump) = job_asset_address(coordinate, ordinal, program_id);
        require_keys_eq!(*asset.key, expected, FactoryError::InvalidAssetAccount);
        require!(asset.is_writable, FactoryError::InvalidAssetAccount);
        seeds.push((ordinal, bump));
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: [u8; 32] = [7u8; 32];

    fn grid_of(seed: &[u8; 32], max_jobs: u8) -> Vec<u32> {
        Coordinate::all(5)
            .map(|c| derive_job_allocation(seed, c, max_jobs, 0).unwrap().jobs_issued)
            .collect()
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let a = derive_job_allocation(&SEED, Coordinate::new(1, 3), 8, 100).unwrap();
        let b = derive_job_allocation(&SEED, Coordinate::new(1, 3), 8, 100).unwrap();
        assert_eq!(a, b);
        assert_eq!(grid_of(&SEED, 10), grid_of(&SEED, 10));
    }

    #[test]
    fn test_allocation_within_bounds() {
        for max_jobs in 1..=MAX_JOBS_PER_SPOT {
            for jobs in grid_of(&SEED, max_jobs) {
                assert!(jobs >= 1 && jobs <= max_jobs as u32);
            }
        }
        // a cap of one leaves no room for variation
        assert!(grid_of(&SEED, 1).iter().all(|&jobs| jobs == 1));
    }

    #[test]
    fn test_reward_scales_with_jobs() {
        for c in Coordinate::all(5) {
            let a = derive_job_allocation(&SEED, c, 10, 1_000).unwrap();
            assert_eq!(a.reward, a.jobs_issued as u64 * 1_000);
        }
        let asset_only = derive_job_allocation(&SEED, Coordinate::new(0, 0), 10, 0).unwrap();
        assert_eq!(asset_only.reward, 0);
    }

    #[test]
    fn test_seed_changes_the_grid() {
        assert_ne!(grid_of(&[1u8; 32], 10), grid_of(&[2u8; 32], 10));
    }

    #[test]
    fn test_invalid_cap_rejected() {
        let err = derive_job_allocation(&SEED, Coordinate::new(0, 0), 0, 1).unwrap_err();
        assert_eq!(err, FactoryError::InvalidJobCap.into());
        let err = derive_job_allocation(&SEED, Coordinate::new(0, 0), MAX_JOBS_PER_SPOT + 1, 1)
            .unwrap_err();
        assert_eq!(err, FactoryError::InvalidJobCap.into());
    }

    #[test]
    fn test_reward_overflow_detected() {
        let overflowed = Coordinate::all(5)
            .filter(|&c| derive_job_allocation(&SEED, c, 10, u64::MAX).is_err())
            .count();
        let multi_job = grid_of(&SEED, 10).iter().filter(|&&jobs| jobs > 1).count();
        assert_eq!(overflowed, multi_job);
        assert!(multi_job > 0);
    }

    /// Owns the backing storage for a set of AccountInfo fixtures
    struct AssetFixture {
        keys: Vec<Pubkey>,
        lamports: Vec<u64>,
        data: Vec<Vec<u8>>,
        owner: Pubkey,
    }

    impl AssetFixture {
        fn new(keys: Vec<Pubkey>) -> Self {
            let len = keys.len();
            Self {
                keys,
                lamports: vec![0; len],
                data: vec![Vec::new(); len],
                owner: Pubkey::default(),
            }
        }

        fn for_spot(coordinate: Coordinate, ordinals: std::ops::Range<u8>) -> Self {
            Self::new(
                ordinals
                    .map(|o| job_asset_address(coordinate, o, &crate::ID).0)
                    .collect(),
            )
        }

        fn infos(&mut self, writable: bool) -> Vec<AccountInfo<'_>> {
            let owner = &self.owner;
            self.keys
                .iter()
                .zip(self.lamports.iter_mut())
                .zip(self.data.iter_mut())
                .map(|((key, lamports), data)| {
                    AccountInfo::new(key, false, writable, lamports, data.as_mut_slice(), owner, false, 0)
                })
                .collect()
        }
    }

    #[test]
    fn test_job_asset_addresses_are_distinct() {
        let a1 = Coordinate::new(0, 0);
        let (first, _) = job_asset_address(a1, 0, &crate::ID);
        let (second, _) = job_asset_address(a1, 1, &crate::ID);
        let (other_spot, _) = job_asset_address(Coordinate::new(0, 1), 0, &crate::ID);
        assert_ne!(first, second);
        assert_ne!(first, other_spot);
        assert_eq!(job_asset_address(a1, 0, &crate::ID).0, first);
    }

    #[test]
    fn test_valid_assets_pass() {
        let c4 = Coordinate::new(2, 3);
        let mut fixture = AssetFixture::for_spot(c4, 0..4);
        let infos = fixture.infos(true);

        let seeds = validate_job_assets(&infos, c4, 0, &crate::ID).unwrap();
        let ordinals: Vec<u8> = seeds.iter().map(|&(ordinal, _)| ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
        for (ordinal, bump) in seeds {
            assert_eq!(job_asset_address(c4, ordinal, &crate::ID).1, bump);
        }
    }

    #[test]
    fn test_other_spot_commits_do_not_invalidate_assets() {
        let a1 = Coordinate::new(0, 0);
        let c4 = Coordinate::new(2, 3);
        let mut a1_fixture = AssetFixture::for_spot(a1, 0..3);
        let mut c4_fixture = AssetFixture::for_spot(c4, 0..2);
        let a1_infos = a1_fixture.infos(true);
        let c4_infos = c4_fixture.infos(true);

        // both prepared against untouched spots, in either commit order
        assert!(validate_job_assets(&a1_infos, a1, 0, &crate::ID).is_ok());
        assert!(validate_job_assets(&c4_infos, c4, 0, &crate::ID).is_ok());
        assert!(validate_job_assets(&a1_infos, a1, 0, &crate::ID).is_ok());

        // a1's assets cannot stand in for c4's
        let err = validate_job_assets(&a1_infos[..2], c4, 0, &crate::ID).unwrap_err();
        assert_eq!(err, FactoryError::InvalidAssetAccount.into());
    }

    #[test]
    fn test_wrong_order_rejected() {
        let c = Coordinate::new(1, 1);
        let mut fixture = AssetFixture::for_spot(c, 0..3);
        fixture.keys.swap(0, 2);
        let infos = fixture.infos(true);

        let err = validate_job_assets(&infos, c, 0, &crate::ID).unwrap_err();
        assert_eq!(err, FactoryError::InvalidAssetAccount.into());
    }

    #[test]
    fn test_foreign_address_rejected() {
        let c = Coordinate::new(1, 1);
        let mut fixture = AssetFixture::for_spot(c, 0..2);
        fixture.keys[1] = Pubkey::new_unique();
        let infos = fixture.infos(true);

        let err = validate_job_assets(&infos, c, 0, &crate::ID).unwrap_err();
        assert_eq!(err, FactoryError::InvalidAssetAccount.into());
    }

    #[test]
    fn test_wrong_starting_ordinal_rejected() {
        let c = Coordinate::new(3, 0);
        let mut fixture = AssetFixture::for_spot(c, 0..2);
        let infos = fixture.infos(true);

        let err = validate_job_assets(&infos, c, 1, &crate::ID).unwrap_err();
        assert_eq!(err, FactoryError::InvalidAssetAccount.into());
    }

    #[test]
    fn test_readonly_asset_rejected() {
        let c = Coordinate::new(0, 4);
        let mut fixture = AssetFixture::for_spot(c, 0..1);
        let infos = fixture.infos(false);

        let err = validate_job_assets(&infos, c, 0, &crate::ID).unwrap_err();
        assert_eq!(err, FactoryError::InvalidAssetAccount.into());
    }

    #[test]
    fn test_ordinal_overflow_rejected() {
        let c = Coordinate::new(0, 0);
        let mut fixture = AssetFixture::new(vec![
            job_asset_address(c, u8::MAX, &crate::ID).0,
            Pubkey::new_unique(),
        ]);
        let infos = fixture.infos(true);

        let err = validate_job_assets(&infos, c, u8::MAX as u32, &crate::ID).unwrap_err();
        assert_eq!(err, FactoryError::Overflow.into());
    }

    #[test]
    fn test_asset_count_must_match() {
        assert!(ensure_asset_count(4, 4).is_ok());
        assert_eq!(
            ensure_asset_count(3, 4).unwrap_err(),
            FactoryError::InvalidAssetAccounts.into()
        );
        assert_eq!(
            ensure_asset_count(5, 4).unwrap_err(),
            FactoryError::InvalidAssetAccounts.into()
        );
    }

    #[test]
    fn test_pool_must_cover_reward() {
        assert!(ensure_pool_covers(500, 500).is_ok());
        assert!(ensure_pool_covers(501, 500).is_ok());
        assert_eq!(
            ensure_pool_covers(499, 500).unwrap_err(),
            FactoryError::InsufficientSupply.into()
        );
    }
}
