use anchor_lang::prelude::*;

#[error_code]
pub enum FactoryError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Job grid is already initialized")]
    AlreadyInitialized,

    #[msg("Invalid grid size")]
    InvalidGridSize,

    #[msg("Job spot not found")]
    NotFound,

    #[msg("Job spot is already collected")]
    AlreadyCollected,

    #[msg("Insufficient supply to satisfy the collection")]
    InsufficientSupply,

    #[msg("Jobs per spot must be between 1 and the maximum")]
    InvalidJobCap,

    #[msg("URI base is too long")]
    UriTooLong,

    #[msg("Collection not set")]
    CollectionNotSet,

    #[msg("Invalid collection")]
    InvalidCollection,

    #[msg("Invalid reward pool")]
    InvalidRewardPool,

    #[msg("Reward mint does not match the factory")]
    InvalidRewardMint,

    #[msg("Number of job asset accounts does not match jobs to collect")]
    InvalidAssetAccounts,

    #[msg("Job asset account does not match its job id")]
    InvalidAssetAccount,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Arithmetic overflow")]
    Overflow,
}
