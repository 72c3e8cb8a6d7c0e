#![allow(ambiguous_glob_reexports)]

pub mod create_factory;
pub mod initialize;
pub mod update_config;
pub mod fund_reward_pool;
pub mod collect_all_jobs;
pub mod collect_job;
pub mod views;

pub use create_factory::*;
pub use initialize::*;
pub use update_config::*;
pub use fund_reward_pool::*;
pub use collect_all_jobs::*;
pub use collect_job::*;
pub use views::*;
