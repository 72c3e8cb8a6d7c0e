pub mod grid_config;
pub mod coordinate;
pub mod job_spot;
pub mod job_grid;
pub mod collector_record;

pub use grid_config::*;
pub use coordinate::*;
pub use job_spot::*;
pub use job_grid::*;
pub use collector_record::*;
