pub mod cli;
pub mod commands;
pub mod coords;
pub mod error;
pub mod histogram;
pub mod percentile;
pub mod report;
pub mod sampling;
pub mod samtools;
pub mod stats;
pub mod types;
pub mod utils;
