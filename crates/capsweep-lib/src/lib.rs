//! Capacity sweep library entry points.
//!
//! This crate evaluates the closed-form capacity formula over a swept
//! parameter, assembles the result table and writes it as CSV. The CLI should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod capacity;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod sweep;
pub mod table;

pub use capacity::{bits_to_gb, bits_to_kb, block_ratio, capacity_gb, floored_log_term};
pub use config::SweepConfig;
pub use error::{Error, Result};
pub use export::export;
pub use sweep::{linspace, Sweep};
pub use table::{compute_table, CapacityRow, CapacityTable};
