//! Capacity sweep CLI library.
//!
//! This crate holds the user-facing text printed by the `capsweep-cli`
//! binary, kept separate from `main.rs` so it can be unit tested.

pub mod output;
