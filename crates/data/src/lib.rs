//! Position storage for the carbon portfolio service.
//!
//! This crate provides:
//! - The `PositionRepository` trait consumed by the web API
//! - An in-memory store with the demo seed portfolio
//! - CSV load/write utilities for position files

pub mod csv_store;
pub mod store;

pub use csv_store::CsvPositionStore;
pub use store::{seed_positions, InMemoryPositionStore, PositionRepository};
