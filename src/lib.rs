//! ProfitFirst - Terminal-based Profit First revenue allocation
//!
//! This library provides the core functionality for the ProfitFirst
//! application: splitting incoming revenue across a fixed set of bank
//! accounts by percentage, and moving the money through a payment
//! provider's API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Accounts, percentages, allocations, money and history
//! - `storage`: JSON file storage for the account registry
//! - `services`: Business logic layer
//! - `provider`: Payment provider trait and HTTP client
//! - `display`: Text formatting for CLI output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal UI
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use profitfirst::models::AllocationPercentages;
//! use profitfirst::services::calculate_allocations;
//!
//! let breakdown = calculate_allocations(1000.0, &AllocationPercentages::default());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ProfitFirstError;
