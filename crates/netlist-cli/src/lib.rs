//! # netlist-cli
//!
//! Command-line interface for network lists.
//!
//! ## Features
//!
//! - **Listing and search** across IP and GEO lists
//! - **Sync**: additive copy of entries from one list into another
//! - **Item changes**: idempotent adds, strict removals
//! - **Activation** on staging or production, with status checks
//! - **Notifications**: subscribe and unsubscribe recipients
//! - **Config sections** for several hosts or accounts
//! - **Multiple output formats**: pretty tables, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
