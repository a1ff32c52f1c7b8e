//! Core types and traits for network list management.
//!
//! This crate provides the foundational pieces shared by the client, the
//! workflows and the CLI:
//!
//! - **Types**: network lists, activations, subscriptions and [`ItemSet`]
//! - **Errors**: the classified [`NetlistError`]
//! - **Service contract**: the [`ListService`] trait every backend implements
//!
//! # Example
//!
//! ```rust
//! use netlist_core::{ItemSet, ListType};
//!
//! let items = ItemSet::from_items(ListType::Ip, ["10.0.0.0/8", " 10.0.0.0/8"]);
//! assert_eq!(items.len(), 1);
//! ```

mod error;
mod service;
pub mod types;

pub use error::{ErrorKind, NetlistError, Result};
pub use service::ListService;
pub use types::*;
