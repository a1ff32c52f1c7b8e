//! HTTP client for the network lists v2 API.
//!
//! This crate provides [`NetlistClient`], a thin typed wrapper over the
//! network list, activation and notification endpoints. It also implements
//! [`netlist_core::ListService`], which is what the workflows in the
//! `netlist` crate consume.
//!
//! Request signing is pluggable through [`RequestSigner`]; the default
//! [`NoopSigner`] sends requests unsigned.

mod client;
mod config;
mod service;
mod signer;
pub mod api;

pub use client::{NetlistClient, NetlistClientBuilder};
pub use config::RateLimitConfig;
pub use netlist_core::{NetlistError, Result};
pub use signer::{NoopSigner, RequestSigner, StaticHeaderSigner};
