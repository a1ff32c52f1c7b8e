//! Network list workflows on top of a [`ListService`].
//!
//! Each component owns a service handle and runs one bounded sequence of
//! service calls per operation. Nothing is cached between calls and nothing
//! is retried; the first error is returned as is.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use netlist::{NetlistClient, SyncEngine};
//!
//! #[tokio::main]
//! async fn main() -> netlist::Result<()> {
//!     let client = NetlistClient::new("https://akab-host.luna.akamaiapis.net")?;
//!
//!     // Copy every entry of one list into another (additive)
//!     let updated = SyncEngine::new(client).sync("1_SRC", "2_DST").await?;
//!     println!("{} now holds {} entries", updated.name, updated.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

mod activation;
mod aggregator;
mod lifecycle;
mod mutator;
mod notification;
mod sync;

#[cfg(test)]
mod testing;

pub use activation::ActivationController;
pub use aggregator::ListAggregator;
pub use lifecycle::{ListLifecycle, DEFAULT_DESCRIPTION};
pub use mutator::ItemMutator;
pub use notification::NotificationManager;
pub use sync::SyncEngine;

// Re-export core types
pub use netlist_core::*;

// Re-export client
pub use netlist_client::{
    NetlistClient, NetlistClientBuilder, RateLimitConfig, RequestSigner, StaticHeaderSigner,
};

pub use serde;
pub use serde_json;

/// Trim a required identifier, rejecting blanks
pub(crate) fn require<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(NetlistError::InvalidArgument(format!("{what} is required")))
    } else {
        Ok(trimmed)
    }
}

/// Trimmed, non-blank values in first-seen order without duplicates
pub(crate) fn distinct<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.as_ref().trim();
        if !value.is_empty() && !out.iter().any(|existing| existing == value) {
            out.push(value.to_string());
        }
    }
    out
}
