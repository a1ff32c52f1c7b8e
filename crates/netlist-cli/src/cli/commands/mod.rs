//! Command implementations.

pub mod activate;
pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod items;
pub mod notification;
pub mod search;
pub mod sync;

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Settings;
use crate::output::OutputFormat;
use netlist::{NetlistClient, StaticHeaderSigner};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved connection settings
    pub settings: Settings,

    /// Output format
    pub output_format: OutputFormat,

    /// Config file in use
    pub config_path: PathBuf,

    /// Config section in use
    pub section: String,
}

impl Context {
    /// Build an API client from the resolved settings.
    pub fn client(&self) -> Result<NetlistClient> {
        let host = self.settings.require_host()?;
        let mut builder = NetlistClient::builder(host);

        if let Some(key) = &self.settings.account_switch_key {
            builder = builder.account_switch_key(key);
        }
        if let Some(secs) = self.settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(authorization) = &self.settings.authorization {
            builder = builder.signer(StaticHeaderSigner::new("authorization", authorization)?);
        }

        Ok(builder.build()?)
    }
}
