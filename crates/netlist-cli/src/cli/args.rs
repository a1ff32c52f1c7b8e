//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use netlist::{ListType, ListTypeFilter};
use std::path::PathBuf;

use crate::config::DEFAULT_SECTION;
use crate::output::OutputFormat;

/// Manage network lists from the command line
///
/// List, search and sync IP and GEO network lists, change their entries,
/// activate them on staging or production, and manage notifications.
#[derive(Parser, Debug)]
#[command(name = "netlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Config section to read connection settings from
    #[arg(long, global = true, default_value = DEFAULT_SECTION)]
    pub section: String,

    /// API host URL (or set NETLIST_HOST)
    #[arg(long, global = true, value_name = "URL")]
    pub host: Option<String>,

    /// Act on behalf of another account (or set NETLIST_ACCOUNT_SWITCH_KEY)
    #[arg(long, global = true)]
    pub account_switch_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show network lists
    Get(GetArgs),

    /// Find lists whose name or entries match a pattern
    Search(SearchArgs),

    /// Copy every entry of one list into another (additive)
    Sync(SyncArgs),

    /// Add or remove list entries
    Items(ItemsArgs),

    /// Create an empty network list
    Create(CreateArgs),

    /// Activate a list or check its activation status
    Activate(ActivateArgs),

    /// Delete a network list
    Delete(DeleteArgs),

    /// Subscribe to or unsubscribe from activation notifications
    Notification(NotificationArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Get command
// ============================================================================

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(subcommand)]
    pub command: GetCommands,
}

#[derive(Subcommand, Debug)]
pub enum GetCommands {
    /// All lists of the given type
    All {
        /// IP, GEO or ANY
        #[arg(long, default_value = "ANY")]
        list_type: ListTypeFilter,

        /// Include list entries
        #[arg(long)]
        include_elements: bool,

        /// Include metadata and activation status
        #[arg(long)]
        extended: bool,
    },

    /// One list by its unique id
    ById {
        /// Unique list id
        #[arg(long)]
        id: String,

        /// Include list entries
        #[arg(long)]
        include_elements: bool,

        /// Include metadata and activation status
        #[arg(long)]
        extended: bool,
    },

    /// Lists whose name matches
    ByName {
        /// Name or part of it
        #[arg(long)]
        name: String,

        /// IP, GEO or ANY
        #[arg(long, default_value = "ANY")]
        list_type: ListTypeFilter,

        /// Include metadata and activation status
        #[arg(long)]
        extended: bool,
    },
}

// ============================================================================
// Search command
// ============================================================================

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in list names and entries
    #[arg(long)]
    pub pattern: String,

    /// IP, GEO or ANY
    #[arg(long, default_value = "ANY")]
    pub list_type: ListTypeFilter,

    /// Include list entries
    #[arg(long)]
    pub include_elements: bool,
}

// ============================================================================
// Sync command
// ============================================================================

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// List to copy entries from
    #[arg(long)]
    pub id_src: String,

    /// List to copy entries into
    #[arg(long)]
    pub id_dst: String,
}

// ============================================================================
// Items command
// ============================================================================

#[derive(Args, Debug)]
pub struct ItemsArgs {
    #[command(subcommand)]
    pub command: ItemsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ItemsCommands {
    /// Add entries (already present entries are ignored)
    Add {
        /// Unique list id
        #[arg(long)]
        id: String,

        /// Entries to add, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        items: Vec<String>,
    },

    /// Remove one entry
    Remove {
        /// Unique list id
        #[arg(long)]
        id: String,

        /// Entry to remove
        #[arg(long)]
        element: String,
    },
}

// ============================================================================
// Create command
// ============================================================================

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the new list
    #[arg(long)]
    pub name: String,

    /// Description of the new list
    #[arg(long)]
    pub description: Option<String>,

    /// IP or GEO
    #[arg(long = "type", default_value = "IP")]
    pub list_type: ListType,
}

// ============================================================================
// Activate command
// ============================================================================

#[derive(Args, Debug)]
pub struct ActivateArgs {
    #[command(subcommand)]
    pub command: ActivateCommands,
}

#[derive(Subcommand, Debug)]
pub enum ActivateCommands {
    /// Submit an activation
    List {
        /// Unique list id
        #[arg(long)]
        id: String,

        /// Audit comment
        #[arg(long)]
        comments: Option<String>,

        /// Addresses notified about this activation, comma separated
        #[arg(long, value_delimiter = ',')]
        recipients: Vec<String>,

        /// Request fast propagation
        #[arg(long)]
        fast: bool,

        /// Target production instead of staging
        #[arg(long)]
        prd: bool,
    },

    /// Show activation status
    Status {
        /// Unique list id
        #[arg(long)]
        id: String,

        /// Check production instead of staging
        #[arg(long)]
        prd: bool,
    },
}

// ============================================================================
// Delete command
// ============================================================================

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Unique list id
    #[arg(long)]
    pub id: String,
}

// ============================================================================
// Notification command
// ============================================================================

#[derive(Args, Debug)]
pub struct NotificationArgs {
    /// Lists to change, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub list_ids: Vec<String>,

    /// Notification addresses, comma separated
    #[arg(long, value_delimiter = ',')]
    pub recipients: Vec<String>,

    /// Unsubscribe instead of subscribe
    #[arg(long)]
    pub unsubscribe: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value in the selected section
    Set {
        /// Key: host, account_switch_key, authorization, timeout_secs, output_format
        key: String,
        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
