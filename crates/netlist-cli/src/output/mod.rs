//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use netlist::{Activation, ActivationStatus, NetworkList};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl OutputFormat {
    /// Print a value as JSON or YAML; returns false for `Pretty`
    pub fn emit<T: Serialize + ?Sized>(self, value: &T) -> Result<bool> {
        match self {
            Self::Json => println!("{}", serde_json::to_string_pretty(value)?),
            Self::Yaml => print!("{}", serde_yaml::to_string(value)?),
            Self::Pretty => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    list_type: String,
    #[tabled(rename = "Items")]
    items: u64,
    #[tabled(rename = "Staging")]
    staging: String,
    #[tabled(rename = "Production")]
    production: String,
}

fn status_cell(status: Option<ActivationStatus>) -> String {
    status.map_or_else(|| "-".to_string(), |s| s.to_string())
}

/// Colored activation status
pub fn paint_status(status: ActivationStatus) -> String {
    match status {
        ActivationStatus::Active => status.as_str().green().to_string(),
        ActivationStatus::Pending => status.as_str().yellow().to_string(),
        ActivationStatus::Failed => status.as_str().red().bold().to_string(),
        ActivationStatus::Inactive => status.as_str().dimmed().to_string(),
    }
}

/// Print lists as a table
pub fn print_lists(lists: &[NetworkList]) {
    if lists.is_empty() {
        println!("  No network lists found.");
        return;
    }

    let rows: Vec<ListRow> = lists
        .iter()
        .map(|l| ListRow {
            id: l.unique_id.clone(),
            name: l.name.chars().take(40).collect(),
            list_type: l.list_type.to_string(),
            items: l.len(),
            staging: status_cell(l.staging_activation_status),
            production: status_cell(l.production_activation_status),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!();
    println!("{}", format!("{} list(s)", lists.len()).dimmed());
}

/// Print one list with its metadata and entries
pub fn print_list(list: &NetworkList) {
    println!("{} {}", "List:".bold(), list.name.cyan());
    println!("  {} {}", "ID:".bold(), list.unique_id);
    println!("  {} {}", "Type:".bold(), list.list_type);
    if let Some(description) = &list.description {
        println!("  {} {}", "Description:".bold(), description);
    }
    if let Some(sync_point) = list.sync_point {
        println!("  {} {}", "Sync point:".bold(), sync_point);
    }
    if let Some(status) = list.staging_activation_status {
        println!("  {} {}", "Staging:".bold(), paint_status(status));
    }
    if let Some(status) = list.production_activation_status {
        println!("  {} {}", "Production:".bold(), paint_status(status));
    }
    if let Some(updated) = list.update_date {
        let by = list.updated_by.as_deref().unwrap_or("unknown");
        println!("  {} {} by {}", "Updated:".bold(), updated.format("%Y-%m-%d %H:%M UTC"), by);
    }

    println!("  {} {}", "Items:".bold(), list.len());
    for item in &list.items {
        println!("    {item}");
    }
}

/// Print an activation acknowledgment or status
pub fn print_activation(activation: &Activation) {
    println!(
        "{} {} on {}: {}",
        "Activation:".bold(),
        activation.list_id.cyan(),
        activation.network,
        paint_status(activation.status)
    );
    if let Some(id) = activation.activation_id {
        println!("  {} {}", "Activation ID:".bold(), id);
    }
    if let Some(sync_point) = activation.sync_point {
        println!("  {} {}", "Sync point:".bold(), sync_point);
    }
    if let Some(detail) = &activation.detail {
        println!("  {} {}", "Detail:".bold(), detail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_pretty_is_not_emitted() {
        assert!(!OutputFormat::Pretty.emit(&["x"]).unwrap());
    }
}
