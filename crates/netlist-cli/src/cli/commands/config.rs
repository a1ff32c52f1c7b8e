//! `netlist config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::{Config, Section};

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;
    for section in config.sections.values_mut() {
        section.authorization = section.authorization.as_deref().map(mask);
    }

    if ctx.output_format.emit(&config)? {
        return Ok(());
    }

    println!("{} {}", "Config file:".bold(), ctx.config_path.display());
    if config.sections.is_empty() {
        println!();
        println!("  No sections configured.");
        println!();
        println!("  Create one with: {} config set host <URL>", "netlist".cyan());
        return Ok(());
    }

    for (name, section) in &config.sections {
        println!();
        let marker = if *name == ctx.section { " (selected)" } else { "" };
        println!("[{}]{}", name.cyan(), marker.dimmed());
        print_section(section);
    }

    Ok(())
}

fn print_section(section: &Section) {
    let unset = || "(not set)".dimmed().to_string();
    println!("  {} {}", "host:".bold(), section.host.clone().unwrap_or_else(unset));
    println!(
        "  {} {}",
        "account_switch_key:".bold(),
        section.account_switch_key.clone().unwrap_or_else(unset)
    );
    println!(
        "  {} {}",
        "authorization:".bold(),
        section.authorization.clone().unwrap_or_else(unset)
    );
    println!(
        "  {} {}",
        "timeout_secs:".bold(),
        section.timeout_secs.map_or_else(unset, |t| t.to_string())
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        section.output_format.map_or_else(unset, |f| f.to_string())
    );
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;
    config.set(&ctx.section, key, value)?;
    config.save(&ctx.config_path)?;

    let shown = if key == "authorization" { mask(value) } else { value.trim().to_string() };
    println!(
        "{} [{}] {} set to {}.",
        "Success:".green().bold(),
        ctx.section,
        key,
        shown.cyan()
    );

    Ok(())
}

fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::mask;

    #[test]
    fn test_mask_hides_the_middle() {
        assert_eq!(mask("EG1-HMAC-SHA256 client_token=abc"), "EG1-...=abc");
        assert_eq!(mask("short"), "****");
    }
}
