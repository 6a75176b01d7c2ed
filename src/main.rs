//! CLI entry point for input-bindings
//!
//! Provides command-line interface for listing a binding profile,
//! checking it for conflicts, and rewriting it in canonical form.

use clap::{Parser, Subcommand};
use colored::*;
use input_bindings::config::{Profile, ProfileManager};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "input-bindings")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all bindings in a profile
    List {
        /// Path to the binding profile
        #[arg(short, long, default_value = "~/.config/input-bindings/bindings.conf")]
        profile: PathBuf,
    },

    /// Check a profile for binding conflicts
    Check {
        /// Path to the binding profile
        #[arg(short, long, default_value = "~/.config/input-bindings/bindings.conf")]
        profile: PathBuf,
    },

    /// Rewrite a profile in canonical form (backup kept)
    Normalize {
        /// Path to the binding profile
        #[arg(short, long, default_value = "~/.config/input-bindings/bindings.conf")]
        profile: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { profile } => list_bindings(&profile)?,
        Commands::Check { profile } => check_conflicts(&profile)?,
        Commands::Normalize { profile } => normalize_profile(&profile)?,
    }

    Ok(())
}

/// Open the profile behind a possibly tilde-prefixed path.
fn open_manager(profile_path: &PathBuf) -> anyhow::Result<ProfileManager> {
    let expanded_path = shellexpand::tilde(
        profile_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );

    Ok(ProfileManager::new(PathBuf::from(expanded_path.as_ref()))?)
}

/// List all bindings in the profile
fn list_bindings(profile_path: &PathBuf) -> anyhow::Result<()> {
    let manager = open_manager(profile_path)?;
    let profile = manager.load()?;

    println!("{}", format!("Bindings from: {}\n", profile_path.display()).bold());

    for (command, bindings) in profile.iter() {
        let rendered = if bindings.is_empty() {
            "(unbound)".dimmed().to_string()
        } else {
            bindings
                .iter()
                .map(|b| b.to_string().cyan().bold().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        println!("{} → {}", command.green(), rendered);
    }

    println!(
        "\n{} Total: {} bindings across {} commands",
        "✓".green(),
        profile.binding_count(),
        profile.command_count()
    );

    Ok(())
}

/// Check the profile for binding conflicts
fn check_conflicts(profile_path: &PathBuf) -> anyhow::Result<()> {
    let manager = open_manager(profile_path)?;

    println!("{} Loading profile: {}", "→".cyan(), profile_path.display());

    let profile = manager.load()?;

    println!(
        "{} Found {} bindings\n",
        "✓".green(),
        profile.binding_count()
    );

    let conflicts = profile.find_conflicts();

    if conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "No conflicts detected!".bold());
    } else {
        println!(
            "{} Found {} conflict{}:\n",
            "✗".red().bold(),
            conflicts.len(),
            if conflicts.len() == 1 { "" } else { "s" }
        );

        for (i, conflict) in conflicts.iter().enumerate() {
            println!(
                "{} {}",
                format!("Conflict {}", i + 1).yellow().bold(),
                conflict.binding.to_string().cyan()
            );

            for (idx, command) in conflict.commands.iter().enumerate() {
                println!("  {} {}", format!("{}.", idx + 1).dimmed(), command);
            }
            println!();
        }

        println!(
            "{}",
            "⚠ An ambiguous press will trigger only one of these commands!".yellow()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Rewrite the profile in canonical form
fn normalize_profile(profile_path: &PathBuf) -> anyhow::Result<()> {
    let manager = open_manager(profile_path)?;

    let raw = manager.read_raw()?;
    let profile = Profile::parse(&raw);

    let backup_path = manager.save(&profile)?;

    println!(
        "{} Rewrote {} commands ({} bindings) in canonical form",
        "✓".green(),
        profile.command_count(),
        profile.binding_count()
    );
    println!("{} Backup kept at: {}", "→".cyan(), backup_path.display());

    Ok(())
}
