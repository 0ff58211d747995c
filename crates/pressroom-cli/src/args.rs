use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;

/// Main command-line interface for the Pressroom publication pipeline
///
/// Pressroom is a batch tool that turns monthly content plans into
/// published MDX articles. It is intended to run once per day from an
/// external scheduler: each invocation processes at most the one article
/// planned for the given date and exits.
#[derive(Parser)]
#[command(version, about, name = "pressroom")]
pub struct Args {
    /// Content root containing content-plans/ and src/content/articles/.
    /// Defaults to the current directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pressroom CLI
///
/// Running without a command is equivalent to `publish` for today's date.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the article planned for a date (default: today, UTC)
    #[command(alias = "p")]
    Publish(PublishArgs),
    /// Generate the content plan for the current month
    Plan,
    /// Refresh hero images for all persisted articles
    RefreshHeroes,
}

/// Publish the planned article for a date
///
/// Loads the month's plan, finds the entry scheduled for the date, and
/// generates it unless the target file already exists on disk. Existing
/// files are reconciled into the plan as published without any remote
/// calls.
#[derive(ClapArgs, Default)]
pub struct PublishArgs {
    /// Publication date to process instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<Date>,
}
