//! Pressroom CLI Application
//!
//! Command-line interface for the plan-driven article pipeline. Intended
//! to be invoked by a scheduler once per day; running it by hand with
//! `--date` replays any scheduled day.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands, PublishArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use pressroom_core::PublisherBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { root, command } = Args::parse();

    let publisher = PublisherBuilder::new()
        .with_root(root)
        .build()
        .context("Failed to initialize publisher")?;

    info!("Pressroom started");

    match command {
        Some(Publish(PublishArgs { date })) => Cli::new(publisher).publish(date).await,
        Some(Plan) => Cli::new(publisher).generate_plan().await,
        Some(RefreshHeroes) => Cli::new(publisher).refresh_heroes().await,
        None => Cli::new(publisher).publish(None).await,
    }
}
