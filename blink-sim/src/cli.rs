// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use anyhow::{bail, Context, Result};
use blink_common::{CycleTiming, TriggerScript, CYCLE_MS, ON_HOLD_MS};
use clap::{Parser, Subcommand};

use crate::commands;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "blink-sim")]
#[command(about = "Run the blink controller against a simulated port")]
pub struct Cli {
    /// Time the output is held ON, in ms
    #[arg(long, global = true, default_value_t = ON_HOLD_MS)]
    pub on_hold_ms: u32,

    /// Elapsed count at which the cycle resets, in ms
    #[arg(long, global = true, default_value_t = CYCLE_MS)]
    pub cycle_ms: u32,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a number of ticks and print output edges
    Run {
        /// Number of evaluations (1 per tick)
        #[arg(short, long, default_value = "7000")]
        ticks: u64,

        /// Press the trigger once this many ticks have elapsed
        #[arg(short, long)]
        press_after: Option<u64>,

        /// Release the trigger once this many ticks have elapsed
        #[arg(short, long, requires = "press_after")]
        release_after: Option<u64>,

        /// Also print phase entries
        #[arg(long)]
        phases: bool,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Print the phase table of the configured cycle
    Phases,
}

fn trigger_script(press_after: Option<u64>, release_after: Option<u64>) -> Result<TriggerScript> {
    Ok(match (press_after, release_after) {
        (None, _) => TriggerScript::Never,
        (Some(from), None) => TriggerScript::PressedAfter(from),
        (Some(from), Some(until)) => {
            if until <= from {
                bail!("--release-after ({until}) must be greater than --press-after ({from})");
            }
            TriggerScript::PressedWindow { from, until }
        }
    })
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let timing = CycleTiming::new(cli.on_hold_ms, cli.cycle_ms).context("Invalid cycle timing")?;

    match cli.command {
        Commands::Run {
            ticks,
            press_after,
            release_after,
            phases,
            progress,
        } => {
            let script = trigger_script(press_after, release_after)?;
            commands::run(timing, script, ticks, phases, progress)
        }
        Commands::Phases => commands::phases(timing),
    }
}
