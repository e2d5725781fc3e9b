// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations for the simulator.

use anyhow::Result;
use blink_common::{BlinkController, ControlLoop, CycleTiming, Phase, SimPort, TriggerScript};
use indicatif::{ProgressBar, ProgressStyle};

/// Evaluations between progress bar updates.
const PROGRESS_STRIDE: u64 = 10_000;

/// Output line change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// 1-based evaluation that produced the change.
    pub evaluation: u64,
    pub on: bool,
}

/// Everything observed during a simulated run.
#[derive(Debug, Default)]
pub struct Trace {
    pub edges: Vec<Edge>,
    /// (evaluation, phase) whenever the executed phase changes.
    pub phases: Vec<(u64, Phase)>,
    pub armed_at: Option<u64>,
    pub samples: u64,
    pub writes: u64,
}

/// Run `evaluations` control-loop iterations against a [`SimPort`].
pub fn simulate(
    timing: CycleTiming,
    script: TriggerScript,
    evaluations: u64,
    progress: &ProgressBar,
) -> Trace {
    let mut control = ControlLoop::new(BlinkController::new(timing), SimPort::new(script));
    let mut trace = Trace::default();
    let mut level = control.port().output();
    let mut last_phase = None;

    for evaluation in 1..=evaluations {
        let step = control.run_once();

        if step.armed_now {
            trace.armed_at = Some(evaluation);
        }
        if last_phase != Some(step.phase) {
            trace.phases.push((evaluation, step.phase));
            last_phase = Some(step.phase);
        }

        let on = control.port().output();
        if on != level {
            trace.edges.push(Edge { evaluation, on });
            level = on;
        }

        if evaluation % PROGRESS_STRIDE == 0 {
            progress.set_position(evaluation);
        }
    }

    progress.finish_and_clear();
    trace.samples = control.port().samples();
    trace.writes = control.port().writes();
    trace
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::WaitForTrigger => "wait-for-trigger",
        Phase::OnEdge => "on-edge",
        Phase::OnHold => "on-hold",
        Phase::OffHold => "off-hold",
        Phase::Reset => "reset",
    }
}

/// Simulate and print the output edges.
pub fn run(
    timing: CycleTiming,
    script: TriggerScript,
    evaluations: u64,
    show_phases: bool,
    show_progress: bool,
) -> Result<()> {
    println!(
        "Cycle:   {} ms on, {} ms off ({} ticks/cycle)",
        timing.on_hold_ms(),
        timing.off_hold_ms(),
        timing.period_ticks()
    );
    println!("Trigger: {:?}", script);
    println!("Ticks:   {}", evaluations);
    println!();

    let progress = if show_progress {
        let pb = ProgressBar::new(evaluations);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ticks")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let trace = simulate(timing, script, evaluations, &progress);

    if show_phases {
        for (evaluation, phase) in &trace.phases {
            println!("tick {:>8}: enter {}", evaluation, phase_name(*phase));
        }
        println!();
    }

    for edge in &trace.edges {
        println!(
            "tick {:>8}: output {}",
            edge.evaluation,
            if edge.on { "ON" } else { "OFF" }
        );
    }

    println!();
    match trace.armed_at {
        Some(evaluation) => println!("Armed at tick {}", evaluation),
        None => println!("Never armed"),
    }
    println!("Edges:         {}", trace.edges.len());
    println!("Input samples: {}", trace.samples);
    println!("Output writes: {}", trace.writes);

    Ok(())
}

/// One row of the phase table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseRow {
    pub phase: Phase,
    /// Counter values covered, or "-" when the phase is skipped.
    pub range: String,
    pub ticks: u32,
    pub on: bool,
}

/// Phase table of a cycle, in execution order.
pub fn phase_table(timing: CycleTiming) -> Vec<PhaseRow> {
    let on_hold = timing.on_hold_ms();
    let cycle = timing.cycle_ms();

    let on_hold_range = if on_hold > 1 {
        format!("1..={}", on_hold - 1)
    } else {
        "-".to_string()
    };

    vec![
        PhaseRow {
            phase: Phase::OnEdge,
            range: "0".to_string(),
            ticks: 1,
            on: true,
        },
        PhaseRow {
            phase: Phase::OnHold,
            range: on_hold_range,
            ticks: on_hold - 1,
            on: true,
        },
        PhaseRow {
            phase: Phase::OffHold,
            range: format!("{}..={}", on_hold, cycle - 1),
            ticks: timing.off_hold_ms(),
            on: false,
        },
        PhaseRow {
            phase: Phase::Reset,
            range: cycle.to_string(),
            ticks: 1,
            on: false,
        },
    ]
}

/// Print the phase table of a cycle.
pub fn phases(timing: CycleTiming) -> Result<()> {
    println!("{:<10} {:<16} {:>10}  output", "phase", "t", "ticks");
    for row in phase_table(timing) {
        println!(
            "{:<10} {:<16} {:>10}  {}",
            phase_name(row.phase),
            row.range,
            row.ticks,
            if row.on { "ON" } else { "OFF" }
        );
    }
    println!();
    println!(
        "Period: {} ticks ({} ms at 1 ms/tick)",
        timing.period_ticks(),
        timing.period_ticks()
    );

    Ok(())
}
