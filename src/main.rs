// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;
use std::hint::black_box;
use std::time::Instant;

use skiplink::parity::{self, Op, ParityReport};
use skiplink::{LinkedList, ListConfig};

mod cli;
use cli::display::{self, field, section_bot, section_top};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parity {
            ops,
            schedule,
            capacity,
            json,
        } => run_parity(ops, schedule.as_deref(), capacity, json),
        Commands::Bench {
            size,
            lookups,
            skip_index,
        } => run_bench(size, lookups, skip_index),
        Commands::Render {
            values,
            config,
            capacity,
            skip_index,
        } => run_render(values, config.as_deref(), capacity, skip_index),
    };

    if let Err(e) = result {
        display::error(&e);
        std::process::exit(1);
    }
}

fn run_parity(
    ops: usize,
    schedule_path: Option<&str>,
    capacity: Option<usize>,
    json: bool,
) -> Result<(), String> {
    let schedule: Vec<Op> = match schedule_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read schedule {}: {}", path, e))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("Failed to parse schedule {}: {}", path, e))?
        }
        None => parity::demo_schedule(ops),
    };

    let start = Instant::now();
    let report = parity::run(&schedule, capacity);
    let elapsed = start.elapsed();

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", out);
    } else {
        print_parity_report(&report, elapsed.as_secs_f64() * 1000.0);
    }

    if report.is_consistent() {
        Ok(())
    } else {
        Err("skip-indexed list diverged from the plain list".to_string())
    }
}

fn print_parity_report(report: &ParityReport, elapsed_ms: f64) {
    section_top("PARITY");
    field("operations", &display::format_count(report.operations));
    field("rejected", &display::format_count(report.rejected));
    field("plain len", &display::format_count(report.plain_len));
    field("indexed len", &display::format_count(report.indexed_len));
    field("checkpoints", &display::format_count(report.checkpoints));
    field("mismatches", &display::format_count(report.mismatch_count));
    field("elapsed", &format!("{:.1} ms", elapsed_ms));
    field("result", &display::verdict(report.is_consistent()));
    section_bot();

    if !report.diverged_ops.is_empty() {
        println!();
        section_top("DIVERGED OPERATIONS");
        for step in &report.diverged_ops {
            field("step", &step.to_string());
        }
        section_bot();
    }
    if !report.mismatches.is_empty() {
        println!();
        section_top("MISMATCHES");
        for m in &report.mismatches {
            field(
                &format!("index {}", m.index),
                &format!("plain {} / indexed {}", m.plain, m.indexed),
            );
        }
        section_bot();
    }
    if let Some(audit) = &report.audit_error {
        println!();
        display::error(&format!("audit failed: {}", audit));
    }
}

fn run_bench(size: usize, lookups: usize, skip_index: bool) -> Result<(), String> {
    if size == 0 {
        return Err("--size must be at least 1".to_string());
    }
    let config = ListConfig::new().with_skip_index(skip_index);

    let start = Instant::now();
    let list = LinkedList::from_values(0..size as i64, config)
        .map_err(|e| format!("Failed to build list: {}", e))?;
    let build = start.elapsed();

    let start = Instant::now();
    let mut sum = 0i64;
    for i in 0..lookups {
        let value = list
            .get(i % size)
            .map_err(|e| format!("Lookup failed: {}", e))?;
        sum = sum.wrapping_add(*value);
    }
    black_box(sum);
    let read = start.elapsed();

    let per_lookup = if lookups == 0 {
        0.0
    } else {
        read.as_nanos() as f64 / lookups as f64
    };

    section_top("BENCH");
    field("size", &display::format_count(size));
    field("skip index", if skip_index { "on" } else { "off" });
    field("checkpoints", &display::format_count(list.checkpoint_count()));
    field("build", &format!("{:.2} ms", build.as_secs_f64() * 1000.0));
    field("lookups", &display::format_count(lookups));
    field("total", &format!("{:.2} ms", read.as_secs_f64() * 1000.0));
    field("per lookup", &display::timing_ns(per_lookup));
    section_bot();
    Ok(())
}

fn run_render(
    values: Vec<String>,
    config_path: Option<&str>,
    capacity: Option<usize>,
    skip_index: bool,
) -> Result<(), String> {
    let mut config = match config_path {
        Some(path) => ListConfig::from_path(path).map_err(|e| e.to_string())?,
        None => ListConfig::new(),
    };
    if let Some(capacity) = capacity {
        config = config.with_capacity_limit(capacity);
    }
    if skip_index {
        config = config.with_skip_index(true);
    }

    let list = LinkedList::from_values(values, config).map_err(|e| e.to_string())?;
    let report = list
        .verify()
        .map_err(|e| format!("List failed its audit: {}", e))?;

    println!("{}", list);
    println!();
    section_top("LIST");
    field("len", &display::format_count(report.len));
    let capacity = list
        .capacity()
        .map_or_else(|| "unbounded".to_string(), display::format_count);
    field("capacity", &capacity);
    field("full", if list.is_full() { "yes" } else { "no" });
    field("checkpoints", &display::format_count(report.checkpoints));
    section_bot();
    Ok(())
}
