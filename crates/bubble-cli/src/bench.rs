//! Throughput comparison of the bubble sort policies against std.

use std::time::{Duration, Instant};

use bubble_core::{is_sorted, BubbleSorter, PassPolicy, Sorter, StdSorter, StdUnstableSorter};
use serde::Serialize;
use tracing::debug;

use crate::config::BenchConfig;

#[derive(Debug, Serialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub ops: u64,
    pub total_ms: f64,
    pub ops_per_second: f64,
    pub correct: bool,
}

#[derive(Debug, Serialize)]
pub struct FullResults {
    pub sizes: Vec<usize>,
    pub results: Vec<BenchmarkResult>,
    pub correctness: bool,
}

pub fn sorters() -> Vec<Box<dyn Sorter<i32>>> {
    vec![
        Box::new(BubbleSorter::new(PassPolicy::Full)),
        Box::new(BubbleSorter::new(PassPolicy::EarlyExit)),
        Box::new(StdSorter),
        Box::new(StdUnstableSorter),
    ]
}

pub fn verify_correctness(sorter: &dyn Sorter<i32>, cases: &[Vec<i32>]) -> bool {
    cases.iter().all(|case| {
        let mut data = case.clone();
        sorter.sort(&mut data);
        is_sorted(&data)
    })
}

/// Sort every case repeatedly for `run_ms`, after a short warmup.
/// Returns the number of sorts performed and the elapsed milliseconds.
fn measure(sorter: &dyn Sorter<i32>, cases: &[Vec<i32>], warmup_ms: u64, run_ms: u64) -> (u64, f64) {
    let warmup_end = Instant::now() + Duration::from_millis(warmup_ms);
    while Instant::now() < warmup_end {
        for case in cases.iter().take(3) {
            let mut data = case.clone();
            sorter.sort(std::hint::black_box(&mut data));
        }
    }

    let mut ops = 0u64;
    let start = Instant::now();
    let end = start + Duration::from_millis(run_ms);
    // At least one full round, even when run_ms is zero.
    loop {
        for case in cases {
            let mut data = case.clone();
            sorter.sort(std::hint::black_box(&mut data));
            ops += 1;
        }
        if Instant::now() >= end {
            break;
        }
    }
    (ops, start.elapsed().as_secs_f64() * 1000.0)
}

pub fn run(config: &BenchConfig, cases: &[Vec<i32>]) -> FullResults {
    let mut results = Vec::new();
    let mut all_correct = true;

    for sorter in sorters() {
        let correct = verify_correctness(sorter.as_ref(), cases);
        all_correct &= correct;
        let (ops, total_ms) = measure(sorter.as_ref(), cases, config.warmup_ms, config.run_ms);
        debug!(name = sorter.name(), ops, total_ms, correct, "benchmarked");
        results.push(BenchmarkResult {
            name: sorter.name().to_string(),
            ops,
            total_ms,
            ops_per_second: ops_per_second(ops, total_ms),
            correct,
        });
    }

    FullResults {
        sizes: config.sizes.clone(),
        results,
        correctness: all_correct,
    }
}

/// Zero when no time was measured.
fn ops_per_second(ops: u64, total_ms: f64) -> f64 {
    if total_ms > 0.0 {
        ops as f64 / (total_ms / 1000.0)
    } else {
        0.0
    }
}

pub fn print_table(full: &FullResults, case_count: usize) {
    let sizes: Vec<String> = full.sizes.iter().map(|s| s.to_string()).collect();
    println!(
        "Bubble Benchmark ({case_count} inputs, sizes {})",
        sizes.join(", ")
    );
    println!("{}", "─".repeat(66));
    for r in &full.results {
        print_bench_row(&r.name, r.ops, r.total_ms, r.correct);
    }
    println!("{}", "─".repeat(66));
    println!(
        "Platform: {}-{}",
        std::env::consts::ARCH,
        std::env::consts::OS
    );
}

fn print_bench_row(label: &str, ops: u64, total_ms: f64, correct: bool) {
    let per_op = total_ms / ops as f64;
    let (total_str, per_str) = (format_duration(total_ms), format_duration(per_op));
    let mark = if correct { "ok" } else { "WRONG" };
    println!(
        "{:<20} {:>8} ops {:>12} {:>12}/op  {}",
        label, ops, total_str, per_str, mark
    );
}

pub fn format_duration(ms: f64) -> String {
    if ms < 0.001 {
        format!("{:.1} ns", ms * 1_000_000.0)
    } else if ms < 1.0 {
        format!("{:.1} µs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{:.1} ms", ms)
    } else {
        format!("{:.2} s", ms / 1000.0)
    }
}
