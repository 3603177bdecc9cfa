//! Synthetic workload generation for waybill logs.
//!
//! Reproduces the original workload shape: a burst of Register events
//! with strictly increasing timestamps and random distinct
//! origin/destination and sender/receiver pairs, followed by client,
//! parcel, warehouse-movement and congested-route query records drawn
//! over the elapsed time range. Deterministic for a fixed seed.

mod rng;

pub use rng::DeterministicRng;

use std::io::{self, Write};

/// Workload shape knobs, mirroring the original generator's flags.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// RNG seed.
    pub seed: u64,
    /// Number of warehouses routes are drawn between (must be ≥ 2).
    pub nodes: u64,
    /// Number of Register events (one per parcel).
    pub parcels: u64,
    /// Number of distinct client names.
    pub clients: u64,
    /// Mean inter-arrival gap between consecutive event timestamps.
    pub mean_gap: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            nodes: 10,
            parcels: 100,
            clients: 10,
            mean_gap: 10,
        }
    }
}

/// Client and parcel query records appended per run.
const POINT_QUERIES: u64 = 10;
/// Warehouse-movement and congested-route records appended per run.
const RANGE_QUERIES: u64 = 5;

/// Write one synthetic workload to `out`.
///
/// # Panics
///
/// Panics if `config.nodes < 2`; two distinct warehouses are needed to
/// draw a route.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn generate(config: &WorkloadConfig, out: &mut impl Write) -> io::Result<()> {
    assert!(config.nodes >= 2, "workload needs at least 2 warehouses");

    let mut rng = DeterministicRng::new(config.seed);
    let mut now: u64 = 1;

    for parcel in 0..config.parcels {
        let (origin, destination) = rng.distinct_pair(config.nodes);
        let (sender, receiver) = if config.clients > 1 {
            rng.distinct_pair(config.clients)
        } else {
            (0, 0)
        };
        now += rng.next_bounded(config.mean_gap) + 1;
        writeln!(
            out,
            "{now:07} EV RG {parcel:03} n{sender:05} n{receiver:05} {origin:03} {destination:03}"
        )?;
    }

    let client_queries = if config.clients > 0 { POINT_QUERIES } else { 0 };
    for _ in 0..client_queries {
        let ts = rng.next_bounded(now);
        let client = rng.next_bounded(config.clients);
        writeln!(out, "{ts:07} CL n{client:05}")?;
    }

    let parcel_queries = if config.parcels > 0 { POINT_QUERIES } else { 0 };
    for _ in 0..parcel_queries {
        let ts = rng.next_bounded(now);
        let parcel = rng.next_bounded(config.parcels);
        writeln!(out, "{ts:07} PC {parcel:03}")?;
    }

    for _ in 0..RANGE_QUERIES {
        let from = rng.next_bounded(now);
        let until = from + rng.next_bounded(now - from + 1);
        let warehouse = rng.next_bounded(config.nodes);
        writeln!(out, "{from:07} MA {from:07} {until:07} {warehouse:03}")?;
    }

    for _ in 0..RANGE_QUERIES {
        let ts = rng.next_bounded(now);
        writeln!(out, "{ts:07} RC")?;
    }

    Ok(())
}

/// Render one workload to a string, for tests and small runs.
///
/// # Panics
///
/// Panics if `config.nodes < 2`, as for [`generate`].
#[must_use]
pub fn generate_to_string(config: &WorkloadConfig) -> String {
    let mut buffer = Vec::new();
    generate(config, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("generated workload is ASCII")
}
