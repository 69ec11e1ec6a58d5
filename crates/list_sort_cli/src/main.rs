mod config;

use std::time::Instant;

use anyhow::{Result, ensure};
use bench::generate_keys;
use clap::Parser;
use list_sort::{ListArena, SortContext, algorithm_name, sort_list_with_ctx};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn init_tracing(dump: bool) {
    let filter = if dump {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(config.dump);

    let algo = config.algorithm.into();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let keys = generate_keys(config.distribution.into(), config.count, &mut rng);

    let mut arena = ListArena::with_capacity(keys.len());
    let list = arena.from_keys(keys.iter().copied());
    trace!(input = %arena.dump(&list), "generated list");

    let mut ctx = SortContext::default();
    let start = Instant::now();
    let sorted = sort_list_with_ctx(algo, &mut arena, list, &mut ctx);
    let elapsed = start.elapsed();
    trace!(output = %arena.dump(&sorted), "sorted list");

    let len = arena.len(&sorted);
    ensure!(
        len == keys.len(),
        "sorted list has {len} nodes, expected {}",
        keys.len()
    );
    ensure!(arena.is_ordered(&sorted), "sorted list is out of order");
    ensure!(
        ctx.pending_partitions() == 0 && ctx.stats.is_balanced(),
        "partition entries leaked: {:?}",
        ctx.stats
    );

    info!(
        algorithm = algorithm_name(algo),
        count = len,
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        splits = ctx.stats.splits,
        peak_pending = ctx.stats.peak_pending,
        "list sorted and verified"
    );
    Ok(())
}
