//! Benchmark runner for the multiplication chain.

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

use matmul_chain::{ChainConfig, Error, Matrix, Method, chain, multiply};

/// Chained matrix multiplication benchmark.
///
/// Generates two SIZE x SIZE matrices, performs NUM_MATRICES - 1 chained
/// multiplications with the selected METHOD, then prints the elapsed time
/// in milliseconds followed by the final matrix.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Execution strategy: U (unthreaded), R (one worker per row),
    /// E (one worker per element). Unknown values fall back to U.
    method: String,

    /// Number of matrices in the chain; NUM_MATRICES - 1 multiplications
    /// are performed.
    num_matrices: usize,

    /// Dimension of the square matrices.
    size: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    let config = ChainConfig {
        method: Method::parse(&args.method),
        num_matrices: args.num_matrices,
        size: args.size,
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Time the full chain on a bounded worker pool and print the result.
fn run(config: &ChainConfig) -> Result<(), Error> {
    let pool = rayon::ThreadPoolBuilder::new()
        .thread_name(|i| format!("matmul-worker-{i}"))
        .build()?;

    // One untimed multiply so the timed chain doesn't pay first-touch
    // costs. The product is discarded.
    let warm_left = Matrix::generated(config.size)?;
    let warm_right = Matrix::generated(config.size)?;
    pool.install(|| multiply(config.method, &warm_left, &warm_right))?;

    let start = Instant::now();
    let result = pool.install(|| chain::run(config))?;
    let elapsed = start.elapsed();

    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    println!("{elapsed_ms:.2} ms");
    print!("{result}");

    let multiplications = config.num_matrices.saturating_sub(1);
    let flops = 2.0 * (config.size as f64).powi(3) * multiplications as f64;
    let gflops = if elapsed.as_secs_f64() > 0.0 {
        flops / elapsed.as_secs_f64() / 1e9
    } else {
        0.0
    };
    info!(
        method = ?config.method,
        size = config.size,
        multiplications,
        elapsed_ms,
        gflops,
        "chain complete"
    );

    Ok(())
}
