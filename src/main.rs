//! Sort Server
//!
//! Accepts CSV uploads over HTTP, benchmarks the five sorting algorithms on the
//! chosen numeric column and answers with the timings and the fastest one.
//!
//! Configuration comes from `sort-server.toml` (or the file named by
//! `SORT_SERVER_CONFIG`) and `SORT_SERVER_*` environment variables.

use anyhow::Context;
use csv_sort_bench::config::Config;
use csv_sort_bench::server;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let server = server::run(&config)
        .with_context(|| format!("binding {}:{}", config.host, config.port))?;
    server.await.context("server terminated")?;
    Ok(())
}
