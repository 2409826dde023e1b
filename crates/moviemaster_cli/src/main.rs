//! MovieMaster server entry point.
//!
//! # Responsibility
//! - Resolve configuration and initialize logging.
//! - Load the seed file into the store, then serve HTTP until Ctrl-C.

mod config;

use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use moviemaster_core::{
    init_logging, load_seed_file, InMemoryMovieRepository, MovieService, MovieStore,
};
use tokio::net::TcpListener;

use crate::config::{Args, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::resolve(Args::parse(), |name| std::env::var(name).ok())?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let started_at = Instant::now();
    let records = load_seed_file(&config.seed)?;
    let store = Arc::new(MovieStore::from_records(records)?);
    info!(
        "event=startup module=cli status=ok seed={} movies={} duration_ms={}",
        config.seed.display(),
        store.len(),
        started_at.elapsed().as_millis()
    );

    let service = Arc::new(MovieService::new(InMemoryMovieRepository::new(store)));
    let app = moviemaster_api::router(service);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(
        "event=listen module=cli status=ok addr={}",
        listener.local_addr()?
    );

    moviemaster_api::serve(listener, app, shutdown_signal()).await?;
    info!("event=shutdown module=cli status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=shutdown_signal module=cli status=error error={err}");
        std::future::pending::<()>().await;
    }
}
