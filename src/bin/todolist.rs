//! Runs the interactive project and task menu on standard input and output.
//!
//! Usage:
//!
//! ```text
//! todolist
//! ```
//!
//! Limits are read from the environment, with a `.env` file in the working
//! directory consulted first:
//!
//! ```text
//! MAX_NUMBER_OF_PROJECT=5
//! MAX_NUMBER_OF_TASK=10
//! MAX_NAME_LENGTH=30
//! MAX_DESCRIPTION_LENGTH=150
//! ```
//!
//! Diagnostics go to standard error and are filtered through `RUST_LOG`,
//! defaulting to warnings only.

use std::io;
use std::sync::Arc;

use eyre::WrapErr;
use todolist::cli::{Menu, Services};
use todolist::config::TodoConfig;
use todolist::project::adapters::memory::InMemoryProjectRepository;
use todolist::task::adapters::memory::InMemoryTaskRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TodoConfig::from_env();
    tracing::debug!(
        max_projects = config.max_projects(),
        max_tasks = config.max_tasks(),
        "loaded limits"
    );

    let services = Services::new(
        Arc::new(InMemoryProjectRepository::new()),
        Arc::new(InMemoryTaskRepository::new()),
        config,
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&services, stdin.lock(), stdout.lock())
        .run()
        .wrap_err("menu terminated on an i/o error")
}
