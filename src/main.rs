//! signup-form - a sign-up form with reactive validation
//!
//! Reads form edits from stdin, keeps the email, password, confirmation and
//! terms signals in sync, and prints the resulting widget state.

mod config;
mod console;
mod form;
mod presenter;
mod signal;

use anyhow::Result;
use config::FormConfig;
use console::ConsoleApp;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let (config, config_error) = match FormConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (FormConfig::default(), Some(err)),
    };

    // Initialize logging; stderr keeps logs out of the form output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(err) = config_error {
        tracing::warn!("Ignoring unreadable config: {err:#}");
    }

    let mut app = ConsoleApp::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
