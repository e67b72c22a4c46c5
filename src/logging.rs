use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub json: bool,
    /// Log destination. Without one, logs go to stderr unless `quiet` is set.
    pub file: Option<PathBuf>,
    /// Drop logs that have no file to go to. Set while the TUI owns the terminal.
    pub quiet: bool,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "inventory_builder=debug"
    } else {
        "inventory_builder=info"
    }
}

pub fn init_tracing(options: &LogOptions) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(options.verbose).into());

    let (writer, ansi) = match &options.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if options.quiet => (BoxMakeWriter::new(std::io::sink), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let layer = if options.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "inventory_builder=info");
        assert_eq!(default_directive(true), "inventory_builder=debug");
    }
}
