//! File logging setup.
//!
//! The game owns the terminal in raw mode, so log records never go to
//! stderr. With no log path the logger is simply not installed and every
//! `log` macro is a no-op.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install an `env_logger` writing to `path`, filtered by `RUST_LOG`
/// (default `info`).
pub fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_is_a_noop() {
        assert!(init_logging(None).is_ok());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = init_logging(Some("/nonexistent-dir/blockfall.log")).unwrap_err();
        assert!(err.to_string().contains("blockfall.log"));
    }
}
