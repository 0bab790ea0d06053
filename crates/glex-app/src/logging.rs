//! Subscriber setup.
//!
//! Logging starts before the config is read so loader warnings are not lost.
//! The config's level is applied afterwards through a reload handle, unless
//! `--log-level` or `RUST_LOG` already chose the filter.

use glex_config::schema::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const CRATES: [&str; 5] = ["glex", "glex_app", "glex_common", "glex_config", "glex_renderer"];

/// Our crates at `level`, everything else (wgpu, winit) at warn.
pub fn default_directive(level: LogLevel) -> String {
    let mut directive = String::from("warn");
    for name in CRATES {
        directive.push(',');
        directive.push_str(name);
        directive.push('=');
        directive.push_str(level.as_str());
    }
    directive
}

/// Filter precedence: `--log-level`, then `RUST_LOG`, then `level`.
pub fn filter(cli: Option<&str>, level: LogLevel) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directive(level));
    match cli {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("glex: ignoring invalid --log-level {directive:?}: {e}");
            fallback()
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
    }
}

/// Whether `--log-level` or `RUST_LOG` chose the filter, so the config level
/// must not replace it.
fn filter_pinned(cli: Option<&str>, env_set: bool) -> bool {
    cli.is_some() || env_set
}

pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogHandle {
    pub fn apply_config_level(&self, level: LogLevel) {
        if self.pinned {
            return;
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(default_directive(level))) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }
}

pub fn init(cli: Option<&str>) -> LogHandle {
    let pinned = filter_pinned(cli, std::env::var_os(EnvFilter::DEFAULT_ENV).is_some());
    let (filter_layer, handle) = reload::Layer::new(filter(cli, LogLevel::default()));
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer())
        .init();
    LogHandle { handle, pinned }
}
