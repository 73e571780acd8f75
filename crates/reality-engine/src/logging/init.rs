use std::sync::Once;

/// How much of the graphics stack's own diagnostics to let through.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum GpuVerbosity {
    /// Every message, including informational driver notices.
    All,
    /// Warnings and errors only.
    #[default]
    Warnings,
    /// Nothing from the graphics crates.
    Off,
}

/// Targets whose level `GpuVerbosity` controls.
const GPU_TARGETS: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "reality_engine=debug"). When absent, `RUST_LOG` is used, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub gpu_verbosity: GpuVerbosity,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            gpu_verbosity: GpuVerbosity::default(),
        }
    }
}

impl LoggingConfig {
    /// Builds the full filter string; later directives win in `env_logger`.
    fn filters(&self, rust_log: Option<String>) -> String {
        let base = self
            .env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| "info".to_string());

        let level = match self.gpu_verbosity {
            GpuVerbosity::All => "trace",
            GpuVerbosity::Warnings => "warn",
            GpuVerbosity::Off => "off",
        };

        let mut filters = base;
        for target in GPU_TARGETS {
            filters.push_str(&format!(",{target}={level}"));
        }
        filters
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filters = config.filters(std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filters)
            .write_style(config.write_style)
            .init();

        log::debug!("logging initialized ({filters})");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_rust_log() {
        let cfg = LoggingConfig {
            env_filter: Some("debug".into()),
            ..Default::default()
        };
        let f = cfg.filters(Some("error".into()));
        assert!(f.starts_with("debug,"));
    }

    #[test]
    fn rust_log_then_info_default() {
        let cfg = LoggingConfig::default();
        assert!(cfg.filters(Some("error".into())).starts_with("error,"));
        assert!(cfg.filters(None).starts_with("info,"));
    }

    #[test]
    fn gpu_targets_follow_verbosity() {
        let cfg = LoggingConfig {
            gpu_verbosity: GpuVerbosity::Off,
            ..Default::default()
        };
        assert_eq!(
            cfg.filters(None),
            "info,wgpu_core=off,wgpu_hal=off,naga=off"
        );

        let cfg = LoggingConfig {
            gpu_verbosity: GpuVerbosity::All,
            ..Default::default()
        };
        assert!(cfg.filters(None).ends_with("naga=trace"));
    }
}
