use std::sync::Once;

/// Used when neither `--log` nor `RUST_LOG` is given; the surface backend
/// logs every adapter probe at info.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn";

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once per process. `filter` uses the
/// `env_logger` directive syntax and wins over `RUST_LOG`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let directives = resolve_filter(filter, std::env::var("RUST_LOG").ok());
        env_logger::Builder::new().parse_filters(&directives).init();
        log::debug!("logging initialized with \"{}\"", directives);
    });
}

fn resolve_filter(explicit: Option<&str>, env: Option<String>) -> String {
    explicit
        .map(str::to_owned)
        .or(env)
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(
            resolve_filter(Some("segview=trace"), Some("warn".into())),
            "segview=trace"
        );
        assert_eq!(resolve_filter(None, Some("warn".into())), "warn");
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(Some("  "), None), DEFAULT_FILTER);
    }

    #[test]
    fn test_repeated_init_is_ignored() {
        init_logging(Some("segview=debug"));
        init_logging(None);
        assert!(INIT.is_completed());
    }
}
