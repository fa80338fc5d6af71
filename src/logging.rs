//! tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter directive for the given config level and `-v` count.
pub fn filter_directive(config_level: &str, verbose: u8) -> String {
    match verbose {
        0 => config_level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `directive`.
/// Output goes to stderr so stdout stays parseable.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("warn", 0), "warn");
        assert_eq!(filter_directive("warn", 1), "debug");
        assert_eq!(filter_directive("warn", 3), "trace");
    }
}
