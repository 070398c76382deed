
use std::env;
use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs a global `tracing` subscriber writing through the test harness, filtered by
/// `RUST_LOG` (defaulting to `ordered_tree=trace`). Safe to call from every test.
pub(crate) fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter = match env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) => EnvFilter::new("ordered_tree=trace"),
        };

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_test_writer()
                .with_filter(env_filter),
        );

        if tracing::dispatcher::has_been_set() {
            debug!("Tracing subscriber already set");
        } else {
            subscriber.try_init().unwrap_or_else(|e| {
                eprintln!("Error: Failed to set up logging: {}", e);
            });
        }
    });
}
