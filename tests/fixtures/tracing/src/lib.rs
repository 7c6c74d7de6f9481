//! Tracing subscriber fixture for integration tests.

use rstest::fixture;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Marker for an installed subscriber.
pub struct Tracing;

/// Installs a stderr subscriber once per test binary, `RUST_LOG` defaults to `matrix_lib=debug`.
#[fixture]
#[once]
pub fn tracing() -> Tracing {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "matrix_lib=debug");
    }

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let filter_layer = EnvFilter::from_default_env();

    tracing_subscriber::registry().with(filter_layer).with(fmt_layer).init();

    Tracing
}
