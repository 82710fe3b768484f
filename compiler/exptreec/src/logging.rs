//! Tracing subscriber setup for the binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs print only
/// results. Output goes to stderr as an indented span tree:
///
/// - `RUST_LOG=debug`: one event per pipeline stage.
/// - `RUST_LOG=exptree_parse=trace`: every shunting-yard and tree-building step.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os("RUST_LOG").is_some() {
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
