//! Lox front end driver.
//!
//! Wires the phases together for the `lox` binary:
//! - [`commands`]: `scan`, `lex`, `parse`, `explain` and the REPL
//! - [`reporting`]: lexer and parser errors as terminal diagnostics
//!
//! Everything writes through caller-supplied writers so the commands can be
//! driven from tests as well as from `main`.

pub mod commands;
pub mod reporting;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once, and only when `RUST_LOG` is set.
///
/// Events go through an `EnvFilter` into a `tracing-tree` layer, which
/// indents spans so the phase a message came from is visible at a glance.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
