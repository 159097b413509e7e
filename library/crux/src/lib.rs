//! Crux - algebraic containers and structural pattern matching.
//!
//! Re-exports [`crux_adt`] (`Maybe`, `Outcome`, `AsyncOutcome`) and
//! [`crux_match`] (`match_on`, patterns, matchers), plus a [`prelude`] for
//! glob import.
//!
//! ```text
//! use crux::prelude::*;
//!
//! let label = match_on(&Value::from("message"))
//!     .with(200, |_| "ok")
//!     .with("message", |_| "recv")
//!     .exhaust()?;
//! ```

use std::sync::Once;

pub use crux_adt::{
    expectation_failed, to_async_outcome, value_absent, value_not_failure, value_not_success,
    AsyncOutcome, ExtractError, ExtractErrorKind, ExtractResult, IntoAsyncOutcome, Maybe, Outcome,
    Settler,
};
pub use crux_match::{
    match_on, no_pattern_matched, p, unsupported_pattern, Heap, Matchable, MatchError,
    MatchErrorKind, MatchResult, Matcher, MaybeMatcher, MaybeNoneArm, MaybeSomeArm, OutcomeErrArm,
    OutcomeMatcher, OutcomeOkArm, Pattern, Predicate, Shape, ShapeKind, Value,
};

/// Everything needed to build and match containers.
pub mod prelude {
    pub use crate::{
        match_on, p, AsyncOutcome, IntoAsyncOutcome, Maybe, Outcome, Pattern, Shape, Value,
    };
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=crux_match=trace`; set `CRUX_LOG_TREE` for
/// indented span output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("CRUX_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
