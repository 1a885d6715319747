#![doc(test(attr(deny(warnings))))]

//! Cashflow Core offers future-entry, reconciliation, and weekly projection
//! primitives that power cash-flow views in personal-finance frontends.

pub mod errors;
pub mod projection;
pub mod schedule;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Core tracing initialized.");
    });
}
