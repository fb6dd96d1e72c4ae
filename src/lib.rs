#![doc(test(attr(deny(warnings))))]

//! Forecast Core offers the pure balance-projection and balance-input
//! primitives behind the household finance forecasting app. Request
//! handlers fetch accounts, recurring items, and scenarios from storage
//! and hand them to this crate as plain values; everything here is
//! deterministic and side-effect free.

pub mod currency;
pub mod domain;
pub mod errors;
pub mod forecast;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Forecast Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
