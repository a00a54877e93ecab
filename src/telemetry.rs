// Logging setup for binaries and tests that embed the trip planner

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV_VAR: &str = "TRIP_PLANNER_LOG";
pub const DEFAULT_FILTER: &str = "trip_planner_mock=info";

static INIT: Once = Once::new();

// Filter from TRIP_PLANNER_LOG, falling back to trip_planner_mock=info; only the first call installs
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init()
            .ok();
    });
}
