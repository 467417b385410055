//! Observability: structured logging.

pub mod logging;
