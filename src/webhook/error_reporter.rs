use std::error::Error;

use strum_macros::Display;
use tracing::{error, warn};

use crate::bots::errors::Cancelled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSource {
    ParseUpdate,
    HandleUpdate,
}

pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut chain = Vec::new();
    let mut source = error.source();

    while let Some(err) = source {
        chain.push(format!("  Caused by: {err}"));
        source = err.source();
    }

    if chain.is_empty() {
        String::new()
    } else {
        format!("\nError chain:\n{}", chain.join("\n"))
    }
}

pub fn report_error(error: &(dyn Error + 'static), source: ErrorSource) {
    // Updates that arrive during shutdown are expected to be dropped.
    if error.is::<Cancelled>() {
        warn!(source = %source, "Update dropped: {error}");
        return;
    }

    error!(source = %source, "{error:?}{}", error_chain(error));
}
