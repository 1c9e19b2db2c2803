use crate::error::BoardcoreError;
use std::error::Error;

/// Format an error and its cause chain for display to the user
pub fn format_error_chain(error: &BoardcoreError) -> String {
    let mut output = format!("Error: {error}");

    let mut source = error.source();
    while let Some(cause) = source {
        output.push_str(&format!("\nCaused by: {cause}"));
        source = cause.source();
    }

    output
}
