//! Operator-facing progress output.

use super::pipeline::ProgressEvent;

/// Prints page sizes and inserted names to stdout; skips go to the log.
pub(crate) fn print_event(event: &ProgressEvent) {
    match event {
        ProgressEvent::PageFetched { page, listings } => {
            tracing::debug!(page, listings, "processing page");
            println!("Number of places: {listings}");
        }
        ProgressEvent::Inserted { name } => println!("Inserted: {name}"),
        ProgressEvent::Skipped {
            name,
            address,
            reason,
        } => tracing::info!(%name, %address, %reason, "skipped listing"),
    }
}
