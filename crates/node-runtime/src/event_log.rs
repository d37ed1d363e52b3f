//! Streams committed ledger events to the log.

use jobchain_telemetry::log_event;
use shared_bus::{EventFilter, EventStream, InMemoryEventBus, LedgerEvent};
use tokio::task::JoinHandle;
use tokio_stream::StreamExt;

const SUBSYSTEM: &str = "node-runtime";

/// Subscribe to every ledger event and log it until the bus closes.
pub fn spawn_event_logger(bus: &InMemoryEventBus) -> JoinHandle<u64> {
    tokio::spawn(drain(bus.event_stream(EventFilter::all())))
}

/// Log events until the bus closes. Returns how many were logged.
async fn drain(mut events: EventStream) -> u64 {
    let mut logged = 0u64;
    while let Some(event) = events.next().await {
        log_ledger_event(&event);
        logged += 1;
    }
    log_event!(debug, SUBSYSTEM, "Event bus closed", logged = logged);
    logged
}

fn log_ledger_event(event: &LedgerEvent) {
    match event {
        LedgerEvent::ListerAuthorized { lister } => {
            log_event!(info, SUBSYSTEM, "Lister authorized", lister = %lister);
        }
        LedgerEvent::JobListingCreated { listing_id, poster, .. } => {
            log_event!(info, SUBSYSTEM, "Job listing created", listing_id = listing_id, poster = %poster);
        }
        LedgerEvent::JobListingDeleted {
            listing_id,
            removed_reviews,
        } => {
            log_event!(
                info,
                SUBSYSTEM,
                "Job listing deleted",
                listing_id = listing_id,
                removed_reviews = removed_reviews
            );
        }
        other => {
            log_event!(info, SUBSYSTEM, "Ledger event", event = other.name(), topic = ?other.topic());
        }
    }
}
