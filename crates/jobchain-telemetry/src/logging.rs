//! Structured logging helpers.
//!
//! Every ledger log line carries a `subsystem` field; listing and review
//! lines also carry their id so they can be grepped and joined.

/// Helper to create structured log entries with consistent formatting.
#[macro_export]
macro_rules! log_event {
    // Info level with subsystem
    (info, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Warn level with subsystem
    (warn, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Error level with subsystem
    (error, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Debug level with subsystem
    (debug, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a listing-related event with standard fields.
#[macro_export]
macro_rules! log_listing_event {
    ($level:ident, $subsystem:expr, $msg:expr, $listing_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            listing_id = $listing_id,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a review-related event with standard fields.
#[macro_export]
macro_rules! log_review_event {
    ($level:ident, $subsystem:expr, $msg:expr, $review_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            review_id = $review_id,
            $($($field)*,)?
            $msg
        )
    };
}
