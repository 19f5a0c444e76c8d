use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, Encoder, HistogramVec, IntCounter,
    IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static BOOK_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "bookstore_book_operations_total",
        "Book operations handled, by operation",
        &["operation"]
    )
    .expect("register book_operations_total")
});

pub static BOOK_NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "bookstore_book_not_found_total",
        "Requests answered with 404 because the book does not exist"
    )
    .expect("register book_not_found_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "bookstore_store_errors_total",
        "Store failures surfaced as 500"
    )
    .expect("register store_errors_total")
});

pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "bookstore_request_duration_seconds",
        "Book handler duration in seconds",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register request_duration")
});

/// Count one call of `operation` and time it until the returned timer drops.
pub fn observe(operation: &str) -> prometheus::HistogramTimer {
    BOOK_OPERATIONS_TOTAL.with_label_values(&[operation]).inc();
    REQUEST_DURATION.with_label_values(&[operation]).start_timer()
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_operations_show_up_in_exposition() {
        drop(observe("unit_test_op"));
        BOOK_NOT_FOUND_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("bookstore_book_operations_total{operation=\"unit_test_op\"}"));
        assert!(body.contains("bookstore_request_duration_seconds_bucket"));
        assert!(body.contains("bookstore_book_not_found_total"));
    }
}
