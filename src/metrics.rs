use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("whitelist_requests_total", "Total number of lookup requests").unwrap();
    pub static ref WHITELIST_HITS: Counter =
        register_counter!("whitelist_hits_total", "Lookups that matched a listed user").unwrap();
    pub static ref WHITELIST_MISSES: Counter =
        register_counter!("whitelist_misses_total", "Lookups that matched nobody").unwrap();
    pub static ref INVALID_REQUESTS: Counter = register_counter!(
        "whitelist_invalid_requests_total",
        "Lookup requests with an unparseable body"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "whitelist_request_latency_seconds",
        "Lookup latency in seconds"
    )
    .unwrap();
}
