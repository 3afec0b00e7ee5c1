use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref API_CALLS: Counter = Counter::new(
        "api_calls_total",
        "Total number of API calls"
    ).unwrap();

    pub static ref API_ERRORS: Counter = Counter::new(
        "api_errors_total",
        "Total number of failed API calls"
    ).unwrap();

    pub static ref REFRESH_CYCLES: Counter = Counter::new(
        "refresh_cycles_total",
        "Total number of refresh cycles run"
    ).unwrap();

    pub static ref FETCH_LATENCY: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "fetch_latency_seconds",
            "Quote fetch latency in seconds"
        ).buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 15.0])
    ).unwrap();
}

pub fn init() -> Result<(), prometheus::Error> {
    REGISTRY.register(Box::new(API_CALLS.clone()))?;
    REGISTRY.register(Box::new(API_ERRORS.clone()))?;
    REGISTRY.register(Box::new(REFRESH_CYCLES.clone()))?;
    REGISTRY.register(Box::new(FETCH_LATENCY.clone()))?;
    Ok(())
}
