mod check;
mod health;
mod metrics;


pub use check::check_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
