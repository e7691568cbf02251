use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "autoscription-whitelist")]
#[command(about = "Allow-list lookup service for autoscription users")]
pub struct Args {
    // Address to bind to
    #[arg(long, env = "WHITELIST_HOST", default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "WHITELIST_PORT", default_value_t = 8080)]
    pub port: u16,

    // tracing filter, e.g. "info" or "autoscription_whitelist=debug"
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Args {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
