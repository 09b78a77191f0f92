use dotenv::dotenv;
use std::env;

pub const DEFAULT_TICKET_FALLBACK: &str = "invalid ticket !!!";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub environment: Environment,
    pub log_filter: String,
    pub ticket_fallback: String,
}

const LOG_FILTER: &str = "PARK_LOG_FILTER";
const TICKET_FALLBACK: &str = "PARK_TICKET_FALLBACK";

impl Config {
    pub fn new(environment: Environment) -> Config {
        dotenv().ok();

        let log_filter = env::var(LOG_FILTER).unwrap_or_else(|_| match environment {
            Environment::Development => "debug".to_string(),
            _ => "info".to_string(),
        });

        let ticket_fallback =
            env::var(TICKET_FALLBACK).unwrap_or_else(|_| DEFAULT_TICKET_FALLBACK.to_string());

        Config {
            environment,
            log_filter,
            ticket_fallback,
        }
    }

    /// Installs the JSON logger using `log_filter` unless `RUST_LOG` is set
    pub fn setup_logging(&self) {
        park_logging::setup_logger_with(&self.log_filter);
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            environment: Environment::Production,
            log_filter: "info".to_string(),
            ticket_fallback: DEFAULT_TICKET_FALLBACK.to_string(),
        }
    }
}
