use park::config::*;
use std::env;

#[test]
fn config_defaults_and_overrides() {
    env::remove_var("PARK_LOG_FILTER");
    env::remove_var("PARK_TICKET_FALLBACK");

    let config = Config::new(Environment::Development);
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.ticket_fallback, DEFAULT_TICKET_FALLBACK);

    let config = Config::new(Environment::Production);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config, Config::default());

    env::set_var("PARK_LOG_FILTER", "park=trace");
    env::set_var("PARK_TICKET_FALLBACK", "no such ticket");
    let config = Config::new(Environment::Test);
    assert_eq!(config.environment, Environment::Test);
    assert_eq!(config.log_filter, "park=trace");
    assert_eq!(config.ticket_fallback, "no such ticket");
    config.setup_logging();

    let tickets = park::Tickets::new();
    assert_eq!(
        park::simple_ticket_status_with(&tickets, "x", &config.ticket_fallback),
        "no such ticket"
    );

    env::remove_var("PARK_LOG_FILTER");
    env::remove_var("PARK_TICKET_FALLBACK");
}
