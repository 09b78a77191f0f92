#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub use serde_json;

use chrono::{DateTime, Utc};
use env_logger::{Builder, Env};
use std::io::Write;

const DATETIME_FORMAT: &str = "[%Y-%m-%d][%H:%M:%S]";
const DEFAULT_FILTER: &str = "info";

#[derive(Serialize, Debug)]
struct LogEntry {
    level: String,
    #[serde(serialize_with = "custom_datetime_serializer")]
    time: DateTime<Utc>,
    target: String,
    message: String,
    #[serde(flatten)]
    meta: Option<serde_json::Value>,
}

fn custom_datetime_serializer<S>(x: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&x.format(DATETIME_FORMAT).to_string())
}

/// Writes a log line as a single JSON object.
///
/// `jlog!(Level::Info, "Visitor created")` produces
/// `{"level": "INFO", "target": "none", "message": "Visitor created"}`.
/// Metadata is flattened into the entry:
/// ```text
///   jlog!(Level::Warn, "park::visitors", "Rejected visitor parameters", {"errors": errors.to_string()})
/// ```
/// produces
/// `{"level": "WARN", "target": "park::visitors", "message": "Rejected visitor parameters", "errors": "..."}`
#[macro_export]
macro_rules! jlog {
    ($t:expr, $msg:expr) => {{
        $crate::transform_message($t, None, $msg, None)
    }};
    ($t:expr, $msg:expr, $json:tt) => {{
        let meta = $crate::serde_json::json!($json);
        $crate::transform_message($t, None, $msg, Some(meta))
    }};
    ($t:expr, $target:expr, $msg:expr, $json:tt) => {{
        let meta = $crate::serde_json::json!($json);
        $crate::transform_message($t, Some($target), $msg, Some(meta))
    }};
}

fn render(entry: &LogEntry) -> String {
    match serde_json::to_string(entry) {
        Ok(s) => s,
        Err(err) => format!(
            "Failed to serialize log entry: Error: {:?}, Entry: {:?}",
            err, entry
        ),
    }
}

pub fn transform_message(
    level: log::Level,
    target: Option<&str>,
    msg: &str,
    meta: Option<serde_json::Value>,
) {
    let inner = LogEntry {
        level: level.to_string(),
        target: target.unwrap_or("none").to_string(),
        time: Utc::now(),
        message: msg.trim().to_string(),
        meta,
    };
    match target {
        Some(t) => log!(target: t, level, "{}", render(&inner)),
        None => log!(level, "{}", render(&inner)),
    }
}

fn is_json(msg: &str) -> bool {
    msg.starts_with('{') && msg.ends_with('}')
}

pub fn setup_logger() {
    setup_logger_with(DEFAULT_FILTER)
}

/// Installs the JSON logger. `RUST_LOG` still wins over `default_filter`.
/// Calling this more than once keeps the first logger.
pub fn setup_logger_with(default_filter: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let msg = record.args().to_string();
            if is_json(&msg) {
                writeln!(buf, "{}", msg)
            } else {
                let entry = LogEntry {
                    level: record.level().to_string(),
                    time: Utc::now(),
                    target: record.target().to_string(),
                    message: msg.trim().to_string(),
                    meta: None,
                };
                writeln!(buf, "{}", render(&entry))
            }
        })
        .try_init();
}
