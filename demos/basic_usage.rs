//! Basic facade usage
//!
//! Demonstrates context binding, interpolation, per-sink filtering, error
//! traces, and runtime re-configuration.
//!
//! Run with: cargo run --example basic_usage

use context_logger::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    // One facade per logical subsystem
    let http = ContextLogger::builder("HttpServer")
        .sink(Severity::Debug, ConsoleSink::new())
        .build()?;
    let db = ContextLogger::builder("Database")
        .sink(Severity::Warn, ConsoleSink::new())
        .build()?;

    http.log("listening on port %d", vec![FieldValue::from(8080)]);
    http.debug("worker pool size %d", vec![FieldValue::from(4)]);

    // Below the Database sink's Warn threshold, so this is dropped
    db.log("connection pool ready", vec![]);
    db.warn("slow query: %d ms", vec![FieldValue::from(1500)]);

    // Error traces: structured, text, or explicitly absent
    db.error(
        "query failed",
        Trace::structured([("code", json!(1205)), ("table", json!("orders"))]),
    );
    db.error("connection lost", Trace::Absent);

    // Runtime re-configuration, atomic relative to in-flight calls
    http.override_options(LoggerOptions::new().with_timestamp_format(TimestampFormat::UnixMillis));
    http.log("now with unix timestamps", vec![]);

    http.flush()?;
    db.flush()?;
    Ok(())
}
