use ct_write_handler::config::{Config, InvokeFile};
use ct_write_handler::handler::{InvocationResult, RequestHandler};
use ct_write_handler::logs::MemoryLog;
use log::{Level, LevelFilter};
use serde_json::{json, Value};

#[test]
fn result_serializes_with_wire_field_names() {
    let log = MemoryLog::default();
    let result = RequestHandler::new(Config::default(), &log).handle();

    let wire: Value = serde_json::to_value(&result).unwrap();
    assert_eq!(wire["statusCode"], json!(200));

    let body: Value = serde_json::from_str(wire["body"].as_str().unwrap()).unwrap();
    assert_eq!(body, json!({ "message": "SUCCESS 🎉" }));

    let back: InvocationResult = serde_json::from_value(wire).unwrap();
    assert_eq!(back, result);
}

#[test]
fn settings_file_then_flags_drive_the_logged_level() {
    let file = InvokeFile::parse("[env]\nLOG_LEVEL = \"WARNING\"\n").unwrap();
    let flags = [("LOG_LEVEL".to_owned(), "DEBUG".to_owned())];

    let config = Config::from_sources(file, &flags, false);
    assert_eq!(config.level_filter(), LevelFilter::Debug);

    let log = MemoryLog::new(LevelFilter::Info);
    let result = RequestHandler::new(config, &log).handle();

    assert_eq!(result.status_code, 200);
    let records = log.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[0].message, "Log-level read from sysenv: DEBUG");
}

#[test]
fn handlers_share_nothing() {
    let first_log = MemoryLog::default();
    let second_log = MemoryLog::default();
    let first = RequestHandler::new(Config::new(Some("ERROR".to_owned())), &first_log);
    let second = RequestHandler::new(Config::new(None), &second_log);

    assert_eq!(first.handle(), second.handle());
    assert_eq!(first_log.records()[0].message, "Log-level read from sysenv: ERROR");
    assert_eq!(second_log.records()[0].message, "Log-level read from sysenv: INFO");
}
