//! The function body: report the configured log level, answer with success.

use crate::config::Config;
use log::{Level, Log, Record};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const SUCCESS_MESSAGE: &str = "SUCCESS 🎉";

pub const STATUS_OK: u16 = 200;

/// What the host runtime receives back from one invocation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// JSON text, e.g. `{"message":"SUCCESS 🎉"}`.
    pub body: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl InvocationResult {
    pub fn success() -> Self {
        InvocationResult {
            // Compact, raw UTF-8. Callers compare the parsed value, not the bytes.
            body: json!({ "message": SUCCESS_MESSAGE }).to_string(),
            status_code: STATUS_OK,
        }
    }
}

/// Handles invocations with a configuration and logger fixed at construction.
#[derive(Clone)]
pub struct RequestHandler<'a> {
    config: Config,
    logger: &'a dyn Log,
}

impl<'a> RequestHandler<'a> {
    pub fn new(config: Config, logger: &'a dyn Log) -> Self {
        RequestHandler { config, logger }
    }

    /// Emits exactly one `Info` record and returns the fixed success result.
    pub fn handle(&self) -> InvocationResult {
        self.logger.log(
            &Record::builder()
                .level(Level::Info)
                .target(module_path!())
                .module_path_static(Some(module_path!()))
                .file_static(Some(file!()))
                .line(Some(line!()))
                .args(format_args!(
                    "Log-level read from sysenv: {}",
                    self.config.display_level()
                ))
                .build(),
        );

        InvocationResult::success()
    }
}
