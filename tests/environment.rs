//! Reads the real process environment, so everything runs inside one test.

use ct_write_handler::config::{Config, InvokeFile};
use std::env;

fn flag(key: &str, value: &str) -> (String, String) {
    (key.to_owned(), value.to_owned())
}

#[test]
fn process_environment_layers() {
    env::remove_var("LOG_LEVEL");
    assert_eq!(Config::from_env().log_level, None);
    assert_eq!(
        Config::from_sources(InvokeFile::default(), &[], true).log_level,
        None
    );

    env::set_var("LOG_LEVEL", "ERROR");
    assert_eq!(Config::from_env().display_level(), "ERROR");

    // inherited process value is the bottom layer
    assert_eq!(
        Config::from_sources(InvokeFile::default(), &[], true).display_level(),
        "ERROR"
    );
    // and ignored entirely with a clean environment
    assert_eq!(
        Config::from_sources(InvokeFile::default(), &[], false).log_level,
        None
    );

    let file = InvokeFile::parse("[env]\nLOG_LEVEL = \"DEBUG\"\n").unwrap();
    assert_eq!(
        Config::from_sources(file, &[], true).display_level(),
        "DEBUG"
    );

    let file = InvokeFile::parse("[env]\nLOG_LEVEL = \"DEBUG\"\n").unwrap();
    assert_eq!(
        Config::from_sources(file, &[flag("LOG_LEVEL", "WARN")], true).display_level(),
        "WARN"
    );

    env::set_var("LOG_LEVEL", "");
    assert_eq!(Config::from_env().log_level.as_deref(), Some(""));

    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("LOG_LEVEL", OsStr::from_bytes(b"DE\xffBUG"));
        assert_eq!(
            Config::from_env().log_level.as_deref(),
            Some("DE\u{fffd}BUG")
        );
    }

    env::remove_var("LOG_LEVEL");
}
