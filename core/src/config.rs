//! Port resolution for the dev server target
//!
//! The port is resolved once per invocation with a strict precedence order:
//! environment override, then the first `VITE_PORT=` line of a local env file,
//! then a fixed default. Resolution is a pure function of its inputs; the
//! binary entry point gathers the env var and file contents and passes them in.

use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable consulted for a port override
pub const PORT_ENV_VAR: &str = "VITE_PORT";
/// Key looked up in the env file
pub const PORT_FILE_KEY: &str = "VITE_PORT";
/// Fallback port when neither the environment nor the env file provide one
pub const DEFAULT_PORT: &str = "5173";
/// Default env file location, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Resolve the port to probe
///
/// Precedence: a non-empty `env_override`, then the first matching
/// `VITE_PORT=value` line in `env_file`, then [`DEFAULT_PORT`]. The port stays
/// string-typed; no validation happens beyond non-emptiness.
pub fn resolve_port(env_override: Option<&str>, env_file: Option<&str>) -> String {
    if let Some(value) = env_override {
        let value = value.trim();
        if !value.is_empty() {
            return value.to_string();
        }
    }

    if let Some(contents) = env_file {
        if let Some(port) = port_from_env_file(contents) {
            return port;
        }
    }

    DEFAULT_PORT.to_string()
}

/// Extract the port from env file contents
///
/// Scans for the first line whose key is `VITE_PORT` and returns the value
/// trimmed of surrounding whitespace. A first match with an empty value counts
/// as no value at all, mirroring the upstream dev tooling's handling.
pub fn port_from_env_file(contents: &str) -> Option<String> {
    for line in contents.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.trim() != PORT_FILE_KEY {
            continue;
        }
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        return Some(value.to_string());
    }
    None
}

/// Best-effort read of the env file
///
/// A missing or unreadable file is not a failure here, only a fallthrough to
/// the next resolution step, so any I/O error maps to `None`.
pub fn read_env_file(path: impl AsRef<Path>) -> Option<String> {
    match fs::read_to_string(path.as_ref()) {
        Ok(contents) => Some(contents),
        Err(e) => {
            debug!("env file {:?} not consulted: {}", path.as_ref(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn override_wins_over_file_and_default() {
        let file = "VITE_PORT=4000\n";
        assert_eq!(resolve_port(Some("8080"), Some(file)), "8080");
    }

    #[test]
    fn override_is_trimmed() {
        assert_eq!(resolve_port(Some("  9090 "), None), "9090");
    }

    #[test]
    fn empty_override_falls_through_to_file() {
        assert_eq!(resolve_port(Some(""), Some("VITE_PORT=4000\n")), "4000");
        assert_eq!(resolve_port(Some("   "), Some("VITE_PORT=4000\n")), "4000");
    }

    #[test]
    fn file_value_is_trimmed() {
        assert_eq!(resolve_port(None, Some("VITE_PORT =  3001  \n")), "3001");
    }

    #[test]
    fn first_matching_line_wins() {
        let file = "OTHER=1\nVITE_PORT=4000\nVITE_PORT=5000\n";
        assert_eq!(resolve_port(None, Some(file)), "4000");
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let file = "VITE_PORT_EXTRA=1234\n# VITE_PORT=9999\nno equals sign here\n";
        assert_eq!(resolve_port(None, Some(file)), DEFAULT_PORT);
    }

    #[test]
    fn empty_file_value_falls_through_to_default() {
        assert_eq!(resolve_port(None, Some("VITE_PORT=\n")), DEFAULT_PORT);
        assert_eq!(resolve_port(None, Some("VITE_PORT=   \n")), DEFAULT_PORT);
    }

    #[test]
    fn no_inputs_yields_default() {
        assert_eq!(resolve_port(None, None), "5173");
    }

    #[test]
    fn read_env_file_missing_is_none() {
        let tmp = tempfile::tempdir().expect("tempdir");
        assert!(read_env_file(tmp.path().join("does-not-exist")).is_none());
    }

    #[test]
    fn read_env_file_roundtrip() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join(".env");
        let mut f = std::fs::File::create(&path).expect("create");
        writeln!(f, "VITE_PORT=4000").expect("write");

        let contents = read_env_file(&path).expect("should read");
        assert_eq!(port_from_env_file(&contents).as_deref(), Some("4000"));
    }
}
