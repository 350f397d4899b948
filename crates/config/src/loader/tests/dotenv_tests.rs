//! Tests for dotenv merge behavior.
//!
//! Responsibilities:
//! - Test that missing or disabled env files are silently ignored.
//! - Test that existing process variables win over file values.
//! - Test that invalid env files return errors without leaking secrets.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` and `#[serial]` to prevent cross-test contamination.
//! - Keys written by a file are declared in `temp_env::with_vars` so they are
//!   removed again when the test finishes.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::dotenv::merge_env_file;
use crate::loader::error::LoadError;

fn write_env_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_no_path_is_noop() {
    let _lock = env_lock().lock().unwrap();
    assert!(merge_env_file(None).is_ok());
}

#[test]
#[serial]
fn test_missing_env_file_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.env");

    temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
        assert!(
            merge_env_file(Some(path.as_path())).is_ok(),
            "Missing env file should be silently ignored"
        );
    });
}

#[test]
#[serial]
fn test_valid_env_file_is_merged() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(
        &temp_dir,
        "# comment\n_ENVLOADER_DOTENV_A=alpha\nexport _ENVLOADER_DOTENV_B=\"beta value\"\n",
    );

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_ENVLOADER_DOTENV_A", None),
            ("_ENVLOADER_DOTENV_B", None),
        ],
        || {
            merge_env_file(Some(path.as_path())).unwrap();
            assert_eq!(std::env::var("_ENVLOADER_DOTENV_A").unwrap(), "alpha");
            assert_eq!(std::env::var("_ENVLOADER_DOTENV_B").unwrap(), "beta value");
        },
    );
}

#[test]
#[serial]
fn test_existing_process_variable_wins() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "_ENVLOADER_DOTENV_KEEP=from-file\n");

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None),
            ("_ENVLOADER_DOTENV_KEEP", Some("from-process")),
        ],
        || {
            merge_env_file(Some(path.as_path())).unwrap();
            assert_eq!(
                std::env::var("_ENVLOADER_DOTENV_KEEP").unwrap(),
                "from-process"
            );
        },
    );
}

#[test]
#[serial]
fn test_invalid_env_file_returns_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "INVALID_LINE_WITHOUT_EQUALS");

    temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
        match merge_env_file(Some(path.as_path())) {
            Err(LoadError::EnvFileParse {
                path: err_path, ..
            }) => assert_eq!(err_path, path),
            Err(other) => panic!("Invalid env file should return EnvFileParse, got {}", other),
            Ok(_) => panic!("Invalid env file should return EnvFileParse, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_parse_error_does_not_leak_secrets() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let secret_value = "supersecret_token_12345";
    let path = write_env_file(
        &temp_dir,
        &format!(
            "_ENVLOADER_DOTENV_SECRET={}\nINVALID_LINE_WITHOUT_EQUALS",
            secret_value
        ),
    );

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_ENVLOADER_DOTENV_SECRET", None),
        ],
        || {
            let err = merge_env_file(Some(path.as_path())).unwrap_err();
            let error_string = err.to_string();
            assert!(
                !error_string.contains(secret_value),
                "Error message should NOT contain the secret value: {}",
                error_string
            );
            assert!(
                error_string.contains(".env"),
                "Error message should identify the file: {}",
                error_string
            );
            assert!(
                error_string.contains("DOTENV_DISABLED"),
                "Error should hint about DOTENV_DISABLED: {}",
                error_string
            );
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "INVALID_LINE_WITHOUT_EQUALS");

    for value in ["1", "true"] {
        temp_env::with_vars([("DOTENV_DISABLED", Some(value))], || {
            assert!(
                merge_env_file(Some(path.as_path())).is_ok(),
                "DOTENV_DISABLED={} should skip env file loading even if file is invalid",
                value
            );
        });
    }
}

#[test]
#[serial]
fn test_dotenv_disabled_other_values_not_disabled() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "INVALID_LINE_WITHOUT_EQUALS");

    temp_env::with_vars([("DOTENV_DISABLED", Some("false"))], || {
        match merge_env_file(Some(path.as_path())) {
            Err(LoadError::EnvFileParse { .. }) => {}
            Err(other) => panic!(
                "DOTENV_DISABLED=false should NOT disable env file loading, got {}",
                other
            ),
            Ok(_) => panic!("DOTENV_DISABLED=false should NOT disable env file loading, got Ok"),
        }
    });
}

#[cfg(unix)]
#[test]
#[serial]
fn test_io_error_on_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, "_ENVLOADER_DOTENV_PERM=value\n");

    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o000);
    fs::set_permissions(&path, permissions).unwrap();

    let result = temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("_ENVLOADER_DOTENV_PERM", None),
        ],
        || merge_env_file(Some(path.as_path())),
    );

    // Restore permissions for cleanup
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o644);
    fs::set_permissions(&path, permissions).unwrap();

    match &result {
        Err(LoadError::EnvFileIo { kind, .. }) => {
            assert!(
                matches!(
                    kind,
                    std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::Other
                ),
                "Expected PermissionDenied or Other, got {:?}",
                kind
            );
        }
        // Running as root can still read the file.
        Ok(_) => {}
        Err(other) => panic!("Expected EnvFileIo error, got {}", other),
    }
}
