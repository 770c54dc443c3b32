// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for tests that redirect the config and data directories.

use crate::config::CONFIG_DIR_ENV;
use crate::store::persistence::DATA_DIR_ENV;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Serializes tests that mutate the directory environment variables.
pub(crate) fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Runs `test` with both the config and data directories pointed at a
/// fresh temporary directory, restoring the previous environment after.
pub(crate) fn with_temp_dirs<F>(test: F)
where
    F: FnOnce(&Path),
{
    let _guard = env_lock().lock().expect("failed to lock env mutex");
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let previous_config = std::env::var(CONFIG_DIR_ENV).ok();
    let previous_data = std::env::var(DATA_DIR_ENV).ok();
    std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
    std::env::set_var(DATA_DIR_ENV, temp_dir.path());

    test(temp_dir.path());

    match previous_config {
        Some(value) => std::env::set_var(CONFIG_DIR_ENV, value),
        None => std::env::remove_var(CONFIG_DIR_ENV),
    }
    match previous_data {
        Some(value) => std::env::set_var(DATA_DIR_ENV, value),
        None => std::env::remove_var(DATA_DIR_ENV),
    }
}
