//! Environment variable management for testing
//!
//! Tests in one binary run on parallel threads but share the process
//! environment, so every guard holds a process-wide lock until dropped.

use std::env;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that snapshots one environment variable and restores it on drop
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Take the environment lock and remember the current value of `name`
  pub fn new(name: &str) -> Self {
    let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
      _lock: lock,
    }
  }

  /// Set the guarded variable
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the guarded variable
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
