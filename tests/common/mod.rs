//! Common test utilities and fixtures shared by the integration tests

#![allow(dead_code)]

pub mod fixtures;

use chrono::{DateTime, Duration, Utc};
use dex::utils::clock::Clock;
use std::path::PathBuf;
use std::sync::{Mutex, Once};
use tracing::Level;

static INIT: Once = Once::new();

/// Initialize tracing once per test binary
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

/// A clock the test moves forward by hand
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// A database path in the temp directory unique to this process and test name
pub fn temp_db_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("dex-{}-{}.db", std::process::id(), name));
    let _ = std::fs::remove_file(&path);
    path
}
