//! Cosmetic response delays
//!
//! The mock answers instantly by default. [`SimulatedLatency::realistic`]
//! paces each operation roughly like a round trip to the real platform,
//! which is handy for demos that show progress output.

use std::time::Duration;

/// Per-operation delay applied before a mock response is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub token: Duration,
    pub message: Duration,
    pub payment: Duration,
    pub user: Duration,
    pub oauth: Duration,
    pub ticket: Duration,
}

impl SimulatedLatency {
    /// No delays at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn realistic() -> Self {
        Self {
            token: Duration::from_millis(100),
            message: Duration::from_millis(200),
            payment: Duration::from_millis(300),
            user: Duration::from_millis(100),
            oauth: Duration::from_millis(200),
            ticket: Duration::from_millis(100),
        }
    }
}

pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
