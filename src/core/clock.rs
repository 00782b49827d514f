use chrono::Utc;

/// Source of wall-clock time, in milliseconds since the Unix epoch.
///
/// Issuance and resolution share one instance so both sides read the same clock.
pub(crate) trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
