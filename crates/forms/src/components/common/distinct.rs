/// Suppresses consecutive values whose comparison keys are equal.
///
/// The guard remembers the key of the last value it saw. A value passes only
/// when its key differs from that key; either way the key becomes the new
/// last-seen key.
#[derive(Debug, Clone, Default)]
pub struct DistinctUntilChanged {
    last_key: Option<String>,
}

impl DistinctUntilChanged {
    /// Creates a guard that already considers `key` as seen.
    pub fn seeded(key: impl Into<String>) -> Self {
        Self { last_key: Some(key.into()) }
    }

    /// Returns `true` when `key` differs from the last seen key.
    pub fn admit(&mut self, key: String) -> bool {
        if self.last_key.as_deref() == Some(key.as_str()) {
            return false;
        }
        self.last_key = Some(key);
        true
    }

    /// Records `key` as seen without admitting anything.
    pub fn seed(&mut self, key: impl Into<String>) {
        self.last_key = Some(key.into());
    }
}
