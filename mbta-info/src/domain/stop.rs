//! Stop types.

use std::fmt;

/// Stable external identifier of a stop (e.g. `"place-rugg"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        StopId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A physical station or platform. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Stable external identifier.
    pub id: StopId,
    /// Display name (e.g. `"Park Street"`).
    pub name: String,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>) -> Self {
        Stop {
            id,
            name: name.into(),
        }
    }

    /// Join key for matching stops across routes.
    ///
    /// Platforms that report the same name on different routes are the
    /// same station even when their ids differ, so transfer detection
    /// and trip planning match on the uppercase-normalized name.
    pub fn name_key(&self) -> String {
        self.name.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_key_normalizes_case() {
        let stop = Stop::new(StopId::new("place-pktrm"), "Park Street");
        assert_eq!(stop.name_key(), "PARK STREET");
    }

    #[test]
    fn same_name_different_id_share_a_key() {
        let inbound = Stop::new(StopId::new("70075"), "Downtown Crossing");
        let outbound = Stop::new(StopId::new("70076"), "Downtown Crossing");
        assert_ne!(inbound.id, outbound.id);
        assert_eq!(inbound.name_key(), outbound.name_key());
    }
}
