//! State reference data.

/// The whitelist of states students may register addresses in.
///
/// Kept outside the domain so the list can come from real reference
/// data without touching validation logic.
pub struct StateStore {
    states: Vec<String>,
}

impl StateStore {
    pub fn seeded() -> Self {
        Self {
            states: vec!["VA".to_string(), "DC".to_string()],
        }
    }

    pub fn all(&self) -> &[String] {
        &self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_list() {
        let store = StateStore::seeded();
        assert_eq!(store.all(), &["VA".to_string(), "DC".to_string()]);
    }
}
