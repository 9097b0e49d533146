//! The champion roster bundled into the app.

use serde::Deserialize;
use std::rc::Rc;
use tracing::error;

const ROSTER_JSON: &str = include_str!("../data/champions.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Champion {
    /// Route id, e.g. `ahri` in `/champion/ahri`
    pub id: String,
    pub name: String,
    pub title: String,
    pub role: String,
}

/// Champions bundled with the app, in display order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    champions: Rc<[Champion]>,
}

impl Roster {
    pub fn new(champions: Vec<Champion>) -> Self {
        Self {
            champions: champions.into(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Champion> {
        self.champions.iter().find(|champion| champion.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.champions.iter()
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

/// Parse the bundled roster.
///
/// # Errors
///
/// Fails only if the bundled JSON is malformed.
pub fn load_roster() -> Result<Roster, serde_json::Error> {
    serde_json::from_str(ROSTER_JSON).map(Roster::new)
}

/// The bundled roster, or an empty one if it cannot be parsed.
pub fn bundled_roster() -> Roster {
    load_roster().unwrap_or_else(|e| {
        error!(error = %e, "bundled roster is malformed");
        Roster::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_roster_parses() {
        let roster = load_roster().unwrap();

        assert!(!roster.is_empty());
        assert_eq!(roster.find("ahri").unwrap().name, "Ahri");
        assert!(roster.find("42").is_none());
    }

    #[test]
    fn test_roster_ids_are_unique() {
        let roster = load_roster().unwrap();
        let mut ids: Vec<&str> = roster.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), roster.len());
    }
}
