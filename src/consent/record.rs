use serde::{Deserialize, Serialize};

/// A visitor's stored decision on cookie categories. Necessary cookies are
/// always on; only the analytics category is actually a choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub necessary: bool,
    pub analytics: bool,
}

impl ConsentRecord {
    pub fn with_analytics(analytics: bool) -> Self {
        ConsentRecord {
            necessary: true,
            analytics,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("consent record serializes")
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Default for ConsentRecord {
    fn default() -> Self {
        ConsentRecord::with_analytics(false)
    }
}
