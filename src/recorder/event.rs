use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One license-registration record. Built once per invocation, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseEvent {
    pub name: String,
    pub email: String,
    pub product: String,
    pub cluster_id: String,
    /// RFC 3339 UTC timestamp; stamped at construction when not supplied.
    #[serde(default = "now_rfc3339")]
    pub timestamp: String,
}

impl LicenseEvent {
    pub fn new(name: String, email: String, product: String, cluster_id: String) -> Self {
        Self {
            name,
            email,
            product,
            cluster_id,
            timestamp: now_rfc3339(),
        }
    }

    /// The ordered 5-column tuple written to a tab, sequence first.
    pub fn row_values(&self, sequence: &str) -> Vec<String> {
        vec![
            sequence.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.cluster_id.clone(),
            self.timestamp.clone(),
        ]
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
