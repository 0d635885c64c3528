use serde::{Deserialize, Serialize};

/// A listing agent.
///
/// Agents are read-only in this service: there is no agent-creation flow,
/// rows are provisioned out of band (or come from the fallback dataset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Store-generated identifier
    pub id: i64,

    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub image_url: Option<String>,
    pub specialization: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

impl Agent {
    /// Full display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let agent = Agent {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            phone: "(123) 456-7890".to_string(),
            email: "john.smith@example.com".to_string(),
            image_url: None,
            specialization: None,
            location: None,
            bio: None,
        };
        assert_eq!(agent.full_name(), "John Smith");
    }
}
