use serde::{Deserialize, Serialize};

/// Started build.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StartedBuild {
    /// Build identifier, as `<build name>:<build id>`.
    pub id: String,
    /// Log deep-link template.
    pub log_deep_link: String,
}

impl StartedBuild {
    /// Split the identifier into build name and build id.
    ///
    /// An identifier without separator is a build name with an empty id.
    pub fn split_id(&self) -> (&str, &str) {
        self.id.split_once(':').unwrap_or((self.id.as_str(), ""))
    }
}
