use serde::{Deserialize, Serialize};

/// Serialization context the host passes through when compiling a task
/// into a persisted template.
///
/// The flytectl renders are pure functions of the task configuration and
/// this context; placeholder substitution (run inputs, output prefix)
/// stays with the host runtime at dispatch time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializationSettings {
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub version: String,
}

impl SerializationSettings {
    pub fn new(
        project: impl Into<String>,
        domain: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            domain: domain.into(),
            version: version.into(),
        }
    }
}
