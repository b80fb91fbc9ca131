use serde::{Deserialize, Serialize};

/// Static configuration for a flytectl task: which admin service the CLI
/// talks to, and whether it connects without TLS.
///
/// The value is immutable once built; validity (a non-empty endpoint) is
/// enforced when a [`FlytectlTask`](crate::FlytectlTask) takes ownership of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlytectlConfig {
    pub admin_endpoint: String,
    #[serde(default)]
    pub insecure: bool,
}

impl FlytectlConfig {
    pub fn new(admin_endpoint: impl Into<String>) -> Self {
        Self {
            admin_endpoint: admin_endpoint.into(),
            insecure: false,
        }
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}
