use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type of a single named input or output field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Boolean,
}

/// Typed input/output declaration a task registers with the host's
/// interface registry. BTreeMap keeps the serialized form deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInterface {
    pub inputs: BTreeMap<String, FieldKind>,
    pub outputs: BTreeMap<String, FieldKind>,
}

impl TaskInterface {
    /// The fixed `{command: string} -> {success: bool}` shape every
    /// flytectl task declares.
    pub fn command_shape() -> Self {
        let mut inputs = BTreeMap::new();
        inputs.insert("command".to_string(), FieldKind::String);
        let mut outputs = BTreeMap::new();
        outputs.insert("success".to_string(), FieldKind::Boolean);
        Self { inputs, outputs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_shape() {
        let interface = TaskInterface::command_shape();
        assert_eq!(interface.inputs.len(), 1);
        assert_eq!(interface.inputs.get("command"), Some(&FieldKind::String));
        assert_eq!(interface.outputs.len(), 1);
        assert_eq!(interface.outputs.get("success"), Some(&FieldKind::Boolean));
    }

    #[test]
    fn test_serialized_field_kinds_are_lowercase() {
        let json = serde_json::to_string(&TaskInterface::command_shape()).unwrap();
        assert_eq!(
            json,
            r#"{"inputs":{"command":"string"},"outputs":{"success":"boolean"}}"#
        );
    }
}
