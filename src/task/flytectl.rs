use crate::task::ContainerTask;
use crate::task::config::FlytectlConfig;
use crate::task::error::{Result, TaskError};
use crate::task::interface::TaskInterface;
use crate::task::settings::SerializationSettings;
use serde_json::{Map, Value};

/// Task type identifier registered with the host engine
pub const FLYTECTL_TASK_TYPE: &str = "flytectl";

/// Image the host's container runtime pulls to execute the task
const CONTAINER_IMAGE: &str = "flytectl-task:latest";

// Shell body handed to the container entrypoint. `{{.inputs.command}}` and
// `{{.outputPrefix}}` are host-runtime placeholders, substituted at dispatch
// time. On a zero exit the pre-baked true.pb artifact is copied to the run's
// output prefix through the minio gateway; any failure along that chain falls
// back to copying false.pb straight to the object store.
const COMMAND_SCRIPT: &str = "flytectl {{.inputs.command}} \
    && aws --endpoint-url http://minio.flyte:9000 s3 cp /opt/true.pb {{.outputPrefix}}/outputs.pb \
    || aws s3 cp /opt/false.pb {{.outputPrefix}}/outputs.pb";

/// A containerized flytectl invocation, declared as a unit of work for the
/// host workflow engine.
///
/// The descriptor holds one [`FlytectlConfig`] and a fixed
/// `{command: string} -> {success: bool}` interface. It never runs anything
/// itself: [`custom`](ContainerTask::custom) feeds the host's task-template
/// serializer and [`command`](ContainerTask::command) emits the argument
/// vector the container runtime executes. Both renders are pure, so a
/// descriptor is safe to share across threads without coordination.
#[derive(Clone, Debug)]
pub struct FlytectlTask {
    name: String,
    config: FlytectlConfig,
    interface: TaskInterface,
}

impl FlytectlTask {
    /// Builds a task descriptor named `name` around `config`.
    ///
    /// Fails with [`TaskError::Configuration`] when the config is absent,
    /// its admin endpoint is empty, or the name is empty. Validation runs
    /// before anything else; no partially built descriptor escapes.
    pub fn new(name: impl Into<String>, config: Option<FlytectlConfig>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TaskError::Configuration(
                "task name is required".to_string(),
            ));
        }
        let config = config.ok_or_else(|| {
            TaskError::Configuration("configuration is required".to_string())
        })?;
        if config.admin_endpoint.is_empty() {
            return Err(TaskError::Configuration(
                "configuration requires a non-empty admin endpoint".to_string(),
            ));
        }
        Ok(Self {
            name,
            config,
            interface: TaskInterface::command_shape(),
        })
    }

    pub fn config(&self) -> &FlytectlConfig {
        &self.config
    }
}

impl ContainerTask for FlytectlTask {
    fn task_type(&self) -> &str {
        FLYTECTL_TASK_TYPE
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn container_image(&self) -> &str {
        CONTAINER_IMAGE
    }

    fn interface(&self) -> &TaskInterface {
        &self.interface
    }

    fn custom(&self, _settings: &SerializationSettings) -> Map<String, Value> {
        let mut custom = Map::new();
        custom.insert(
            "admin_endpoint".to_string(),
            Value::String(self.config.admin_endpoint.clone()),
        );
        custom.insert("insecure".to_string(), Value::Bool(self.config.insecure));
        custom
    }

    fn command(&self, _settings: &SerializationSettings) -> Vec<String> {
        // `-c` and the script body are separate argv entries.
        vec![
            "bash".to_string(),
            "-c".to_string(),
            COMMAND_SCRIPT.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> FlytectlConfig {
        FlytectlConfig::new("https://admin.example.com")
    }

    #[test]
    fn test_construction_succeeds_with_valid_config() {
        let task = FlytectlTask::new("t1", Some(config())).unwrap();
        assert_eq!(task.name(), "t1");
        assert_eq!(task.task_type(), FLYTECTL_TASK_TYPE);
        assert_eq!(task.config().admin_endpoint, "https://admin.example.com");
    }

    #[test]
    fn test_construction_fails_without_config() {
        let err = FlytectlTask::new("t2", None).unwrap_err();
        assert!(matches!(err, TaskError::Configuration(_)));
    }

    #[test]
    fn test_construction_fails_on_empty_endpoint() {
        let err = FlytectlTask::new("t1", Some(FlytectlConfig::new(""))).unwrap_err();
        assert!(matches!(err, TaskError::Configuration(_)));
    }

    #[test]
    fn test_construction_fails_on_empty_name() {
        let err = FlytectlTask::new("", Some(config())).unwrap_err();
        assert!(matches!(err, TaskError::Configuration(_)));
    }

    #[test]
    fn test_custom_properties_round_trip_config_values() {
        let task = FlytectlTask::new("t1", Some(config().with_insecure(true))).unwrap();
        let custom = task.custom(&SerializationSettings::default());
        assert_eq!(custom.len(), 2);
        assert_eq!(
            custom.get("admin_endpoint"),
            Some(&json!("https://admin.example.com"))
        );
        assert_eq!(custom.get("insecure"), Some(&json!(true)));
    }

    #[test]
    fn test_command_is_bash_dash_c_plus_script() {
        let task = FlytectlTask::new("t1", Some(config())).unwrap();
        let args = task.command(&SerializationSettings::default());
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], "bash");
        assert_eq!(args[1], "-c");
        assert!(args[2].starts_with("flytectl {{.inputs.command}}"));
        assert!(args[2].contains("s3 cp /opt/true.pb {{.outputPrefix}}/outputs.pb"));
        assert!(args[2].contains("|| aws s3 cp /opt/false.pb {{.outputPrefix}}/outputs.pb"));
    }

    #[test]
    fn test_renders_are_idempotent() {
        let task = FlytectlTask::new("t1", Some(config())).unwrap();
        let settings = SerializationSettings::new("flytesnacks", "development", "v1");
        assert_eq!(task.custom(&settings), task.custom(&settings));
        assert_eq!(task.command(&settings), task.command(&settings));
    }

    #[test]
    fn test_interface_is_fixed() {
        let secure = FlytectlTask::new("a", Some(config())).unwrap();
        let insecure =
            FlytectlTask::new("b", Some(FlytectlConfig::new("dns:///x:81").with_insecure(true)))
                .unwrap();
        assert_eq!(secure.interface(), insecure.interface());
        assert_eq!(*secure.interface(), TaskInterface::command_shape());
    }
}
