use serde_json::{Map, Value};

pub mod error;
pub use error::{Result, TaskError};

pub mod config;
pub use config::FlytectlConfig;

pub mod interface;
pub use interface::{FieldKind, TaskInterface};

pub mod settings;
pub use settings::SerializationSettings;

pub mod flytectl;
pub use flytectl::{FLYTECTL_TASK_TYPE, FlytectlTask};

pub mod template;
pub use template::{ContainerSpec, TaskTemplate};

pub mod executor;
pub use executor::{MockTemplateExecutor, TemplateExecutor};

/// Capability interface a customized container task exposes to the host
/// workflow engine.
///
/// The host is a collaborator reached only through this seam: it compiles
/// the task into a persisted [`TaskTemplate`] at registration time and later
/// hands the template's argument vector to its container runtime. Nothing
/// here executes anything.
///
/// Implementations must be pure on the render side: `custom` and `command`
/// take shared references, perform no I/O, and return identical output for
/// identical inputs, so concurrent calls from any number of threads are safe.
pub trait ContainerTask: Send + Sync {
    /// Task type identifier the host uses to route execution
    fn task_type(&self) -> &str;

    /// Name unique within the owning workflow definition
    fn name(&self) -> &str;

    /// Image the container runtime should run
    fn container_image(&self) -> &str;

    /// Declared input/output fields
    fn interface(&self) -> &TaskInterface;

    /// Plugin-specific properties for the host's task-template serializer
    fn custom(&self, settings: &SerializationSettings) -> Map<String, Value>;

    /// Argument vector for the container entrypoint
    fn command(&self, settings: &SerializationSettings) -> Vec<String>;
}
