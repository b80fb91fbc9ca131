/*!
# flytectl-task

A customized container task plugin for a workflow orchestration host: it
packages a `flytectl` command-line invocation into a containerized unit of
work and reports success or failure as a single boolean output.

## Overview

The crate defines one task type. A [`FlytectlTask`] holds the plugin
configuration (admin endpoint and insecure flag) and declares a fixed
`{command: string} -> {success: bool}` interface. At workflow registration
the host compiles the task into an immutable [`TaskTemplate`]: the custom
properties feed the host's serializer, and the command line becomes the
entrypoint arguments for the host's container runtime.

Nothing in this crate runs the command. The rendered shell script invokes
`flytectl` with a host-substituted placeholder for the `command` input and
signals the result by copying a pre-baked true/false artifact to the run's
output prefix. The scheduling, the container runtime, and the CLI tool
itself all belong to the host.

## Key Components

* **FlytectlTask**: the task descriptor; validates its configuration at
  construction and renders the serializer/runtime boundaries
* **FlytectlConfig**: immutable plugin configuration (admin endpoint,
  insecure flag)
* **ContainerTask**: the capability interface the host calls; implement it
  to add further customized container task types
* **TaskTemplate**: the persisted, serialized form compiled from a task
* **TemplateExecutor**: the local-execution contract; the bundled
  [`MockTemplateExecutor`] always reports success and exists purely for
  test harnesses

## Usage Example

```rust
use flytectl_task::{FlytectlConfig, FlytectlTask, SerializationSettings, TaskTemplate};

fn main() -> flytectl_task::Result<()> {
    let config = FlytectlConfig::new("https://admin.example.com");
    let task = FlytectlTask::new("register_project", Some(config))?;

    let settings = SerializationSettings::new("flytesnacks", "development", "v1");
    let template = TaskTemplate::compile(&task, &settings);

    // ["bash", "-c", "flytectl {{.inputs.command}} && ..."]
    assert_eq!(template.container.args[0], "bash");

    println!("{}", template.to_json()?);
    Ok(())
}
```

## Local Execution

The mock executor satisfies the host's local-run harness without spawning
containers. It never inspects the template and always succeeds:

```rust
use flytectl_task::{
    FlytectlConfig, FlytectlTask, MockTemplateExecutor, SerializationSettings, TaskTemplate,
    TemplateExecutor,
};
use serde_json::json;

#[tokio::main]
async fn main() -> flytectl_task::Result<()> {
    let task = FlytectlTask::new(
        "get_projects",
        Some(FlytectlConfig::new("dns:///flyte.local:81").with_insecure(true)),
    )?;
    let template = TaskTemplate::compile(&task, &SerializationSettings::default());

    let outputs = MockTemplateExecutor
        .execute(&template, &json!({"command": "get projects"}))
        .await?;
    assert_eq!(outputs["success"], json!(true));
    Ok(())
}
```

## Error Handling

Construction is the only fallible step: a missing configuration, an empty
admin endpoint, or an empty task name fails fast with
[`TaskError::Configuration`] before anything is serialized or scheduled.
All renders on a validly constructed task are total.

```rust
use flytectl_task::{FlytectlTask, TaskError};

let err = FlytectlTask::new("t2", None).unwrap_err();
assert!(matches!(err, TaskError::Configuration(_)));
```
*/

pub mod task;

// Re-export all public APIs for easier access
pub use task::ContainerTask;
pub use task::config::FlytectlConfig;
pub use task::error::{Result, TaskError};
pub use task::executor::{MockTemplateExecutor, TemplateExecutor};
pub use task::flytectl::{FLYTECTL_TASK_TYPE, FlytectlTask};
pub use task::interface::{FieldKind, TaskInterface};
pub use task::settings::SerializationSettings;
pub use task::template::{ContainerSpec, TaskTemplate};
