use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::commands::{execute_command, parse_command};
use crate::config::AppConfig;
use crate::report::Report;

#[derive(Debug, Deserialize)]
struct CommandScriptFile {
    commands: Vec<String>,
}

/// Ordered list of slash commands loaded from JSON.
///
/// Scripts look like `{"commands": ["/chunk 123 456", "/slime 123 456"]}` and
/// run in file order. A failing command is recorded and does not stop the run.
#[derive(Debug)]
pub struct CommandScript {
    commands: Vec<String>,
}

/// Outcome of one script line: either a report or an error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptOutcome {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandScript {
    /// Load a command script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read command script {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("invalid command script {}", path.display()))
    }

    /// Load a command script from an in-memory JSON string.
    pub fn from_json(contents: &str) -> Result<Self> {
        let file: CommandScriptFile = serde_json::from_str(contents)?;
        if file.commands.is_empty() {
            anyhow::bail!("command script contains no commands");
        }

        let mut commands = Vec::with_capacity(file.commands.len());
        for command in file.commands {
            let command = command.trim().to_string();
            if command.is_empty() {
                anyhow::bail!("command script contains an empty command");
            }
            commands.push(command);
        }
        Ok(Self { commands })
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Run every command in order.
    pub fn run(&self, config: &AppConfig) -> Vec<ScriptOutcome> {
        self.commands
            .iter()
            .map(|command| {
                let result = parse_command(command).and_then(|cmd| execute_command(&cmd, config));
                match result {
                    Ok(report) => ScriptOutcome {
                        command: command.clone(),
                        report: Some(report),
                        error: None,
                    },
                    Err(err) => {
                        tracing::warn!(%command, %err, "script command failed");
                        ScriptOutcome {
                            command: command.clone(),
                            report: None,
                            error: Some(err.to_string()),
                        }
                    }
                }
            })
            .collect()
    }
}
