//! Helper types and functions for the meowpass command line executable.

pub mod messages;

/// Command tree used to print help output as JSON.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandTree {
    /// Name of the command.
    pub name: String,
    /// Long flags accepted by the command.
    pub flags: Vec<String>,
    /// Subcommands.
    pub commands: Vec<CommandTree>,
}

impl From<&clap::Command> for CommandTree {
    fn from(value: &clap::Command) -> Self {
        CommandTree {
            name: value.get_name().to_string(),
            flags: value
                .get_arguments()
                .filter_map(|arg| arg.get_long())
                .map(|long| format!("--{}", long))
                .collect(),
            commands: value.get_subcommands().map(|c| c.into()).collect(),
        }
    }
}
