use std::fmt;
use std::sync::Arc;

use tdlib::types::BotCommand;

use crate::commands::CommandTrait;

pub type CommandRef = Box<dyn CommandTrait + Send + Sync>;

pub struct CommandInstance {
    pub command: CommandRef,
}

impl fmt::Display for CommandInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.command.command_names().first() {
            Some(name) => write!(f, "/{name}"),
            None => write!(f, "unnamed command"),
        }
    }
}

#[derive(Default)]
pub struct CommandManager {
    commands: Vec<Arc<CommandInstance>>,
}

impl CommandManager {
    pub fn add_command(&mut self, command: CommandRef) {
        self.commands.push(Arc::new(CommandInstance { command }));
    }

    pub fn get_command(&self, name: &str) -> Option<Arc<CommandInstance>> {
        self.commands.iter().find(|c| c.command.command_names().contains(&name)).cloned()
    }

    /// Commands with a description, as shown in the Telegram command menu.
    pub fn public_command_list(&self) -> Vec<BotCommand> {
        self.commands
            .iter()
            .filter_map(|c| {
                let name = c.command.command_names().first()?;
                c.command
                    .description()
                    .map(|d| BotCommand { command: (*name).into(), description: d.into() })
            })
            .collect()
    }
}
