use async_trait::async_trait;

use crate::bot::TdError;
use crate::headlines::HeadlineError;
use crate::utilities::command_context::CommandContext;
use crate::utilities::convert_argument::ConversionError;

pub mod headlines;
pub mod quota;
pub mod start;
pub mod unlock;

pub type CommandResult = Result<(), CommandError>;

#[async_trait]
pub trait CommandTrait {
    fn command_names(&self) -> &[&str];

    fn description(&self) -> Option<&'static str> {
        None
    }

    /// Keeps the arguments out of the logs.
    fn redacts_arguments(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: &CommandContext, arguments: String) -> CommandResult;
}

pub enum CommandError {
    Custom(String),
    Telegram(TdError),
    ArgumentConversion(ConversionError),
    Headline(HeadlineError),
}

impl From<String> for CommandError {
    fn from(value: String) -> Self {
        Self::Custom(value)
    }
}

impl From<&str> for CommandError {
    fn from(value: &str) -> Self {
        Self::Custom(value.into())
    }
}

impl From<TdError> for CommandError {
    fn from(value: TdError) -> Self {
        Self::Telegram(value)
    }
}

impl From<ConversionError> for CommandError {
    fn from(value: ConversionError) -> Self {
        Self::ArgumentConversion(value)
    }
}

impl From<HeadlineError> for CommandError {
    fn from(value: HeadlineError) -> Self {
        Self::Headline(value)
    }
}
