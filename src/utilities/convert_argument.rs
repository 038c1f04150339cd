use std::fmt;

use async_trait::async_trait;

use super::command_context::CommandContext;
use crate::headlines::style::HeadlineStyle;

#[derive(Debug, PartialEq, Eq)]
pub enum ConversionError {
    MissingArgument,
    BadArgument(&'static str),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument => write!(f, "missing command argument"),
            Self::BadArgument(reason) => write!(f, "bad command argument: {reason}"),
        }
    }
}

#[async_trait]
pub trait ConvertArgument: Sized + Send {
    async fn convert<'a>(
        ctx: &CommandContext,
        arguments: &'a str,
    ) -> Result<(Self, &'a str), ConversionError>;
}

#[async_trait]
impl<T: ConvertArgument> ConvertArgument for Option<T> {
    async fn convert<'a>(
        ctx: &CommandContext,
        arguments: &'a str,
    ) -> Result<(Self, &'a str), ConversionError> {
        match T::convert(ctx, arguments).await {
            Ok((argument, rest)) => Ok((Some(argument), rest)),
            Err(_) => Ok((None, arguments)),
        }
    }
}

#[async_trait]
impl<T1, T2> ConvertArgument for (T1, T2)
where
    T1: ConvertArgument,
    T2: ConvertArgument,
{
    async fn convert<'a>(
        ctx: &CommandContext,
        arguments: &'a str,
    ) -> Result<(Self, &'a str), ConversionError> {
        let (arg1, rest) = T1::convert(ctx, arguments).await?;
        let (arg2, rest) = T2::convert(ctx, rest).await?;

        Ok(((arg1, arg2), rest))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct StringGreedy(pub String);

#[async_trait]
impl ConvertArgument for StringGreedy {
    async fn convert<'a>(
        _: &CommandContext,
        arguments: &'a str,
    ) -> Result<(Self, &'a str), ConversionError> {
        let argument = arguments.trim_start().to_owned();

        if argument.is_empty() {
            Err(ConversionError::MissingArgument)?;
        }

        Ok((Self(argument), ""))
    }
}

#[async_trait]
impl ConvertArgument for HeadlineStyle {
    async fn convert<'a>(
        _: &CommandContext,
        arguments: &'a str,
    ) -> Result<(Self, &'a str), ConversionError> {
        match Self::strip_prefix(arguments) {
            (Some(style), rest) => Ok((style, rest)),
            (None, _) if arguments.trim().is_empty() => Err(ConversionError::MissingArgument),
            (None, _) => Err(ConversionError::BadArgument("unknown headline style.")),
        }
    }
}
