use std::sync::Arc;

use tdlib::types::FormattedText;

use super::command_context::CommandContext;
use super::command_manager::CommandInstance;
use super::telegram_utils;
use crate::bot::TdResult;
use crate::commands::{CommandError, CommandTrait};
use crate::headlines::HeadlineError;

pub async fn dispatch_command(
    command: Arc<CommandInstance>,
    arguments: String,
    context: CommandContext,
) {
    log::info!(
        "running {command} {} for {} in {}",
        logged_arguments(&*command.command, &arguments),
        context.user,
        chat_label(context.message.chat_id, context.user.id)
    );

    if let Err(err) = command.command.execute(&context, arguments).await {
        if let Err(err) = report_command_error(&command, &context, err).await {
            log::error!(
                "TDLib error occurred while handling the previous error {}: {}",
                err.code,
                err.message
            );
        }
    }
}

fn logged_arguments(command: &dyn CommandTrait, arguments: &str) -> String {
    if command.redacts_arguments() && !arguments.is_empty() {
        "<redacted>".into()
    } else {
        format!("{arguments:?}")
    }
}

fn chat_label(chat_id: i64, user_id: i64) -> String {
    if chat_id == user_id {
        "PM".into()
    } else {
        format!("chat {chat_id}")
    }
}

async fn report_command_error(
    command: &CommandInstance,
    context: &CommandContext,
    error: CommandError,
) -> TdResult<()> {
    match error {
        CommandError::Custom(text) => context.reply(text).await?,
        CommandError::ArgumentConversion(err) => context.reply(err.to_string()).await?,
        CommandError::Telegram(err) => {
            log::error!("TDLib error in the {command} command: {}: {}", err.code, err.message);
            context.reply(format!("sending the message failed ({}) 😔", err.message)).await?
        }
        CommandError::Headline(err @ HeadlineError::QuotaExceeded { .. }) => {
            log::info!("{command} rejected for {}: {err}", context.user);
            let reply_markup = context
                .bot_state
                .config
                .subscribe_url
                .as_ref()
                .map(telegram_utils::subscribe_markup);

            context
                .reply_formatted_text_with_markup(
                    FormattedText { text: err.to_string(), ..Default::default() },
                    reply_markup,
                )
                .await?
        }
        CommandError::Headline(err) => context.reply(err.to_string()).await?,
    };

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commands::{headlines, unlock};

    #[test]
    fn test_unlock_code_is_not_logged() {
        let text = logged_arguments(&unlock::Unlock, "TurboTitle2025");
        assert_eq!(text, "<redacted>");
        assert!(!text.contains("TurboTitle2025"));

        assert_eq!(logged_arguments(&unlock::Unlock, ""), r#""""#);
        assert_eq!(logged_arguments(&headlines::Headlines, "funny cats"), r#""funny cats""#);
    }

    #[test]
    fn test_chat_label() {
        assert_eq!(chat_label(42, 42), "PM");
        assert_eq!(chat_label(-1_001_234, 42), "chat -1001234");
    }
}
