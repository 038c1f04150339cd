use async_trait::async_trait;
use tdlib::types::FormattedText;

use super::{CommandResult, CommandTrait};
use crate::headlines::gate::QuotaStatus;
use crate::utilities::command_context::CommandContext;
use crate::utilities::telegram_utils;

pub struct Quota;

#[async_trait]
impl CommandTrait for Quota {
    fn command_names(&self) -> &[&str] {
        &["quota", "status"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("show how many free requests you have left")
    }

    async fn execute(&self, ctx: &CommandContext, _: String) -> CommandResult {
        let status = {
            let session = ctx.bot_state.sessions.session(ctx.user.id);
            let session = session.lock().await;
            ctx.bot_state.gate.status(&session, &session.unlock_input)
        };

        let text = format_status(&status);

        match (&status, &ctx.bot_state.config.subscribe_url) {
            (QuotaStatus::Free { .. }, Some(url)) => {
                ctx.reply_formatted_text_with_markup(
                    FormattedText { text, ..Default::default() },
                    Some(telegram_utils::subscribe_markup(url)),
                )
                .await?;
            }
            _ => {
                ctx.reply(text).await?;
            }
        }

        Ok(())
    }
}

pub fn format_status(status: &QuotaStatus) -> String {
    match status {
        QuotaStatus::Unlimited => "⚡️ status: premium. requests: unlimited! 🎉".into(),
        QuotaStatus::Free { used, remaining, limit } => {
            format!("status: free. used {used}, 🔑 requests left: {remaining} of {limit}.")
        }
    }
}
