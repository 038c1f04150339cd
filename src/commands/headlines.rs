use std::fmt::Write;

use async_trait::async_trait;

use super::{CommandResult, CommandTrait};
use crate::headlines::gate::QuotaStatus;
use crate::headlines::style::HeadlineStyle;
use crate::utilities::command_context::CommandContext;
use crate::utilities::convert_argument::{ConvertArgument, StringGreedy};

pub struct Headlines;

#[async_trait]
impl CommandTrait for Headlines {
    fn command_names(&self) -> &[&str] {
        &["headlines", "h"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("generate 5 YouTube headlines for a topic")
    }

    async fn execute(&self, ctx: &CommandContext, arguments: String) -> CommandResult {
        let ((style, topic), _) =
            <(Option<HeadlineStyle>, Option<StringGreedy>)>::convert(ctx, &arguments).await?;
        let style = style.unwrap_or_default();
        let topic = topic.map(|topic| topic.0).unwrap_or_default();

        let gate = &ctx.bot_state.gate;
        let session = ctx.bot_state.sessions.session(ctx.user.id);
        let mut session = session.lock().await;
        let unlock_input = session.unlock_input.clone();

        gate.check(&session, &topic, &unlock_input)?;
        ctx.send_typing().await?;

        let text = gate.attempt(&session, &topic, style, &unlock_input).await?;
        let status = gate.status_after_request(&session, &unlock_input);

        ctx.reply_markdown(format_result(&text, style, &status)).await?;
        gate.record(&mut session, &unlock_input);

        Ok(())
    }
}

fn format_result(text: &str, style: HeadlineStyle, status: &QuotaStatus) -> String {
    let mut result = format!("✅ done! your {style} headlines:\n\n{}", text.trim_end());

    match status {
        QuotaStatus::Unlimited => result.push_str("\n\n⚡️ unlimited requests"),
        QuotaStatus::Free { remaining, limit, .. } => {
            write!(result, "\n\n🔑 {remaining} of {limit} free requests left").unwrap();
        }
    }

    result
}
