use std::fmt::Write;

use async_trait::async_trait;

use super::{CommandResult, CommandTrait};
use crate::headlines::FREE_LIMIT;
use crate::headlines::style::HeadlineStyle;
use crate::utilities::command_context::CommandContext;

pub struct Start;

#[async_trait]
impl CommandTrait for Start {
    fn command_names(&self) -> &[&str] {
        &["start", "help"]
    }

    async fn execute(&self, ctx: &CommandContext, _: String) -> CommandResult {
        ctx.reply(usage(ctx.bot_state.config.subscribe_url.as_deref())).await?;

        Ok(())
    }
}

fn usage(subscribe_url: Option<&str>) -> String {
    let mut text = String::from(
        "🔥 YouTube headline generator\n\n\
         use /headlines [style] <topic> to get 5 headline ideas.\n\
         example: /headlines clickbait how to learn Python fast\n\n\
         available styles:",
    );

    for style in HeadlineStyle::ALL {
        write!(text, "\n• {style}").unwrap();
    }

    write!(
        text,
        "\n\nyou get {FREE_LIMIT} free requests, check them with /quota. \
         enter an unlock code with /unlock <code> for unlimited requests."
    )
    .unwrap();

    if let Some(url) = subscribe_url {
        write!(text, "\n\n⚡️ need unlimited requests? subscribe here: {url}").unwrap();
    }

    text
}
