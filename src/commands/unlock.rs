use async_trait::async_trait;

use super::{CommandResult, CommandTrait};
use crate::utilities::command_context::CommandContext;
use crate::utilities::convert_argument::{ConvertArgument, StringGreedy};

pub struct Unlock;

#[async_trait]
impl CommandTrait for Unlock {
    fn command_names(&self) -> &[&str] {
        &["unlock", "premium"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("enter an unlock code for unlimited requests")
    }

    fn redacts_arguments(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: &CommandContext, arguments: String) -> CommandResult {
        let code = Option::<StringGreedy>::convert(ctx, &arguments).await?.0;

        let session = ctx.bot_state.sessions.session(ctx.user.id);
        let mut session = session.lock().await;

        let Some(StringGreedy(code)) = code else {
            session.unlock_input.clear();
            drop(session);
            ctx.reply("unlock code removed, free limits apply again.").await?;
            return Ok(());
        };

        let code = code.trim_end();
        let unlocked = ctx.bot_state.gate.is_unlocked(code);
        session.unlock_input = code.into();
        drop(session);

        if unlocked {
            log::info!("{} unlocked unlimited requests", ctx.user);
            ctx.reply("⚡️ unlock code accepted, enjoy unlimited requests! 🎉").await?;
        } else {
            log::info!("{} entered a wrong unlock code", ctx.user);
            Err("this unlock code is not valid.")?;
        }

        Ok(())
    }
}
