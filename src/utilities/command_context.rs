use std::sync::Arc;

use tdlib::enums::{self, ChatAction, InputMessageContent, InputMessageReplyTo, ReplyMarkup};
use tdlib::functions;
use tdlib::types::{FormattedText, InputMessageReplyToMessage, InputMessageText, Message};

use super::bot_state::BotState;
use super::cache::CompactUser;
use crate::bot::TdResult;

pub struct CommandContext {
    pub client_id: i32,
    pub user: CompactUser,
    pub message: Message,
    pub bot_state: Arc<BotState>,
}

impl CommandContext {
    pub async fn reply_custom(
        &self,
        message_content: InputMessageContent,
        reply_markup: Option<ReplyMarkup>,
    ) -> TdResult<Message> {
        let enums::Message::Message(message) = functions::send_message(
            self.message.chat_id,
            self.message.message_thread_id,
            Some(InputMessageReplyTo::Message(InputMessageReplyToMessage {
                message_id: self.message.id,
                ..Default::default()
            })),
            None,
            reply_markup,
            message_content,
            self.client_id,
        )
        .await?;

        Ok(message)
    }

    pub async fn reply_formatted_text_with_markup(
        &self,
        text: FormattedText,
        reply_markup: Option<ReplyMarkup>,
    ) -> TdResult<Message> {
        self.reply_custom(
            InputMessageContent::InputMessageText(InputMessageText { text, ..Default::default() }),
            reply_markup,
        )
        .await
    }

    pub async fn reply_formatted_text(&self, text: FormattedText) -> TdResult<Message> {
        self.reply_formatted_text_with_markup(text, None).await
    }

    pub async fn reply(&self, text: impl Into<String> + Send) -> TdResult<Message> {
        self.reply_formatted_text(FormattedText { text: text.into(), ..Default::default() }).await
    }

    /// Replies with `text` rendered from Telegram Markdown. Text that fails to
    /// parse is sent as is.
    pub async fn reply_markdown(&self, text: String) -> TdResult<Message> {
        let formatted_text = match functions::parse_markdown(
            FormattedText { text: text.clone(), ..Default::default() },
            self.client_id,
        )
        .await
        {
            Ok(enums::FormattedText::FormattedText(formatted_text)) => formatted_text,
            Err(err) => {
                log::warn!("Markdown parsing failed: {}: {}", err.code, err.message);
                FormattedText { text, ..Default::default() }
            }
        };

        self.reply_formatted_text(formatted_text).await
    }

    pub async fn send_typing(&self) -> TdResult<()> {
        functions::send_chat_action(
            self.message.chat_id,
            self.message.message_thread_id,
            Some(ChatAction::Typing),
            self.client_id,
        )
        .await
    }
}
