use tdlib::enums::{InlineKeyboardButtonType, MessageContent, ReplyMarkup};
use tdlib::types::{
    FormattedText, InlineKeyboardButton, InlineKeyboardButtonTypeUrl, ReplyMarkupInlineKeyboard,
    User,
};

pub trait MainUsername {
    fn main_username(&self) -> Option<&String>;
}

impl MainUsername for User {
    fn main_username(&self) -> Option<&String> {
        self.usernames.as_ref()?.active_usernames.first()
    }
}

pub const fn get_message_text(content: &MessageContent) -> Option<&FormattedText> {
    let formatted_text = match content {
        MessageContent::MessageText(message) => &message.text,
        MessageContent::MessagePhoto(message) => &message.caption,
        MessageContent::MessageDocument(message) => &message.caption,
        _ => return None,
    };

    Some(formatted_text)
}

pub fn subscribe_markup(url: impl Into<String>) -> ReplyMarkup {
    ReplyMarkup::InlineKeyboard(ReplyMarkupInlineKeyboard {
        rows: vec![vec![InlineKeyboardButton {
            text: "⚡️ get unlimited requests".into(),
            r#type: InlineKeyboardButtonType::Url(InlineKeyboardButtonTypeUrl { url: url.into() }),
        }]],
    })
}
