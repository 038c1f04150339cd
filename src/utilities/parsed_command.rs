use tdlib::enums::TextEntityType;
use tdlib::types::FormattedText;

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub bot_username: Option<String>,
    pub arguments: String,
}

impl ParsedCommand {
    /// Reads a `/command@bot arguments` message. Only a bot command entity at
    /// the very start of the text counts.
    pub fn parse(formatted_text: &FormattedText) -> Option<Self> {
        let entity = formatted_text
            .entities
            .iter()
            .find(|e| e.r#type == TextEntityType::BotCommand && e.offset == 0)?;

        // entity lengths are UTF-16 code units, commands are plain ASCII
        let end = usize::try_from(entity.length).ok()?;
        let command = formatted_text.text.get(1..end)?;

        let (command_name, username) =
            command.split_once('@').map_or((command, None), |parts| (parts.0, Some(parts.1)));

        let arguments = formatted_text.text[end..].trim_ascii_start().into();

        Some(Self {
            name: command_name.to_lowercase(),
            bot_username: username.map(str::to_string),
            arguments,
        })
    }
}
