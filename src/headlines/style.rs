use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadlineStyle {
    #[default]
    Informational,
    Clickbait,
    Humorous,
    Serious,
}

impl HeadlineStyle {
    pub const ALL: [Self; 4] =
        [Self::Informational, Self::Clickbait, Self::Humorous, Self::Serious];

    /// Label embedded in the model instruction.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Clickbait => "clickbait (intriguing)",
            Self::Humorous => "humorous",
            Self::Serious => "serious",
        }
    }

    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Informational => &["informational", "info"],
            Self::Clickbait => &["clickbait", "intriguing"],
            Self::Humorous => &["humorous", "funny"],
            Self::Serious => &["serious"],
        }
    }

    /// Splits a leading style word off `text`. Returns `None` and leaves the
    /// text untouched when the first word isn't a known style.
    pub fn strip_prefix(text: &str) -> (Option<Self>, &str) {
        let trimmed = text.trim_start();
        let word_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let word = trimmed[..word_end].to_lowercase();

        if word.is_empty() {
            return (None, text);
        }

        Self::ALL
            .into_iter()
            .find(|style| style.aliases().contains(&word.as_str()))
            .map_or((None, text), |style| (Some(style), &trimmed[word_end..]))
    }
}

impl fmt::Display for HeadlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_strip_prefix() {
        assert_eq!(HeadlineStyle::strip_prefix(""), (None, ""));
        assert_eq!(HeadlineStyle::strip_prefix("   "), (None, "   "));

        assert_eq!(
            HeadlineStyle::strip_prefix("funny cats at night"),
            (Some(HeadlineStyle::Humorous), " cats at night")
        );
        assert_eq!(
            HeadlineStyle::strip_prefix("  CLICKBAIT learn rust"),
            (Some(HeadlineStyle::Clickbait), " learn rust")
        );
        assert_eq!(HeadlineStyle::strip_prefix("serious"), (Some(HeadlineStyle::Serious), ""));

        assert_eq!(
            HeadlineStyle::strip_prefix("seriously good pasta"),
            (None, "seriously good pasta")
        );
        assert_eq!(HeadlineStyle::strip_prefix("how to cook"), (None, "how to cook"));
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, style) in HeadlineStyle::ALL.iter().enumerate() {
            for other in &HeadlineStyle::ALL[i + 1..] {
                assert_ne!(style.label(), other.label());
            }
            assert_eq!(
                HeadlineStyle::strip_prefix(style.aliases()[0]).0,
                Some(*style),
                "first alias must resolve back to its style"
            );
        }
    }
}
