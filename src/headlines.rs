use std::fmt;

pub mod gate;
pub mod generation;
pub mod session;
pub mod style;

/// Number of generations a session gets before it needs the unlock code.
pub const FREE_LIMIT: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineError {
    Validation,
    QuotaExceeded { limit: u32 },
    MissingCredential,
    Service(String),
    Unexpected(String),
}

impl fmt::Display for HeadlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "please enter a topic to generate headlines for."),
            Self::QuotaExceeded { limit } => write!(
                f,
                "🛑 request limit reached. you have used all {limit} free generations, \
                 enter an unlock code with /unlock to continue."
            ),
            Self::MissingCredential => {
                write!(f, "GEMINI_API_KEY is not set, headline generation is unavailable.")
            }
            Self::Service(detail) => write!(f, "Gemini API error: {detail}"),
            Self::Unexpected(detail) => write!(f, "an unexpected error occurred: {detail}"),
        }
    }
}
