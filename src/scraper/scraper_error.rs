use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    HtmlParse(String),
    MissingField(&'static str),
    InvalidNumber { field: &'static str, value: String },
    EmptyResults,
    Io(String),
    Config(String),
}

/// Coarse grouping used when reporting a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    EmptyResult,
    Io,
    Config,
}

impl ScraperError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScraperError::Network(_) => ErrorKind::Network,
            ScraperError::HtmlParse(_)
            | ScraperError::MissingField(_)
            | ScraperError::InvalidNumber { .. } => ErrorKind::Parse,
            ScraperError::EmptyResults => ErrorKind::EmptyResult,
            ScraperError::Io(_) => ErrorKind::Io,
            ScraperError::Config(_) => ErrorKind::Config,
        }
    }
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScraperError::MissingField(field) => write!(f, "Missing field in listing markup: {field}"),
            ScraperError::InvalidNumber { field, value } => {
                write!(f, "Invalid number for {field}: {value:?}")
            }
            ScraperError::EmptyResults => write!(f, "Search returned no listings"),
            ScraperError::Io(msg) => write!(f, "IO error: {msg}"),
            ScraperError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Network => "network",
            ErrorKind::Parse => "parse",
            ErrorKind::EmptyResult => "empty-result",
            ErrorKind::Io => "io",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

impl Error for ScraperError {}
