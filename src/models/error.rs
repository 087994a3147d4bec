use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    ParserError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
