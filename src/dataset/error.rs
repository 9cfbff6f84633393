use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum DatasetError {
    Io(String),
    Csv(String),
    MissingColumn(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(msg) => write!(f, "IO error: {msg}"),
            DatasetError::Csv(msg) => write!(f, "CSV error: {msg}"),
            DatasetError::MissingColumn(name) => write!(f, "Missing required column: {name}"),
        }
    }
}

impl Error for DatasetError {}
