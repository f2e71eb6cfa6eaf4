use std::fmt;

#[derive(Debug)]
pub struct DeliberateFailure {
    pub text: &'static str,
}

impl fmt::Display for DeliberateFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::error::Error for DeliberateFailure {}

#[derive(Debug)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "update handling was cancelled")
    }
}

impl std::error::Error for Cancelled {}
