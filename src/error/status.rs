//! Client error classifications reported in error payloads.

use std::fmt;

/// Request-level error kinds, rendered as `Neo.ClientError.Request.<Kind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    /// The request body could not be read as the expected shape
    InvalidFormat,
    /// The request was well-formed but its content was rejected
    Invalid,
}

impl RequestStatus {
    const PREFIX: &'static str = "Neo.ClientError.Request";

    pub fn kind(&self) -> &'static str {
        match self {
            RequestStatus::InvalidFormat => "InvalidFormat",
            RequestStatus::Invalid => "Invalid",
        }
    }

    /// Fully qualified status code, e.g. `Neo.ClientError.Request.Invalid`
    pub fn code(&self) -> String {
        format!("{}.{}", Self::PREFIX, self.kind())
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
