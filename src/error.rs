use crate::route::AirportId;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("cannot parse {field} '{value}': {reason}")]
pub struct ParseError {
    pub field: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl ParseError {
    pub fn new(field: &'static str, value: &str, reason: &'static str) -> ParseError {
        ParseError {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StatsError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("no tickets from {origin} to {destination}")]
    EmptySet {
        origin: AirportId,
        destination: AirportId,
    },
}
