use crate::error::ParseError;
use crate::route::AirportId;
use crate::time::{DurationMode, Minutes, Timing};
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use tracing::info;

pub type CarrierId = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub origin: AirportId,
    #[serde(default)]
    pub origin_name: Option<String>,
    pub destination: AirportId,
    #[serde(default)]
    pub destination_name: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
    pub departure_time: String,
    #[serde(default)]
    pub arrival_date: Option<String>,
    pub arrival_time: String,
    pub carrier: CarrierId,
    #[serde(default)]
    pub stops: u32,
    pub price: u64,
}

impl Ticket {
    pub fn timing(&self, mode: DurationMode) -> Result<Timing, ParseError> {
        Timing::from_fields(
            self.departure_date.as_deref(),
            &self.departure_time,
            self.arrival_date.as_deref(),
            &self.arrival_time,
            mode,
        )
    }

    pub fn duration(&self, mode: DurationMode) -> Result<Minutes, ParseError> {
        self.timing(mode).map(|t| t.duration())
    }
}

pub fn load_from_file(path: &str) -> io::Result<Vec<Ticket>> {
    let data = std::fs::read_to_string(path)?;
    let tickets = from_json(&data)?;
    info!(count = tickets.len(), path, "loaded tickets");
    Ok(tickets)
}

pub fn from_json(data: &str) -> io::Result<Vec<Ticket>> {
    #[derive(Deserialize)]
    struct RawData {
        tickets: Vec<Ticket>,
    }
    let raw: RawData = serde_json::from_str(data)?;
    Ok(raw.tickets)
}
