use crate::ticket::Ticket;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type AirportId = Arc<str>;

/// Origin/destination pair that every statistic is restricted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub origin: AirportId,
    pub destination: AirportId,
}

impl Route {
    pub const DEFAULT_ORIGIN: &'static str = "VVO";
    pub const DEFAULT_DESTINATION: &'static str = "TLV";

    pub fn new(origin: &str, destination: &str) -> Route {
        Route {
            origin: Arc::from(origin),
            destination: Arc::from(destination),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        ticket.origin == self.origin && ticket.destination == self.destination
    }

    /// Tickets flying this route, in source order.
    pub fn filter<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        tickets.iter().filter(|t| self.matches(t)).collect()
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new(Route::DEFAULT_ORIGIN, Route::DEFAULT_DESTINATION)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
