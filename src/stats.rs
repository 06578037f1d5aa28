use crate::error::StatsError;
use crate::route::Route;
use crate::ticket::{CarrierId, Ticket};
use crate::time::{DurationMode, Minutes};
use std::collections::HashMap;
use tracing::{debug, warn};

#[cfg(test)]
pub(crate) mod tests;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStatistic {
    pub mean: f64,
    pub median: f64,
    /// `mean - median`
    pub gap: f64,
}

impl PriceStatistic {
    /// Expects `prices` sorted ascending and non-empty.
    fn from_sorted(prices: &[u64]) -> PriceStatistic {
        let n = prices.len();
        let median = if n % 2 == 1 {
            prices[n / 2] as f64
        } else {
            (prices[n / 2] as f64 + prices[n / 2 - 1] as f64) / 2.0
        };

        let mut sum = 0.0;
        for &price in prices {
            sum += price as f64;
        }
        let mean = sum / n as f64;

        PriceStatistic {
            mean,
            median,
            gap: mean - median,
        }
    }
}

pub struct TicketStats {
    tickets: Vec<Ticket>,
    pub route: Route,
    pub mode: DurationMode,
}

impl TicketStats {
    pub fn new(tickets: Vec<Ticket>, route: Route) -> TicketStats {
        TicketStats {
            tickets,
            route,
            mode: DurationMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: DurationMode) -> TicketStats {
        self.mode = mode;
        self
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn filtered(&self) -> Vec<&Ticket> {
        let filtered = self.route.filter(&self.tickets);
        debug!(route = %self.route, matched = filtered.len(), total = self.tickets.len(), "filtered tickets");
        filtered
    }

    /// Shortest flight per carrier on the route. An empty route yields an empty map.
    pub fn min_durations_by_carrier(&self) -> Result<HashMap<CarrierId, Minutes>, StatsError> {
        let mut min_by_carrier: HashMap<CarrierId, Minutes> = HashMap::new();
        for ticket in self.filtered() {
            let duration = ticket.duration(self.mode)?;
            if duration.is_negative() {
                warn!(
                    carrier = %ticket.carrier,
                    departure = %ticket.departure_time,
                    arrival = %ticket.arrival_time,
                    minutes = duration.0,
                    "negative flight duration"
                );
            }
            min_by_carrier
                .entry(ticket.carrier.clone())
                .and_modify(|min| {
                    if duration < *min {
                        *min = duration;
                    }
                })
                .or_insert(duration);
        }
        Ok(min_by_carrier)
    }

    pub fn price_mean_median_gap(&self) -> Result<PriceStatistic, StatsError> {
        let mut prices = self
            .filtered()
            .iter()
            .map(|t| t.price)
            .collect::<Vec<u64>>();
        if prices.is_empty() {
            return Err(StatsError::EmptySet {
                origin: self.route.origin.clone(),
                destination: self.route.destination.clone(),
            });
        }
        prices.sort();
        Ok(PriceStatistic::from_sorted(&prices))
    }
}
