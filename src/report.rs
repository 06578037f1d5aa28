use crate::route::Route;
use crate::stats::PriceStatistic;
use crate::ticket::{CarrierId, Ticket};
use crate::time::Minutes;
use colored::Colorize;
use std::collections::HashMap;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CarrierRow {
    #[tabled(rename = "Carrier")]
    carrier: CarrierId,
    #[tabled(rename = "Min flight time")]
    flight_time: String,
}

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "Carrier")]
    carrier: CarrierId,
    #[tabled(rename = "From")]
    origin: String,
    #[tabled(rename = "To")]
    destination: String,
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "Arrival")]
    arrival: String,
    #[tabled(rename = "Stops")]
    stops: u32,
    #[tabled(rename = "Price")]
    price: u64,
}

fn place(code: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} ({})", code, name),
        None => code.to_string(),
    }
}

fn stamp(date: Option<&str>, time: &str) -> String {
    match date {
        Some(date) => format!("{} {}", date, time),
        None => time.to_string(),
    }
}

fn render<I: IntoIterator<Item = T>, T: Tabled>(rows: I) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn flight_time(duration: Minutes) -> String {
    if duration.is_negative() {
        duration.to_string().red().to_string()
    } else {
        duration.to_string()
    }
}

/// One row per carrier, sorted by carrier.
pub fn durations_table(durations: &HashMap<CarrierId, Minutes>) -> String {
    let mut rows = durations
        .iter()
        .map(|(carrier, duration)| CarrierRow {
            carrier: carrier.clone(),
            flight_time: flight_time(*duration),
        })
        .collect::<Vec<CarrierRow>>();
    rows.sort_by(|a, b| a.carrier.cmp(&b.carrier));
    render(rows)
}

pub fn tickets_table(tickets: &[&Ticket]) -> String {
    render(tickets.iter().map(|t| TicketRow {
        carrier: t.carrier.clone(),
        origin: place(&t.origin, t.origin_name.as_deref()),
        destination: place(&t.destination, t.destination_name.as_deref()),
        departure: stamp(t.departure_date.as_deref(), &t.departure_time),
        arrival: stamp(t.arrival_date.as_deref(), &t.arrival_time),
        stops: t.stops,
        price: t.price,
    }))
}

pub fn gap_line(route: &Route, stat: &PriceStatistic) -> String {
    format!(
        "{} {}: {} (mean {}, median {})",
        "Mean minus median price".bold(),
        route,
        stat.gap,
        stat.mean,
        stat.median
    )
}
