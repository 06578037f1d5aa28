use crate::route::Route;
use crate::ticket::Ticket;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn add_ticket(
    tickets: &mut Vec<Ticket>,
    origin: &str,
    destination: &str,
    carrier: &str,
    price: u64,
    departure_time: &str,
    arrival_time: &str,
) {
    tickets.push(Ticket {
        origin: id(origin),
        origin_name: None,
        destination: id(destination),
        destination_name: None,
        departure_date: None,
        departure_time: departure_time.to_string(),
        arrival_date: None,
        arrival_time: arrival_time.to_string(),
        carrier: id(carrier),
        stops: 0,
        price,
    });
}

/// Adds a ticket on the default route carrying both dates.
pub fn add_dated_ticket(
    tickets: &mut Vec<Ticket>,
    carrier: &str,
    price: u64,
    departure: (&str, &str),
    arrival: (&str, &str),
) {
    tickets.push(Ticket {
        origin: id(Route::DEFAULT_ORIGIN),
        origin_name: Some("Владивосток".to_string()),
        destination: id(Route::DEFAULT_DESTINATION),
        destination_name: Some("Тель-Авив".to_string()),
        departure_date: Some(departure.0.to_string()),
        departure_time: departure.1.to_string(),
        arrival_date: Some(arrival.0.to_string()),
        arrival_time: arrival.1.to_string(),
        carrier: id(carrier),
        stops: 1,
        price,
    });
}

/// Tickets on the default route that differ only in price.
pub fn priced(prices: &[u64]) -> Vec<Ticket> {
    let mut tickets = Vec::new();
    for &price in prices {
        add_ticket(&mut tickets, "VVO", "TLV", "SU", price, "10:00", "14:30");
    }
    tickets
}

pub fn arb_id(prefix: &'static str) -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from(format!("{}_1", prefix))),
        Just(Arc::from(format!("{}_2", prefix))),
        Just(Arc::from(format!("{}_3", prefix))),
    ]
}

pub fn arb_airport() -> impl Strategy<Value = Arc<str>> {
    prop_oneof![Just(id("VVO")), Just(id("TLV")), Just(id("UFA"))]
}

pub fn arb_time() -> impl Strategy<Value = String> {
    (0..24u32, 0..60u32).prop_map(|(h, m)| format!("{}:{:02}", h, m))
}

pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
    (
        arb_airport(),
        arb_airport(),
        arb_id("CR"),
        0..100_000u64,
        arb_time(),
        arb_time(),
    )
        .prop_map(|(origin, destination, carrier, price, dep, arr)| Ticket {
            origin,
            origin_name: None,
            destination,
            destination_name: None,
            departure_date: None,
            departure_time: dep,
            arrival_date: None,
            arrival_time: arr,
            carrier,
            stops: 0,
            price,
        })
}
