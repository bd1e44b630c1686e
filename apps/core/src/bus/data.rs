//! Built-in demo catalog used by the demo binary and a handful of tests.

use super::model::{Bus, Route};

fn entry(
    id: u32,
    from: &str,
    to: &str,
    travel_date: &str,
    departure_time: &str,
    arrival_time: &str,
    duration: &str,
    price: u32,
    rating: f32,
    seats_available: u32,
    bus_type: &str,
    amenities: &[&str],
    operator_name: &str,
) -> Bus {
    Bus {
        id,
        route: Route {
            from: from.into(),
            to: to.into(),
        },
        travel_date: travel_date.into(),
        departure_time: departure_time.into(),
        arrival_time: arrival_time.into(),
        duration: duration.into(),
        price,
        rating,
        seats_available,
        bus_type: bus_type.into(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        operator_name: operator_name.into(),
    }
}

pub fn demo_catalog() -> Vec<Bus> {
    vec![
        entry(
            1,
            "Mumbai",
            "Pune",
            "2024-03-15",
            "07:00",
            "10:30",
            "3h 30m",
            450,
            4.4,
            18,
            "AC Seater",
            &["WiFi", "Charging Point", "Water Bottle"],
            "Neeta Travels",
        ),
        entry(
            2,
            "Mumbai",
            "Pune",
            "2024-03-15",
            "23:15",
            "02:45",
            "3h 30m",
            650,
            4.7,
            9,
            "AC Sleeper",
            &["WiFi", "Blanket", "Reading Light"],
            "Purple Metrolink",
        ),
        entry(
            3,
            "Mumbai",
            "Goa",
            "2024-03-15",
            "19:30",
            "07:00",
            "11h 30m",
            1200,
            4.2,
            22,
            "Volvo AC Semi-Sleeper",
            &["WiFi", "Charging Point", "Blanket", "Snacks"],
            "Paulo Travels",
        ),
        entry(
            4,
            "Pune",
            "Mumbai",
            "2024-03-16",
            "06:30",
            "10:00",
            "3h 30m",
            400,
            3.9,
            24,
            "Non-AC Seater",
            &["Water Bottle"],
            "Shivneri",
        ),
        entry(
            5,
            "Delhi",
            "Jaipur",
            "2024-03-15",
            "08:15",
            "13:45",
            "5h 30m",
            550,
            4.1,
            15,
            "AC Seater",
            &["WiFi", "Charging Point"],
            "RSRTC Deluxe",
        ),
        entry(
            6,
            "Delhi",
            "Jaipur",
            "2024-03-15",
            "22:00",
            "03:30",
            "5h 30m",
            750,
            4.5,
            6,
            "AC Sleeper",
            &["WiFi", "Blanket", "Charging Point"],
            "Zingbus",
        ),
        entry(
            7,
            "Bangalore",
            "Chennai",
            "2024-03-15",
            "14:00",
            "20:15",
            "6h 15m",
            700,
            4.3,
            12,
            "Volvo AC Multi-Axle",
            &["WiFi", "Charging Point", "Water Bottle"],
            "KPN Travels",
        ),
        entry(
            8,
            "Bangalore",
            "Hyderabad",
            "2024-03-16",
            "21:30",
            "06:00",
            "8h 30m",
            950,
            4.0,
            20,
            "AC Sleeper",
            &["Blanket", "Charging Point", "Snacks"],
            "Orange Tours",
        ),
        entry(
            9,
            "Mumbai",
            "Pune",
            "2024-03-16",
            "12:30",
            "16:15",
            "3h 45m",
            380,
            3.6,
            24,
            "Non-AC Seater",
            &[],
            "MSRTC",
        ),
        entry(
            10,
            "Chennai",
            "Bangalore",
            "2024-03-15",
            "06:45",
            "13:00",
            "6h 15m",
            680,
            4.6,
            10,
            "Volvo AC Multi-Axle",
            &["WiFi", "Reading Light", "Water Bottle"],
            "SRM Travels",
        ),
    ]
}
