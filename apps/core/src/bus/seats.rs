//! Seat selection for a fixed 24-seat cabin, four across.
//!
//! Seat positions derive deterministically from the seat number; which
//! seats start out booked is random, so the rng is injected and tests pin
//! a seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::model::Bus;

pub const CABIN_SEATS: u32 = 24;
pub const SEATS_PER_ROW: u32 = 4;
/// At most this many seats can be selected for one booking.
pub const MAX_SELECTED: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub number: u32,
    pub row: u32,
    pub column: u32,
    pub is_booked: bool,
    pub is_selected: bool,
}

/// Row/column for a seat number: four across, numbered left to right,
/// front to back.
pub fn seat_position(number: u32) -> (u32, u32) {
    let row = (number + SEATS_PER_ROW - 1) / SEATS_PER_ROW;
    let column = ((number - 1) % SEATS_PER_ROW) + 1;
    (row, column)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    seats: Vec<Seat>,
}

impl SeatMap {
    /// Builds the cabin, randomly marking `24 - available` seats as already
    /// booked. An availability above the cabin size books nothing.
    pub fn generate(seats_available: u32, rng: &mut impl Rng) -> Self {
        let available = seats_available.min(CABIN_SEATS);
        let booked_count = (CABIN_SEATS - available) as usize;

        let mut booked: Vec<u32> = Vec::with_capacity(booked_count);
        while booked.len() < booked_count {
            let number = rng.gen_range(1..=CABIN_SEATS);
            if !booked.contains(&number) {
                booked.push(number);
            }
        }

        let seats = (1..=CABIN_SEATS)
            .map(|number| {
                let (row, column) = seat_position(number);
                Seat {
                    number,
                    row,
                    column,
                    is_booked: booked.contains(&number),
                    is_selected: false,
                }
            })
            .collect();
        SeatMap { seats }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Selects or deselects a seat. Booked seats, unknown numbers, and
    /// selections past the six-seat cap are all no-ops.
    pub fn toggle(&mut self, number: u32) {
        let selected = self.selected_count();
        if let Some(seat) = self.seats.iter_mut().find(|s| s.number == number) {
            if seat.is_booked {
                return;
            }
            if seat.is_selected {
                seat.is_selected = false;
            } else if selected < MAX_SELECTED {
                seat.is_selected = true;
            }
        }
    }

    pub fn clear_selection(&mut self) {
        for seat in &mut self.seats {
            seat.is_selected = false;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_selected).count()
    }

    /// Selected seat numbers in ascending order.
    pub fn selected_numbers(&self) -> Vec<u32> {
        self.seats
            .iter()
            .filter(|s| s.is_selected)
            .map(|s| s.number)
            .collect()
    }

    /// Builds the snapshot handed to the payment screen, or `None` when
    /// nothing is selected.
    pub fn pending_booking(&self, bus: &Bus) -> Option<PendingBooking> {
        let selected = self.selected_numbers();
        if selected.is_empty() {
            return None;
        }
        Some(PendingBooking {
            bus_id: bus.id,
            operator_name: bus.operator_name.clone(),
            route: format!("{} - {}", bus.route.from, bus.route.to),
            time: format!("{} - {}", bus.departure_time, bus.arrival_time),
            seats: selected.len(),
            total_amount: selected.len() as u32 * bus.price,
            selected_seats: selected,
        })
    }
}

/// Snapshot persisted under the "bookingData" key and consumed by the mock
/// payment screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBooking {
    pub bus_id: u32,
    pub operator_name: String,
    pub route: String,
    pub time: String,
    pub selected_seats: Vec<u32>,
    pub seats: usize,
    pub total_amount: u32,
}
