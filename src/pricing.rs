// Nights and booking total calculation
// The derived numbers both booking forms render and submit: nights for the
// chosen dates, a per-room line with subtotal, and the grand total.
// Amounts are whole currency units throughout, so plain integer sums.

use chrono::NaiveDate;

use crate::booking::{BookingRoom, Room, StayInterval};

// Whole-day difference between two calendar dates. 0 when the range is
// inverted or inputs are equal; callers read that as "not yet a valid
// range", not as an error.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    StayInterval::new(check_in, check_out).nights()
}

// Sum of price-per-night over the selected rooms for the given number of
// nights. The selection is expected to be deduplicated by room id upstream;
// no deduplication happens here.
pub fn total_amount(selected: &[Room], nights: u32) -> u64 {
    selected
        .iter()
        .map(|room| room.price_per_night * nights as u64)
        .sum()
}

// The per-room booking lines submitted with a new booking, in selection
// order.
pub fn booking_lines(selected: &[Room], nights: u32) -> Vec<BookingRoom> {
    selected
        .iter()
        .map(|room| BookingRoom {
            room_id: room.id,
            room_name: room.name.clone(),
            room_type: room.room_type.clone(),
            capacity: room.capacity,
            price_per_night: room.price_per_night,
            nights,
            subtotal: room.price_per_night * nights as u64,
        })
        .collect()
}

// Everything the booking summary panel shows for the current selection.
#[derive(Debug, Clone)]
pub struct Quote {
    pub nights: u32,
    pub lines: Vec<BookingRoom>,
    pub total: u64,
}

pub fn quote(selected: &[Room], stay: StayInterval) -> Quote {
    let nights = stay.nights();
    let lines = booking_lines(selected, nights);
    let total = lines.iter().map(|line| line.subtotal).sum();
    Quote {
        nights,
        lines,
        total,
    }
}
