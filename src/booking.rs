// Domain model for homestay rooms and bookings
// These shapes mirror the REST payloads the booking flows consume; they are
// constructed at the API boundary, held in memory, and carry no state of
// their own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Base status of a room in the catalog. Only `available` rooms are ever
// offered as booking candidates, independent of date overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
        }
    }
}

// Lifecycle status of a booking. Everything except `cancelled` still
// occupies its rooms for the stay interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

// A room as returned by the room catalog endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub capacity: u32,
    // Whole currency units per night, no fractional part in this domain.
    pub price_per_night: u64,
    pub status: RoomStatus,
    #[serde(default)]
    pub amenities: Vec<String>,
}

// Half-open stay interval [check_in, check_out): the checkout day is free
// for new arrivals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayInterval {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayInterval {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    // Whole nights between check-in and check-out; 0 when the range is
    // inverted or empty, which callers use as "not yet a valid range".
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        if days > 0 {
            days as u32
        } else {
            0
        }
    }

    // True when the interval spans at least one night.
    pub fn is_valid(&self) -> bool {
        self.check_out > self.check_in
    }

    // Half-open overlap test, written as the three sub-conditions the
    // booking forms evaluate: our check-in falls inside `other`, our
    // check-out falls inside `other`, or we fully contain `other`.
    pub fn overlaps(&self, other: &StayInterval) -> bool {
        (self.check_in >= other.check_in && self.check_in < other.check_out)
            || (self.check_out > other.check_in && self.check_out <= other.check_out)
            || (self.check_in <= other.check_in && self.check_out >= other.check_out)
    }
}

// One booked room line inside a booking. Bookings may span multiple rooms;
// each line carries the nightly price and subtotal it was booked at.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRoom {
    #[serde(rename = "id")]
    pub room_id: i64,
    #[serde(rename = "name")]
    pub room_name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub capacity: u32,
    pub price_per_night: u64,
    pub nights: u32,
    pub subtotal: u64,
}

// An existing booking as read back from the booking list endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub booking_code: String,
    pub homestay_id: i64,
    pub rooms: Vec<BookingRoom>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub total_amount: u64,
    pub paid_amount: u64,
    pub status: BookingStatus,
}

impl Booking {
    pub fn stay(&self) -> StayInterval {
        StayInterval::new(self.check_in, self.check_out)
    }

    pub fn includes_room(&self, room_id: i64) -> bool {
        self.rooms.iter().any(|r| r.room_id == room_id)
    }

    // Whether this booking still occupies its rooms for the stay interval.
    pub fn blocks_rooms(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nights_for_regular_interval() {
        let stay = StayInterval::new(date(2024, 6, 1), date(2024, 6, 5));
        assert_eq!(stay.nights(), 4);
        assert!(stay.is_valid());
    }

    #[test]
    fn test_nights_for_empty_and_inverted_intervals() {
        let same_day = StayInterval::new(date(2024, 6, 1), date(2024, 6, 1));
        assert_eq!(same_day.nights(), 0);
        assert!(!same_day.is_valid());

        let inverted = StayInterval::new(date(2024, 6, 5), date(2024, 6, 1));
        assert_eq!(inverted.nights(), 0);
        assert!(!inverted.is_valid());
    }

    #[test]
    fn test_overlap_is_half_open() {
        let existing = StayInterval::new(date(2024, 6, 1), date(2024, 6, 5));

        // Checkout day is free for new arrivals.
        let adjacent = StayInterval::new(date(2024, 6, 5), date(2024, 6, 8));
        assert!(!adjacent.overlaps(&existing));
        assert!(!existing.overlaps(&adjacent));

        let overlapping = StayInterval::new(date(2024, 6, 4), date(2024, 6, 8));
        assert!(overlapping.overlaps(&existing));
        assert!(existing.overlaps(&overlapping));
    }

    #[test]
    fn test_booking_room_membership() {
        let booking = Booking {
            id: 7,
            booking_code: "BK-0007".to_string(),
            homestay_id: 1,
            rooms: vec![
                BookingRoom {
                    room_id: 101,
                    room_name: "Garden View".to_string(),
                    room_type: "double".to_string(),
                    capacity: 2,
                    price_per_night: 450_000,
                    nights: 2,
                    subtotal: 900_000,
                },
                BookingRoom {
                    room_id: 102,
                    room_name: "Family Loft".to_string(),
                    room_type: "family".to_string(),
                    capacity: 4,
                    price_per_night: 800_000,
                    nights: 2,
                    subtotal: 1_600_000,
                },
            ],
            check_in: date(2024, 7, 1),
            check_out: date(2024, 7, 3),
            nights: 2,
            total_amount: 2_500_000,
            paid_amount: 0,
            status: BookingStatus::Confirmed,
        };

        assert!(booking.includes_room(101));
        assert!(booking.includes_room(102));
        assert!(!booking.includes_room(103));
        assert!(booking.blocks_rooms());
        assert_eq!(booking.stay().nights(), 2);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&RoomStatus::Maintenance).unwrap(),
            "\"maintenance\""
        );
        assert_eq!(
            serde_json::from_str::<BookingStatus>("\"cancelled\"").unwrap(),
            BookingStatus::Cancelled
        );
        assert_eq!(BookingStatus::Pending.as_str(), "pending");
        assert_eq!(RoomStatus::Available.as_str(), "available");
    }
}
