// API boundary for room and booking payloads
// The REST responses carry loosely typed fields (optional capacity and
// amenities, date strings that sometimes include a time component, free-form
// status strings). They are resolved into the typed domain model exactly
// once, here, so the rest of the crate never re-checks them.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::booking::{Booking, BookingRoom, BookingStatus, Room, RoomStatus};

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("unknown {field} status: {value}")]
    UnknownStatus { field: &'static str, value: String },
}

// Room as it arrives from the catalog endpoints. `price` is the nightly
// price; capacity and amenities are frequently missing from older records.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub capacity: Option<u32>,
    pub price: u64,
    pub status: String,
    pub amenities: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRoomPayload {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub capacity: Option<u32>,
    pub price_per_night: u64,
    pub nights: u32,
    pub subtotal: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub id: i64,
    pub booking_code: Option<String>,
    pub homestay_id: i64,
    pub rooms: Vec<BookingRoomPayload>,
    pub check_in: String,
    pub check_out: String,
    pub nights: Option<u32>,
    pub total_amount: u64,
    pub paid_amount: Option<u64>,
    pub status: String,
}

// Parse a calendar date, never a datetime. Some endpoints return bare
// `YYYY-MM-DD`, others an ISO datetime; the time component is dropped
// rather than interpreted, so the date never shifts across timezones.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, PayloadError> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| PayloadError::InvalidDate(value.to_string()))
}

fn parse_room_status(value: &str) -> Result<RoomStatus, PayloadError> {
    match value {
        "available" => Ok(RoomStatus::Available),
        "occupied" => Ok(RoomStatus::Occupied),
        "maintenance" => Ok(RoomStatus::Maintenance),
        other => Err(PayloadError::UnknownStatus {
            field: "room",
            value: other.to_string(),
        }),
    }
}

fn parse_booking_status(value: &str) -> Result<BookingStatus, PayloadError> {
    match value {
        "pending" => Ok(BookingStatus::Pending),
        "confirmed" => Ok(BookingStatus::Confirmed),
        "completed" => Ok(BookingStatus::Completed),
        "cancelled" => Ok(BookingStatus::Cancelled),
        other => Err(PayloadError::UnknownStatus {
            field: "booking",
            value: other.to_string(),
        }),
    }
}

impl TryFrom<RoomPayload> for Room {
    type Error = PayloadError;

    fn try_from(payload: RoomPayload) -> Result<Self, Self::Error> {
        let status = parse_room_status(&payload.status)?;
        Ok(Room {
            id: payload.id,
            name: payload.name,
            room_type: payload.room_type,
            // Older records predate the capacity column; one guest is the
            // floor the create form enforces.
            capacity: payload.capacity.unwrap_or(1),
            price_per_night: payload.price,
            status,
            amenities: payload.amenities.unwrap_or_default(),
        })
    }
}

impl TryFrom<BookingPayload> for Booking {
    type Error = PayloadError;

    fn try_from(payload: BookingPayload) -> Result<Self, Self::Error> {
        let status = parse_booking_status(&payload.status)?;
        let check_in = parse_calendar_date(&payload.check_in)?;
        let check_out = parse_calendar_date(&payload.check_out)?;

        let rooms: Vec<BookingRoom> = payload
            .rooms
            .into_iter()
            .map(|room| {
                let subtotal = room
                    .subtotal
                    .unwrap_or(room.price_per_night * room.nights as u64);
                BookingRoom {
                    room_id: room.id,
                    room_name: room.name,
                    room_type: room.room_type,
                    capacity: room.capacity.unwrap_or(1),
                    price_per_night: room.price_per_night,
                    nights: room.nights,
                    subtotal,
                }
            })
            .collect();

        let nights = payload
            .nights
            .unwrap_or_else(|| crate::pricing::nights_between(check_in, check_out));

        Ok(Booking {
            id: payload.id,
            booking_code: payload.booking_code.unwrap_or_default(),
            homestay_id: payload.homestay_id,
            rooms,
            check_in,
            check_out,
            nights,
            total_amount: payload.total_amount,
            paid_amount: payload.paid_amount.unwrap_or(0),
            status,
        })
    }
}

// Parse a room list response body into domain rooms.
pub fn parse_rooms(json: &str) -> Result<Vec<Room>, PayloadError> {
    let payloads: Vec<RoomPayload> = serde_json::from_str(json)?;
    payloads.into_iter().map(Room::try_from).collect()
}

// Parse a booking list response body into domain bookings.
pub fn parse_bookings(json: &str) -> Result<Vec<Booking>, PayloadError> {
    let payloads: Vec<BookingPayload> = serde_json::from_str(json)?;
    payloads.into_iter().map(Booking::try_from).collect()
}
