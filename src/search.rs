// Room search and filtering for the booking forms' room pickers
// Criteria-based narrowing of the room catalog, the availability-aware
// picker list, and the room statistics shown in the management console.

use crate::availability::is_room_available;
use crate::booking::{Booking, Room, RoomStatus, StayInterval};

// Filter criteria for the room catalog. `None` fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub max_price: Option<u64>,
    pub min_price: Option<u64>,
    pub room_types: Option<Vec<String>>,
    pub min_capacity: Option<u32>,
    pub name_contains: Option<String>,
}

// Narrow the catalog to rooms matching the criteria.
pub fn filter_rooms(rooms: &[Room], criteria: &RoomFilter) -> Vec<Room> {
    let mut filtered = Vec::new();

    for room in rooms {
        if !criteria
            .max_price
            .map_or(true, |max| room.price_per_night <= max)
        {
            continue;
        }

        if !criteria
            .min_price
            .map_or(true, |min| room.price_per_night >= min)
        {
            continue;
        }

        if !criteria
            .room_types
            .as_ref()
            .map_or(true, |types| types.contains(&room.room_type))
        {
            continue;
        }

        if !criteria
            .min_capacity
            .map_or(true, |guests| room.capacity >= guests)
        {
            continue;
        }

        if !criteria.name_contains.as_ref().map_or(true, |needle| {
            room.name.to_lowercase().contains(&needle.to_lowercase())
        }) {
            continue;
        }

        filtered.push(room.clone());
    }

    filtered
}

// The room-picker list: rooms that can still be added to the booking being
// built. Rooms already selected (`exclude_ids`) are left out, as are rooms
// whose base status or bookings rule them out for the requested stay.
pub fn bookable_rooms(
    rooms: &[Room],
    requested: Option<StayInterval>,
    existing: &[Booking],
    exclude_ids: &[i64],
) -> Vec<Room> {
    let bookable: Vec<Room> = rooms
        .iter()
        .filter(|room| !exclude_ids.contains(&room.id))
        .filter(|room| is_room_available(room, requested, existing))
        .cloned()
        .collect();

    tracing::debug!(
        candidates = rooms.len(),
        bookable = bookable.len(),
        "room picker list computed"
    );
    bookable
}

// Room statistics for the management console.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoomStatsReport {
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub maintenance_rooms: usize,
    pub average_price: u64,
    pub occupancy_rate: f64,
}

pub fn room_stats(rooms: &[Room]) -> RoomStatsReport {
    if rooms.is_empty() {
        return RoomStatsReport::default();
    }

    let mut stats = RoomStatsReport {
        total_rooms: rooms.len(),
        ..RoomStatsReport::default()
    };

    let mut price_sum: u64 = 0;
    for room in rooms {
        match room.status {
            RoomStatus::Available => stats.available_rooms += 1,
            RoomStatus::Occupied => stats.occupied_rooms += 1,
            RoomStatus::Maintenance => stats.maintenance_rooms += 1,
        }
        price_sum += room.price_per_night;
    }

    stats.average_price = price_sum / rooms.len() as u64;
    stats.occupancy_rate = stats.occupied_rooms as f64 / rooms.len() as f64 * 100.0;
    stats
}
