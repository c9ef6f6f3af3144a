// Room availability evaluation for the booking flows
// Pure scan over caller-supplied room/booking snapshots; no I/O, no state,
// never panics. Both the guest and host booking forms go through these
// entry points instead of recomputing the conflict check inline.

use crate::booking::{Booking, Room, RoomStatus, StayInterval};

// Outcome of an availability check. "No dates selected yet" is its own
// state so callers cannot mistake an unconstrained listing for a confirmed
// availability result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    // No (or no valid) stay interval was requested; the room is merely not
    // ruled out yet.
    Unconstrained,
    // The requested interval does not overlap any accepted booking of the
    // room.
    Available,
    // The room's base status keeps it out of the catalog regardless of
    // dates.
    OutOfService(RoomStatus),
    // An accepted booking of this room overlaps the requested interval.
    Conflicting { booking_id: i64 },
}

impl Availability {
    // Whether the room can be added to the booking being built. Note that
    // `Unconstrained` counts as bookable: the forms list all rooms before
    // dates are picked.
    pub fn is_bookable(&self) -> bool {
        matches!(self, Availability::Unconstrained | Availability::Available)
    }

    pub fn has_conflict(&self) -> bool {
        matches!(self, Availability::Conflicting { .. })
    }
}

// First accepted booking of `room_id` whose stay overlaps `requested`.
// Cancelled bookings, bookings of other rooms, and the excluded booking
// (the one being edited, if any) never conflict.
fn first_conflict<'a>(
    room_id: i64,
    requested: &StayInterval,
    existing: &'a [Booking],
    exclude_booking: Option<i64>,
) -> Option<&'a Booking> {
    existing.iter().find(|booking| {
        if !booking.blocks_rooms() {
            return false;
        }
        if exclude_booking == Some(booking.id) {
            return false;
        }
        if !booking.includes_room(room_id) {
            return false;
        }
        requested.overlaps(&booking.stay())
    })
}

fn check_room_inner(
    room: &Room,
    requested: Option<StayInterval>,
    existing: &[Booking],
    exclude_booking: Option<i64>,
) -> Availability {
    // Base status gate comes before any date logic.
    if room.status != RoomStatus::Available {
        return Availability::OutOfService(room.status);
    }

    // An unset or degenerate interval is no constraint at all; rejecting
    // inverted ranges at submission time is the form's job.
    let requested = match requested {
        Some(stay) if stay.is_valid() => stay,
        _ => return Availability::Unconstrained,
    };

    match first_conflict(room.id, &requested, existing, exclude_booking) {
        Some(booking) => {
            tracing::debug!(
                room_id = room.id,
                booking_id = booking.id,
                "room conflicts with existing booking"
            );
            Availability::Conflicting {
                booking_id: booking.id,
            }
        }
        None => Availability::Available,
    }
}

// Evaluate a candidate room against the existing bookings for a requested
// stay. `None` means the guest has not picked dates yet.
pub fn check_room(
    room: &Room,
    requested: Option<StayInterval>,
    existing: &[Booking],
) -> Availability {
    check_room_inner(room, requested, existing, None)
}

// Same check from the edit-booking modal: the booking being edited must
// not conflict with itself.
pub fn check_room_for_edit(
    room: &Room,
    requested: Option<StayInterval>,
    existing: &[Booking],
    editing_booking_id: i64,
) -> Availability {
    check_room_inner(room, requested, existing, Some(editing_booking_id))
}

// Boolean convenience used by the room pickers and submit handlers.
pub fn is_room_available(
    room: &Room,
    requested: Option<StayInterval>,
    existing: &[Booking],
) -> bool {
    check_room(room, requested, existing).is_bookable()
}

// Which of the currently selected rooms are taken for the requested stay.
// Empty when no interval is chosen; ids are ascending and deduplicated
// (a room may appear in several conflicting bookings).
pub fn unavailable_room_ids(
    selected: &[Room],
    requested: Option<StayInterval>,
    existing: &[Booking],
) -> Vec<i64> {
    let requested = match requested {
        Some(stay) if stay.is_valid() => stay,
        _ => return Vec::new(),
    };

    let mut unavailable = std::collections::BTreeSet::new();
    for booking in existing {
        if !booking.blocks_rooms() {
            continue;
        }
        if !requested.overlaps(&booking.stay()) {
            continue;
        }
        for room in selected {
            if booking.includes_room(room.id) {
                unavailable.insert(room.id);
            }
        }
    }
    unavailable.into_iter().collect()
}
