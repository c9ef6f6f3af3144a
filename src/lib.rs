// Core booking logic for the homestay booking application

// Export modules for each concern of the booking flows
pub mod availability;
pub mod booking;
pub mod payload;
pub mod pricing;
pub mod search;

// Re-export key types for convenience
pub use availability::{
    check_room, check_room_for_edit, is_room_available, unavailable_room_ids, Availability,
};
pub use booking::{Booking, BookingRoom, BookingStatus, Room, RoomStatus, StayInterval};
pub use payload::{parse_bookings, parse_calendar_date, parse_rooms, PayloadError};
pub use pricing::{booking_lines, nights_between, quote, total_amount, Quote};
pub use search::{bookable_rooms, filter_rooms, room_stats, RoomFilter, RoomStatsReport};
