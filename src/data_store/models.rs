use crate::data_store::{BookingId, Entity, RoomId};
use chrono::naive::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> RoomId {
        self.id
    }
}

/// A reservation of a single room for a (date-only) period.
///
/// A freshly requested booking has no room assigned yet; the room is selected and assigned by the
/// booking manager. Cancelled bookings stay in the store with `is_active = false` and don't take
/// part in availability and occupancy checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: Option<RoomId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl Booking {
    /// Create a booking request for the given period, with no room assigned yet.
    pub fn new_request(id: BookingId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id,
            room_id: None,
            start_date,
            end_date,
            is_active: false,
        }
    }

    /// Check if the booking period covers the given date (both boundary dates included)
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Check if the booking period overlaps the given period (both boundary dates of both periods
    /// included)
    pub fn overlaps(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        self.start_date <= end_date && self.end_date >= start_date
    }
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> BookingId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn booking(start: &str, end: &str) -> Booking {
        Booking {
            id: 1,
            room_id: Some(1),
            start_date: date(start),
            end_date: date(end),
            is_active: true,
        }
    }

    #[test]
    fn test_covers_includes_both_boundaries() {
        let b = booking("2026-09-10", "2026-09-12");
        assert!(!b.covers(date("2026-09-09")));
        assert!(b.covers(date("2026-09-10")));
        assert!(b.covers(date("2026-09-11")));
        assert!(b.covers(date("2026-09-12")));
        assert!(!b.covers(date("2026-09-13")));
    }

    #[test]
    fn test_overlaps_boundary_cases() {
        let b = booking("2026-09-10", "2026-09-12");
        // touching at a single boundary date counts as overlap
        assert!(b.overlaps(date("2026-09-12"), date("2026-09-14")));
        assert!(b.overlaps(date("2026-09-08"), date("2026-09-10")));
        // fully enclosing and fully enclosed periods
        assert!(b.overlaps(date("2026-09-08"), date("2026-09-14")));
        assert!(b.overlaps(date("2026-09-11"), date("2026-09-11")));
        // disjoint periods
        assert!(!b.overlaps(date("2026-09-13"), date("2026-09-14")));
        assert!(!b.overlaps(date("2026-09-08"), date("2026-09-09")));
    }
}
