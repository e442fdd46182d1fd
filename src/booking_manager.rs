//! The decision-making core of the hotel booking domain: the [BookingManager].
//!
//! The manager is stateless per call; all state lives in the two injected [Repository] instances
//! (one for bookings, one for rooms). Each operation queries each repository at most once and
//! evaluates the booking rules on the returned snapshots.

use crate::data_store::models::{Booking, Room};
use crate::data_store::{Repository, RoomId, StoreError};
use chrono::naive::NaiveDate;
use log::{debug, info};
use std::sync::Arc;

pub struct BookingManager {
    booking_repository: Arc<dyn Repository<Booking>>,
    room_repository: Arc<dyn Repository<Room>>,
}

impl BookingManager {
    pub fn new(
        booking_repository: Arc<dyn Repository<Booking>>,
        room_repository: Arc<dyn Repository<Room>>,
    ) -> Self {
        Self {
            booking_repository,
            room_repository,
        }
    }

    /// Find the first room without a conflicting active booking in the given period.
    ///
    /// Rooms are checked in repository order, so the first available room (by insertion order)
    /// wins. A booking conflicts if it is active, assigned to the room and its period overlaps the
    /// requested period (boundary dates included).
    ///
    /// # return value
    /// - `Ok(Some(room_id))` with the id of the first available room
    /// - `Ok(None)` if no room is available in the given period
    /// - `Err(BookingError::StartDateNotInFuture)` if `start_date` is not strictly after the
    ///   current date
    pub fn find_available_room(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<RoomId>, BookingError> {
        if start_date <= today() {
            return Err(BookingError::StartDateNotInFuture);
        }

        let rooms = self.room_repository.get_all()?;
        let bookings = self.booking_repository.get_all()?;

        let available_room = rooms.iter().map(|room| room.id).find(|room_id| {
            !bookings.iter().any(|booking| {
                booking.is_active
                    && booking.room_id == Some(*room_id)
                    && booking.overlaps(start_date, end_date)
            })
        });
        debug!(
            "Availability check for {} to {}: {:?}",
            start_date, end_date, available_room
        );
        Ok(available_room)
    }

    /// Try to create the given booking request.
    ///
    /// If a room is available for the requested period, it is assigned to the booking, the booking
    /// is activated and persisted, and `Ok(true)` is returned. If no room is available (including
    /// the case of an empty room repository), `Ok(false)` is returned and nothing is persisted.
    ///
    /// The only error paths are the date validation of [Self::find_available_room] and failures of
    /// the underlying repositories.
    pub fn create_booking(&self, mut booking: Booking) -> Result<bool, BookingError> {
        match self.find_available_room(booking.start_date, booking.end_date)? {
            Some(room_id) => {
                booking.room_id = Some(room_id);
                booking.is_active = true;
                info!(
                    "Creating booking {} for room {} from {} to {}",
                    booking.id, room_id, booking.start_date, booking.end_date
                );
                self.booking_repository.add(booking)?;
                Ok(true)
            }
            None => {
                debug!(
                    "No room available from {} to {}, booking {} not created",
                    booking.start_date, booking.end_date, booking.id
                );
                Ok(false)
            }
        }
    }

    /// Get all dates in the period `[start_date, end_date]` on which every room is covered by an
    /// active booking.
    ///
    /// The returned dates are in ascending order. Both boundary dates are included in the checked
    /// period; dates after `end_date` are never considered. Each repository is queried exactly
    /// once, independently of the length of the period.
    ///
    /// Returns `Err(BookingError::StartDateAfterEndDate)` if `start_date` is later than
    /// `end_date`.
    pub fn get_fully_occupied_dates(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<NaiveDate>, BookingError> {
        if start_date > end_date {
            return Err(BookingError::StartDateAfterEndDate);
        }

        let rooms = self.room_repository.get_all()?;
        let bookings = self.booking_repository.get_all()?;
        let active_bookings: Vec<&Booking> =
            bookings.iter().filter(|booking| booking.is_active).collect();

        Ok(start_date
            .iter_days()
            .take_while(|date| *date <= end_date)
            .filter(|date| {
                let occupied_rooms = rooms
                    .iter()
                    .filter(|room| {
                        active_bookings
                            .iter()
                            .any(|booking| booking.room_id == Some(room.id) && booking.covers(*date))
                    })
                    .count();
                occupied_rooms == rooms.len()
            })
            .collect())
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug)]
pub enum BookingError {
    /// The requested start date is not strictly after the current date
    StartDateNotInFuture,
    /// The requested start date is later than the requested end date
    StartDateAfterEndDate,
    /// One of the underlying repositories failed
    Store(StoreError),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartDateNotInFuture => f.write_str("The start date must be in the future."),
            Self::StartDateAfterEndDate => {
                f.write_str("The start date must not be later than the end date.")
            }
            Self::Store(e) => write!(f, "Error in the underlying repository: {}", e),
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for BookingError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
