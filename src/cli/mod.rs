//! Implementations of the CLI commands: listing rooms and bookings, creating a booking and
//! querying availability and occupancy.
//!
//! All commands operate on the JSON data file (path given as argument or via the
//! `BOOKING_DATA_FILE` environment variable), which is loaded into in-memory repositories for the
//! duration of the command.

use crate::booking_manager::BookingManager;
use crate::cli::file_io::LoadedStore;
use crate::cli_error::CliError;
use crate::data_store::models::Booking;
use crate::data_store::Repository;
use chrono::naive::NaiveDate;
use std::path::PathBuf;

pub mod file_io;
pub mod util;

pub fn print_room_list(data_file: Option<PathBuf>) -> Result<(), CliError> {
    let store = open_store(data_file)?.1;
    let rooms = store.room_repository.get_all()?;

    let mut table = comfy_table::Table::new();
    table
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED)
        .set_header(vec!["id", "description"])
        .add_rows(
            rooms
                .into_iter()
                .map(|room| [room.id.to_string(), room.description]),
        );

    println!("{table}");
    Ok(())
}

pub fn print_booking_list(data_file: Option<PathBuf>) -> Result<(), CliError> {
    let store = open_store(data_file)?.1;
    let bookings = store.booking_repository.get_all()?;

    let mut table = comfy_table::Table::new();
    table
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED)
        .set_header(vec!["id", "room", "start", "end", "active"])
        .add_rows(bookings.into_iter().map(|booking| {
            [
                booking.id.to_string(),
                booking
                    .room_id
                    .map(|id| id.to_string())
                    .unwrap_or(String::new()),
                booking.start_date.to_string(),
                booking.end_date.to_string(),
                booking.is_active.to_string(),
            ]
        }));

    println!("{table}");
    Ok(())
}

/// Create a new booking for the given period, if a room is available.
///
/// Dates not provided as command line options are queried interactively. The updated data file is
/// only written if the booking has actually been created.
pub fn book_room(
    data_file: Option<PathBuf>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), CliError> {
    let (path, store) = open_store(data_file)?;
    let start_date =
        start_date.unwrap_or_else(|| util::query_user("Start date of the booking (YYYY-MM-DD)"));
    let end_date =
        end_date.unwrap_or_else(|| util::query_user("End date of the booking (YYYY-MM-DD)"));

    let booking_id = store
        .booking_repository
        .get_all()?
        .iter()
        .map(|booking| booking.id)
        .max()
        .unwrap_or(0)
        + 1;
    let manager = BookingManager::new(
        store.booking_repository.clone(),
        store.room_repository.clone(),
    );

    if manager.create_booking(Booking::new_request(booking_id, start_date, end_date))? {
        let booking = store.booking_repository.get(booking_id)?;
        let room_id = booking.room_id.ok_or(CliError::UnexpectedStoreError(
            "Created booking has no room assigned".to_string(),
        ))?;
        file_io::save_data_to_file(&path, &store)?;
        println!(
            "Booking {} created: room {} from {} to {}",
            booking_id, room_id, start_date, end_date
        );
    } else {
        println!("No room is available from {} to {}.", start_date, end_date);
    }
    Ok(())
}

pub fn print_available_room(
    data_file: Option<PathBuf>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), CliError> {
    let store = open_store(data_file)?.1;
    let manager = BookingManager::new(
        store.booking_repository.clone(),
        store.room_repository.clone(),
    );

    match manager.find_available_room(start_date, end_date)? {
        Some(room_id) => {
            let room = store.room_repository.get(room_id)?;
            println!(
                "Room {} ({}) is available from {} to {}.",
                room.id, room.description, start_date, end_date
            );
        }
        None => println!("No room is available from {} to {}.", start_date, end_date),
    }
    Ok(())
}

pub fn print_fully_occupied_dates(
    data_file: Option<PathBuf>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), CliError> {
    let store = open_store(data_file)?.1;
    let manager = BookingManager::new(
        store.booking_repository.clone(),
        store.room_repository.clone(),
    );

    let dates = manager.get_fully_occupied_dates(start_date, end_date)?;
    if dates.is_empty() {
        println!(
            "No fully occupied dates between {} and {}.",
            start_date, end_date
        );
    } else {
        for date in dates {
            println!("{}", date);
        }
    }
    Ok(())
}

fn open_store(data_file: Option<PathBuf>) -> Result<(PathBuf, LoadedStore), CliError> {
    let path = match data_file {
        Some(path) => path,
        None => crate::setup::get_data_file_from_env()?,
    };
    let store = file_io::load_data_from_file(&path)?;
    Ok((path, store))
}
