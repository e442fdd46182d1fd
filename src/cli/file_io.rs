use crate::cli_error::CliError;
use crate::data_store::memory::MemoryRepository;
use crate::data_store::models::{Booking, Room};
use crate::data_store::Repository;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

/// The document format of the JSON data file
#[derive(Serialize, Deserialize)]
pub(crate) struct SavedData {
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// The in-memory repositories populated from a data file
pub struct LoadedStore {
    pub room_repository: Arc<MemoryRepository<Room>>,
    pub booking_repository: Arc<MemoryRepository<Booking>>,
}

pub fn load_data_from_file(path: &Path) -> Result<LoadedStore, CliError> {
    let f = File::open(path).map_err(|e| {
        CliError::FileError(format!("Could not open {:?} for reading: {}", path, e))
    })?;
    let data: SavedData = serde_json::from_reader(BufReader::new(f))?;

    Ok(LoadedStore {
        room_repository: Arc::new(MemoryRepository::with_items(data.rooms)),
        booking_repository: Arc::new(MemoryRepository::with_items(data.bookings)),
    })
}

pub fn save_data_to_file(path: &Path, store: &LoadedStore) -> Result<(), CliError> {
    let data = SavedData {
        rooms: store.room_repository.get_all()?,
        bookings: store.booking_repository.get_all()?,
    };

    let f = File::create(path).map_err(|e| {
        CliError::FileError(format!(
            "Could not create or open {:?} for writing: {}",
            path, e
        ))
    })?;
    serde_json::to_writer_pretty(BufWriter::new(f), &data)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_saved_data_document() {
        let document = r#"{
            "rooms": [
                {"id": 1, "description": "Single room"},
                {"id": 2, "description": "Double room"}
            ],
            "bookings": [
                {
                    "id": 1,
                    "room_id": 1,
                    "start_date": "2026-09-10",
                    "end_date": "2026-09-12",
                    "is_active": true
                }
            ]
        }"#;
        let data: SavedData = serde_json::from_str(document).unwrap();
        assert_eq!(data.rooms.len(), 2);
        assert_eq!(data.rooms[1].description, "Double room");
        assert_eq!(data.bookings.len(), 1);
        assert_eq!(data.bookings[0].room_id, Some(1));
        assert_eq!(data.bookings[0].start_date, "2026-09-10".parse().unwrap());
        assert!(data.bookings[0].is_active);
    }

    #[test]
    fn test_parse_saved_data_document_without_bookings() {
        let document = r#"{"rooms": []}"#;
        let data: SavedData = serde_json::from_str(document).unwrap();
        assert!(data.rooms.is_empty());
        assert!(data.bookings.is_empty());
    }
}
