//! The persistence abstraction of the booking core.
//!
//! All state lives behind the generic [Repository] trait, which provides a CRUD-like interface for
//! a single entity type, using the data models from the [models] module. The [BookingManager]
//! (see [crate::booking_manager]) only talks to its two injected repositories through this trait,
//! so callers are free to supply any implementation.
//!
//! The primary implementation is [memory::MemoryRepository], which keeps the entities in a
//! mutex-guarded vector and preserves insertion order. There is also a mock implementation for
//! unittests, which additionally allows injecting errors and counting interface calls.
//!
//! [BookingManager]: crate::booking_manager::BookingManager

pub mod memory;
pub mod models;
#[cfg(test)]
pub mod store_mock;

pub type RoomId = i32;
pub type BookingId = i32;

/// An entity type that can be managed by a [Repository]: it is identified by a copyable id value.
pub trait Entity: Clone {
    type Id: Copy + PartialEq;

    fn id(&self) -> Self::Id;
}

/// The repository contract consumed by the booking core.
///
/// All methods take `&self`; implementations are expected to use interior mutability, so a single
/// repository instance can be shared between the manager and other callers.
pub trait Repository<T: Entity>: Send + Sync {
    /// Get all stored items, in insertion order.
    fn get_all(&self) -> Result<Vec<T>, StoreError>;
    /// Get the item with the given id, or [StoreError::NotExisting].
    fn get(&self, id: T::Id) -> Result<T, StoreError>;
    /// Store a new item.
    ///
    /// Returns [StoreError::ConflictEntityExists] if an item with the same id is stored already.
    fn add(&self, item: T) -> Result<(), StoreError>;
    /// Replace the stored item with the same id, or return [StoreError::NotExisting].
    fn edit(&self, item: T) -> Result<(), StoreError>;
    /// Remove the item with the given id, or return [StoreError::NotExisting].
    fn remove(&self, id: T::Id) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    /// The requested entity does not exist
    NotExisting,
    /// The entity could not be created because an entity with the same id exists already.
    ConflictEntityExists,
    /// The lock guarding the stored data has been poisoned by a panicking thread
    LockPoisoned,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotExisting => f.write_str("Stored record does not exist."),
            Self::ConflictEntityExists => f.write_str("Stored record exists already."),
            Self::LockPoisoned => f.write_str("Lock of the stored data has been poisoned."),
        }
    }
}

impl std::error::Error for StoreError {}
