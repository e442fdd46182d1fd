use crate::data_store::{Entity, Repository, StoreError};
use std::sync::{Mutex, MutexGuard};

/// An in-memory [Repository] implementation, backed by a mutex-guarded vector.
///
/// Items are kept in insertion order, which is also the iteration order of [Repository::get_all].
/// This order is relevant to the booking manager: the first available room is the first room in
/// repository order without a conflicting booking.
#[derive(Default)]
pub struct MemoryRepository<T: Entity> {
    items: Mutex<Vec<T>>,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Create a repository pre-filled with the given items (in the given order)
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>, StoreError> {
        self.items.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T>
where
    T: Send,
{
    fn get_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: T::Id) -> Result<T, StoreError> {
        self.lock()?
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(StoreError::NotExisting)
    }

    fn add(&self, item: T) -> Result<(), StoreError> {
        let mut items = self.lock()?;
        if items.iter().any(|existing| existing.id() == item.id()) {
            return Err(StoreError::ConflictEntityExists);
        }
        items.push(item);
        Ok(())
    }

    fn edit(&self, item: T) -> Result<(), StoreError> {
        let mut items = self.lock()?;
        let existing = items
            .iter_mut()
            .find(|existing| existing.id() == item.id())
            .ok_or(StoreError::NotExisting)?;
        *existing = item;
        Ok(())
    }

    fn remove(&self, id: T::Id) -> Result<(), StoreError> {
        let mut items = self.lock()?;
        let length_before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == length_before {
            return Err(StoreError::NotExisting);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_store::models::Room;

    fn room(id: i32, description: &str) -> Room {
        Room {
            id,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_add_and_get() {
        let repository = MemoryRepository::new();
        repository.add(room(1, "Single room")).unwrap();
        repository.add(room(2, "Double room")).unwrap();

        assert_eq!(repository.get(2).unwrap(), room(2, "Double room"));
        assert!(matches!(
            repository.get(3).unwrap_err(),
            StoreError::NotExisting
        ));
    }

    #[test]
    fn test_add_existing_id_is_a_conflict() {
        let repository = MemoryRepository::new();
        repository.add(room(1, "Single room")).unwrap();
        assert!(matches!(
            repository.add(room(1, "Another room")).unwrap_err(),
            StoreError::ConflictEntityExists
        ));
    }

    #[test]
    fn test_get_all_preserves_insertion_order() {
        let repository = MemoryRepository::new();
        for id in [3, 1, 2] {
            repository.add(room(id, "room")).unwrap();
        }
        let ids: Vec<i32> = repository
            .get_all()
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_edit_replaces_item_with_same_id() {
        let repository = MemoryRepository::with_items(vec![room(1, "Single room")]);
        repository.edit(room(1, "Renovated single room")).unwrap();
        assert_eq!(
            repository.get(1).unwrap().description,
            "Renovated single room"
        );
        assert!(matches!(
            repository.edit(room(2, "Not stored")).unwrap_err(),
            StoreError::NotExisting
        ));
    }

    #[test]
    fn test_remove() {
        let repository =
            MemoryRepository::with_items(vec![room(1, "Single room"), room(2, "Double room")]);
        repository.remove(1).unwrap();
        assert_eq!(repository.get_all().unwrap(), vec![room(2, "Double room")]);
        assert!(matches!(
            repository.remove(1).unwrap_err(),
            StoreError::NotExisting
        ));
    }
}
