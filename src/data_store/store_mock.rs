use crate::data_store::{Entity, Repository, StoreError};
use std::sync::Mutex;

/**
 * A mock [Repository] implementation for testing.
 *
 * The simulated store consists of the [RepositoryMockData] structure with a vector of entities,
 * which can be directly modified by the tests.
 *
 * The interface functions of this mock don't do any consistency checking. Instead, the
 * [RepositoryMockData::next_error] attribute can be set to simulate a store error on the next
 * interface call. The mock also counts the calls to `get_all`, so tests can verify how often the
 * booking manager queries its repositories.
 */
#[derive(Default)]
pub struct RepositoryMock<T: Entity> {
    pub data: Mutex<RepositoryMockData<T>>,
}

#[derive(Default)]
pub struct RepositoryMockData<T> {
    pub items: Vec<T>,
    /// If not none, the next call to a repository method will return this error.
    pub next_error: Option<StoreError>,
    /// Number of `get_all` calls performed on this mock so far
    pub get_all_calls: usize,
}

impl<T: Entity> RepositoryMock<T> {
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            data: Mutex::new(RepositoryMockData {
                items,
                next_error: None,
                get_all_calls: 0,
            }),
        }
    }
}

impl<T: Entity + Send> Repository<T> for RepositoryMock<T> {
    fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let mut data = self.data.lock().expect("Error while locking mutex.");
        data.get_all_calls += 1;
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        Ok(data.items.clone())
    }

    fn get(&self, id: T::Id) -> Result<T, StoreError> {
        let mut data = self.data.lock().expect("Error while locking mutex.");
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        data.items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(StoreError::NotExisting)
    }

    fn add(&self, item: T) -> Result<(), StoreError> {
        let mut data = self.data.lock().expect("Error while locking mutex.");
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        data.items.push(item);
        Ok(())
    }

    fn edit(&self, item: T) -> Result<(), StoreError> {
        let mut data = self.data.lock().expect("Error while locking mutex.");
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        let existing = data
            .items
            .iter_mut()
            .find(|existing| existing.id() == item.id())
            .ok_or(StoreError::NotExisting)?;
        *existing = item;
        Ok(())
    }

    fn remove(&self, id: T::Id) -> Result<(), StoreError> {
        let mut data = self.data.lock().expect("Error while locking mutex.");
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        data.items.retain(|item| item.id() != id);
        Ok(())
    }
}
