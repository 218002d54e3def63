//! Resolution layer over the [`Store`].
//!
//! [`Library`] is the single owned state object: a cheaply clonable handle to
//! one store behind one mutex. Every operation locks exactly once for its
//! whole read or write, so id generation and append cannot interleave with
//! another caller.
//!
//! - [`query`]: list and get-by-id lookups
//! - [`mutation`]: add, update and delete for books and authors
//! - [`relations`]: book→author and author→books joins

mod mutation;
mod query;
mod relations;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::{IdMode, StoreSettings};
use crate::store::Store;

#[derive(Debug, Clone)]
pub struct Library {
    store: Arc<Mutex<Store>>,
}

impl Library {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn seeded(id_mode: IdMode) -> Self {
        Self::new(Store::seeded(id_mode))
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self::new(Store::from_settings(settings))
    }

    // The store only holds plain data and no operation leaves it half
    // written, so a poisoned lock is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let store = self.lock();
        f(&store)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut store = self.lock();
        f(&mut store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewBook;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_clones_share_one_store() {
        let library = Library::seeded(IdMode::Sequential);
        let other = library.clone();
        let book = other.add_book(NewBook::new("Shared"));
        assert_eq!(library.get_book(&book.id), Some(book));
    }

    #[test]
    fn test_concurrent_adds_get_distinct_ids() {
        let library = Library::seeded(IdMode::Random);
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let library = library.clone();
                thread::spawn(move || {
                    (0..50)
                        .map(|i| library.add_book(NewBook::new(format!("{}-{}", t, i))).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id));
            }
        }
        assert_eq!(library.list_books().len(), 2 + 8 * 50);
    }
}
