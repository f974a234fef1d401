use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use super::models::{Book, BookPatch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Book ID is required")]
    MissingId,

    #[error("Book ID already exists")]
    Duplicate(String),

    #[error("Book not found")]
    NotFound(String),
}

/// In-memory book table keyed by id.
///
/// Every stored book's `id` equals its key; `replace` pins the id to the
/// key it was looked up by.
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<HashMap<String, Book>>,
}

impl BookStore {
    pub fn new(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: RwLock::new(
                books
                    .into_iter()
                    .map(|book| (book.id.clone(), book))
                    .collect(),
            ),
        }
    }

    /// The two titles the service starts with.
    pub fn seeded() -> Self {
        Self::new([
            Book::new("1", "1984", "George Orwell"),
            Book::new("2", "To Kill a Mockingbird", "Harper Lee"),
        ])
    }

    // Writers never panic mid-update, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every book; iteration order is unspecified.
    pub fn list(&self) -> HashMap<String, Book> {
        self.read().clone()
    }

    pub fn get(&self, id: &str) -> Result<Book, StoreError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn create(&self, book: Book) -> Result<Book, StoreError> {
        if book.id.is_empty() {
            return Err(StoreError::MissingId);
        }

        let mut books = self.write();
        if books.contains_key(&book.id) {
            return Err(StoreError::Duplicate(book.id));
        }
        books.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    /// Merge `patch` onto the stored record and return the result.
    pub fn replace(&self, id: &str, patch: BookPatch) -> Result<Book, StoreError> {
        let mut books = self.write();
        let book = books
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        patch.apply_to(book);
        book.id = id.to_string();
        Ok(book.clone())
    }

    pub fn delete(&self, id: &str) -> Result<Book, StoreError> {
        self.write()
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_two_books() {
        let store = BookStore::seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("1").unwrap().title, "1984");
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = BookStore::seeded();
        store
            .create(Book::new("1984-x", "Nineteen Eighty-Four", "George Orwell"))
            .unwrap();

        let book = store.get("1984-x").unwrap();
        assert_eq!(book.title, "Nineteen Eighty-Four");
        assert_eq!(book.author, "George Orwell");
    }

    #[test]
    fn duplicate_create_leaves_original() {
        let store = BookStore::seeded();
        let err = store
            .create(Book::new("1", "Animal Farm", "George Orwell"))
            .unwrap_err();

        assert_eq!(err, StoreError::Duplicate("1".to_string()));
        assert_eq!(store.get("1").unwrap().title, "1984");
    }

    #[test]
    fn create_requires_id() {
        let store = BookStore::default();
        assert_eq!(
            store.create(Book::new("", "Untitled", "Anon")),
            Err(StoreError::MissingId)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = BookStore::seeded();
        store.delete("1").unwrap();

        assert_eq!(store.get("1"), Err(StoreError::NotFound("1".to_string())));
        assert_eq!(store.delete("1"), Err(StoreError::NotFound("1".to_string())));
    }

    #[test]
    fn replace_merges_and_pins_id() {
        let store = BookStore::seeded();
        let patch = BookPatch {
            title: Some("Go Set a Watchman".to_string()),
            author: None,
        };

        let book = store.replace("2", patch).unwrap();
        assert_eq!(book, Book::new("2", "Go Set a Watchman", "Harper Lee"));
        assert_eq!(store.get("2").unwrap(), book);
        assert!(store.list().iter().all(|(key, book)| key == &book.id));
    }

    #[test]
    fn replace_unknown_is_not_found() {
        let store = BookStore::seeded();
        assert_eq!(
            store.replace("42", BookPatch::default()),
            Err(StoreError::NotFound("42".to_string()))
        );
        assert_eq!(store.len(), 2);
    }
}
