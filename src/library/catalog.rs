//! The collection of books currently on the shelf.

use super::error::CirculationError;
use crate::domain::Book;

/// The books available for loan, in shelf order.
///
/// A `Catalog` is plain data. The circulation functions take `&self` or
/// `&mut self`, so when the catalog lives inside a [`Library`](super::Library)
/// they can only be reached through the library's lock. Several calls made
/// through the same [`CirculationDesk`](super::CirculationDesk) form a single
/// critical section.
///
/// ```
/// use library_circulation::domain::Book;
/// use library_circulation::library::Catalog;
///
/// let mut catalog = Catalog::stocked(2);
/// let book = catalog.recommend().unwrap();
/// assert_eq!(book, Book::numbered(0));
///
/// catalog.checkout(&book).unwrap();
/// assert!(!catalog.contains(&book));
///
/// catalog.checkin(book.clone()).unwrap();
/// assert!(catalog.contains(&book));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates a catalog holding `Book 0` through `Book nbooks-1`.
    pub fn stocked(nbooks: usize) -> Self {
        Self {
            books: (0..nbooks).map(Book::numbered).collect(),
        }
    }

    /// Creates a catalog from arbitrary titles. Repeated titles are kept once.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut catalog = Self::default();
        for book in books {
            let _ = catalog.checkin(book);
        }
        catalog
    }

    /// Recommends a book to borrow without taking it off the shelf.
    ///
    /// The recommendation is the first book on the shelf, so it stays the same
    /// until that book is checked out. It is only guaranteed to still be
    /// available if [`checkout`](Self::checkout) is called in the same critical
    /// section.
    pub fn recommend(&self) -> Option<Book> {
        self.books.first().cloned()
    }

    /// Takes `book` off the shelf.
    pub fn checkout(&mut self, book: &Book) -> Result<(), CirculationError> {
        match self.books.iter().position(|b| b == book) {
            Some(index) => {
                self.books.remove(index);
                Ok(())
            }
            None => Err(CirculationError::Unavailable(book.clone())),
        }
    }

    /// Puts `book` back at the end of the shelf.
    pub fn checkin(&mut self, book: Book) -> Result<(), CirculationError> {
        if self.contains(&book) {
            return Err(CirculationError::AlreadyReturned(book));
        }
        self.books.push(book);
        Ok(())
    }

    pub fn contains(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The books on the shelf, in recommendation order.
    pub fn available(&self) -> &[Book] {
        &self.books
    }
}
