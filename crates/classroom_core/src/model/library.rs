//! In-memory lending library from the single-class lab.
//!
//! # Responsibility
//! - Keep the book list and who currently rents each title.
//!
//! # Invariants
//! - Titles are matched exactly; the first match wins.
//! - A book that is not rented carries empty rental details.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Who rents a book and until when. Empty strings mean "on the shelf".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalDetails {
    pub student_name: String,
    pub due_date: String,
}

impl RentalDetails {
    pub fn is_rented(&self) -> bool {
        !self.student_name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub rental: RentalDetails,
}

impl Book {
    pub fn on_shelf(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rental: RentalDetails::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    BookNotFound(String),
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookNotFound(title) => write!(f, "book not found: {title}"),
        }
    }
}

impl Error for LibraryError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    pub fn find_renting_info(&self, title: &str) -> Option<&RentalDetails> {
        self.find_book(title).map(|book| &book.rental)
    }

    pub fn add_book(&mut self, title: impl Into<String>) {
        self.books.push(Book::on_shelf(title));
    }

    /// Overwrites the rental details of `title`.
    pub fn rent_book(
        &mut self,
        title: &str,
        student_name: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Result<(), LibraryError> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.title == title)
            .ok_or_else(|| LibraryError::BookNotFound(title.to_string()))?;

        book.rental = RentalDetails {
            student_name: student_name.into(),
            due_date: due_date.into(),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Book, Library, LibraryError, RentalDetails};

    fn library() -> Library {
        Library::new(vec![
            Book {
                title: "lord_of_the_rings".to_string(),
                rental: RentalDetails {
                    student_name: "Jeff".to_string(),
                    due_date: "01/12/2016".to_string(),
                },
            },
            Book::on_shelf("colour_of_magic"),
        ])
    }

    #[test]
    fn find_book_returns_none_for_unknown_title() {
        let library = library();
        assert_eq!(
            library.find_book("colour_of_magic").map(|b| b.title.as_str()),
            Some("colour_of_magic")
        );
        assert!(library.find_book("harry_potter").is_none());
    }

    #[test]
    fn renting_info_reports_current_renter() {
        let library = library();
        let info = library.find_renting_info("lord_of_the_rings").unwrap();
        assert_eq!(info.student_name, "Jeff");
        assert_eq!(info.due_date, "01/12/2016");
        assert!(info.is_rented());
    }

    #[test]
    fn added_book_starts_on_shelf() {
        let mut library = library();
        library.add_book("1984");

        assert_eq!(library.books().len(), 3);
        let added = library.find_book("1984").unwrap();
        assert_eq!(added, &Book::on_shelf("1984"));
        assert!(!added.rental.is_rented());
    }

    #[test]
    fn rent_book_overwrites_details() {
        let mut library = library();
        library
            .rent_book("colour_of_magic", "Paul", "05/12/2016")
            .unwrap();

        let info = library.find_renting_info("colour_of_magic").unwrap();
        assert_eq!(info.student_name, "Paul");
        assert_eq!(info.due_date, "05/12/2016");
    }

    #[test]
    fn renting_unknown_book_is_an_error() {
        let mut library = library();
        let err = library.rent_book("harry_potter", "Paul", "05/12/2016");
        assert_eq!(
            err,
            Err(LibraryError::BookNotFound("harry_potter".to_string()))
        );
    }
}
