//! Fixed-table catalog. Inputs are accepted and ignored.

use log::debug;

use super::{BookDetail, BookSummary, Catalog};

const SEARCH_ROWS: [(&str, &str, &str); 3] = [
    ("The Great Gatsby", "F. Scott Fitzgerald", "Classic Literature"),
    ("1984", "George Orwell", "Dystopian Fiction"),
    ("Pride and Prejudice", "Jane Austen", "Romance"),
];

const RECOMMENDATION_ROWS: [(&str, &str, &str); 3] = [
    ("To Kill a Mockingbird", "Harper Lee", "Classic Literature"),
    ("The Catcher in the Rye", "J.D. Salinger", "Classic Literature"),
    ("Little Women", "Louisa May Alcott", "Classic Literature"),
];

fn rows(table: &[(&str, &str, &str)]) -> Vec<BookSummary> {
    table
        .iter()
        .map(|(title, author, genre)| BookSummary::new(title, author, genre))
        .collect()
}

/// Every call returns the same literal data.
///
/// `details` does not look at the selected row: whichever row was picked,
/// the details view shows The Great Gatsby.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderCatalog;

impl Catalog for PlaceholderCatalog {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn search(&self, query: &str) -> Vec<BookSummary> {
        debug!("placeholder search ignores query {:?}", query);
        rows(&SEARCH_ROWS)
    }

    fn details(&self, selected: &BookSummary) -> BookDetail {
        debug!("placeholder details ignores selection {:?}", selected.title);
        BookDetail {
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            genre: "Classic Literature".to_string(),
            description: "Set in the summer of 1922 on Long Island...".to_string(),
        }
    }

    fn recommendations(&self, _current: Option<&BookDetail>) -> Vec<BookSummary> {
        rows(&RECOMMENDATION_ROWS)
    }
}
