//! # Sample Library
//!
//! A fifteen-book in-memory library. Search is a case-insensitive substring
//! match over title, author and genre; recommendations are other books of
//! the same genre.
//!
//! Details are derived from the selected row. Only a handful of titles carry
//! a long description, the rest fall back to [`NO_DESCRIPTION`].

use log::{debug, info};

use super::{BookDetail, BookSummary, Catalog};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

pub const NO_DESCRIPTION: &str = "No detailed description available for this book.";

// (title, author, genre) in display order
const LIBRARY: [(&str, &str, &str); 15] = [
    ("The Great Gatsby", "F. Scott Fitzgerald", "Classic Literature"),
    ("1984", "George Orwell", "Dystopian Fiction"),
    ("Pride and Prejudice", "Jane Austen", "Romance"),
    ("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
    ("Dune", "Frank Herbert", "Science Fiction"),
    ("To Kill a Mockingbird", "Harper Lee", "Classic Literature"),
    ("The Catcher in the Rye", "J.D. Salinger", "Classic Literature"),
    ("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy"),
    ("Brave New World", "Aldous Huxley", "Dystopian Fiction"),
    ("Jane Eyre", "Charlotte Brontë", "Gothic Fiction"),
    ("The Chronicles of Narnia", "C.S. Lewis", "Fantasy"),
    ("Foundation", "Isaac Asimov", "Science Fiction"),
    ("Fahrenheit 451", "Ray Bradbury", "Dystopian Fiction"),
    ("Little Women", "Louisa May Alcott", "Classic Literature"),
    ("The Handmaid's Tale", "Margaret Atwood", "Dystopian Fiction"),
];

const DESCRIPTIONS: [(&str, &str); 5] = [
    (
        "The Great Gatsby",
        "Set in the summer of 1922 on Long Island, New York, this timeless story follows the \
         mysterious millionaire Jay Gatsby and his obsession with the beautiful Daisy Buchanan. \
         Considered F. Scott Fitzgerald's magnum opus, The Great Gatsby explores themes of \
         decadence, idealism, social upheaval, and excess, creating a portrait of the Jazz Age \
         that has been described as a cautionary tale regarding the American Dream.",
    ),
    (
        "1984",
        "A dystopian social science fiction novel that follows Winston Smith, a disillusioned \
         citizen who dreams of rebellion against the totalitarian government of Oceania. Written \
         in 1949, Orwell's masterpiece presents a haunting vision of a future marked by perpetual \
         war, omnipresent surveillance, and the manipulation of history and language.",
    ),
    (
        "Pride and Prejudice",
        "A romantic novel following the emotional development of Elizabeth Bennet, who learns \
         the error of making hasty judgments and comes to appreciate the difference between \
         superficial goodness and actual goodness. Set in early 19th-century England, the novel \
         explores themes of love, marriage, social class, and character.",
    ),
    (
        "The Hobbit",
        "A fantasy novel that follows the quest of home-loving hobbit Bilbo Baggins to win a \
         share of the treasure guarded by Smaug the dragon. His journey takes him from \
         light-hearted beginnings in the Shire to more sinister experiences. A precursor to The \
         Lord of the Rings, this beloved classic has enchanted readers for generations.",
    ),
    (
        "Dune",
        "Set in the distant future amidst a feudal interstellar society, Dune tells the story of \
         young Paul Atreides, whose family accepts stewardship of the planet Arrakis. The only \
         source of the most valuable substance in the universe, 'the spice', Arrakis is also one \
         of the most dangerous planets. A stunning blend of adventure and mysticism, \
         environmentalism and politics.",
    ),
];

fn library() -> impl Iterator<Item = BookSummary> {
    LIBRARY
        .iter()
        .map(|(title, author, genre)| BookSummary::new(title, author, genre))
}

fn description_for(title: &str) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, d)| *d)
        .unwrap_or(NO_DESCRIPTION)
}

#[derive(Debug, Clone)]
pub struct SampleCatalog {
    recommendation_limit: usize,
}

impl SampleCatalog {
    pub fn new(recommendation_limit: usize) -> Self {
        Self {
            recommendation_limit,
        }
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_RECOMMENDATION_LIMIT)
    }
}

impl Catalog for SampleCatalog {
    fn name(&self) -> &str {
        "sample"
    }

    fn search(&self, query: &str) -> Vec<BookSummary> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            debug!("Empty query, returning full library");
            return library().collect();
        }

        let matches: Vec<BookSummary> = library()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
                    || book.genre.to_lowercase().contains(&needle)
            })
            .collect();
        info!("Search {:?} matched {} books", needle, matches.len());
        matches
    }

    fn details(&self, selected: &BookSummary) -> BookDetail {
        BookDetail {
            title: selected.title.clone(),
            author: selected.author.clone(),
            genre: selected.genre.clone(),
            description: description_for(&selected.title).to_string(),
        }
    }

    fn recommendations(&self, current: Option<&BookDetail>) -> Vec<BookSummary> {
        let Some(current) = current else {
            debug!("No current book, no recommendations");
            return Vec::new();
        };

        library()
            .filter(|book| book.genre == current.genre && book.title != current.title)
            .take(self.recommendation_limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(rows: &[BookSummary]) -> Vec<&str> {
        rows.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_whole_library_in_order() {
        let catalog = SampleCatalog::default();
        let all = catalog.search("   ");
        assert_eq!(all.len(), 15);
        assert_eq!(all[0].title, "The Great Gatsby");
        assert_eq!(all[14].title, "The Handmaid's Tale");
    }

    #[test]
    fn test_search_matches_author_case_insensitively() {
        let catalog = SampleCatalog::default();
        let rows = catalog.search("TOLKIEN");
        assert_eq!(titles(&rows), vec!["The Hobbit", "The Lord of the Rings"]);
    }

    #[test]
    fn test_search_matches_genre() {
        let catalog = SampleCatalog::default();
        let rows = catalog.search("science fiction");
        assert_eq!(titles(&rows), vec!["Dune", "Foundation"]);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = SampleCatalog::default();
        assert!(catalog.search("cookbook").is_empty());
    }

    #[test]
    fn test_details_follow_selection() {
        let catalog = SampleCatalog::default();
        let dune = BookSummary::new("Dune", "Frank Herbert", "Science Fiction");
        let detail = catalog.details(&dune);
        assert_eq!(detail.title, "Dune");
        assert_eq!(detail.author, "Frank Herbert");
        assert!(detail.description.starts_with("Set in the distant future"));
    }

    #[test]
    fn test_details_fallback_description() {
        let catalog = SampleCatalog::default();
        let eyre = BookSummary::new("Jane Eyre", "Charlotte Brontë", "Gothic Fiction");
        assert_eq!(catalog.details(&eyre).description, NO_DESCRIPTION);
    }

    #[test]
    fn test_recommendations_same_genre_excluding_current() {
        let catalog = SampleCatalog::default();
        let gatsby = catalog.details(&BookSummary::new(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Classic Literature",
        ));
        let recs = catalog.recommendations(Some(&gatsby));
        assert_eq!(
            titles(&recs),
            vec!["To Kill a Mockingbird", "The Catcher in the Rye", "Little Women"]
        );
    }

    #[test]
    fn test_recommendations_respect_limit() {
        let catalog = SampleCatalog::new(2);
        let orwell = catalog.details(&BookSummary::new("1984", "George Orwell", "Dystopian Fiction"));
        let recs = catalog.recommendations(Some(&orwell));
        assert_eq!(titles(&recs), vec!["Brave New World", "Fahrenheit 451"]);
    }

    #[test]
    fn test_recommendations_empty_without_match_or_current() {
        let catalog = SampleCatalog::default();
        let eyre = catalog.details(&BookSummary::new("Jane Eyre", "Charlotte Brontë", "Gothic Fiction"));
        assert!(catalog.recommendations(Some(&eyre)).is_empty());
        assert!(catalog.recommendations(None).is_empty());
    }
}
