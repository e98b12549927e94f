use book_discovery::catalog::{BookDetail, BookSummary, PlaceholderCatalog, SampleCatalog};
use book_discovery::core::action::{Action, Effect, update};
use book_discovery::core::state::{App, Listing, ViewState};

// ============================================================================
// Helper Functions
// ============================================================================

fn placeholder_app() -> App {
    App::new(Box::new(PlaceholderCatalog))
}

fn expected_rows() -> Vec<BookSummary> {
    vec![
        BookSummary::new("The Great Gatsby", "F. Scott Fitzgerald", "Classic Literature"),
        BookSummary::new("1984", "George Orwell", "Dystopian Fiction"),
        BookSummary::new("Pride and Prejudice", "Jane Austen", "Romance"),
    ]
}

fn expected_detail() -> BookDetail {
    BookDetail {
        title: "The Great Gatsby".to_string(),
        author: "F. Scott Fitzgerald".to_string(),
        description: "Set in the summer of 1922 on Long Island...".to_string(),
        genre: "Classic Literature".to_string(),
    }
}

fn view_row(app: &mut App, listing: Listing, index: usize) {
    update(app, Action::ViewDetails { listing, index });
}

// ============================================================================
// Placeholder Catalog Contract
// ============================================================================

#[test]
fn test_search_anything_returns_fixed_rows() {
    let mut app = placeholder_app();
    for query in ["anything", "", "dune", "   tolkien  "] {
        update(&mut app, Action::Search(query.to_string()));
        assert_eq!(app.results, expected_rows(), "query {query:?}");
        assert_eq!(app.view, ViewState::Search);
    }
}

#[test]
fn test_any_selected_row_yields_same_detail() {
    for index in 0..3 {
        let mut app = placeholder_app();
        update(&mut app, Action::Search("anything".to_string()));
        view_row(&mut app, Listing::Results, index);
        assert_eq!(app.view, ViewState::Details);
        assert_eq!(app.current, Some(expected_detail()), "row {index}");
    }
}

#[test]
fn test_recommendations_are_fixed_three_rows() {
    let mut app = placeholder_app();
    update(&mut app, Action::GetRecommendations);
    let first = app.recommendations.clone();
    assert_eq!(first.len(), 3);

    view_row(&mut app, Listing::Results, 2);
    update(&mut app, Action::GetRecommendations);
    assert_eq!(app.view, ViewState::Recommendations);
    assert_eq!(app.recommendations, first);
}

#[test]
fn test_back_to_search_from_every_view() {
    for start in ViewState::ALL {
        let mut app = placeholder_app();
        update(&mut app, Action::ShowView(start));
        let effect = update(&mut app, Action::BackToSearch);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.view, ViewState::Search, "from {start:?}");
    }
}

#[test]
fn test_search_details_recommendations_search_cycle() {
    let mut app = placeholder_app();
    update(&mut app, Action::Search("gatsby".to_string()));
    assert_eq!(app.view, ViewState::Search);
    view_row(&mut app, Listing::Results, 0);
    assert_eq!(app.view, ViewState::Details);
    update(&mut app, Action::GetRecommendations);
    assert_eq!(app.view, ViewState::Recommendations);
    update(&mut app, Action::BackToSearch);
    assert_eq!(app.view, ViewState::Search);
}

// ============================================================================
// Sample Catalog
// ============================================================================

#[test]
fn test_sample_details_follow_selection() {
    let mut app = App::new(Box::new(SampleCatalog::default()));
    update(&mut app, Action::Search("fantasy".to_string()));
    let titles: Vec<&str> = app.results.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["The Hobbit", "The Lord of the Rings", "The Chronicles of Narnia"]
    );

    view_row(&mut app, Listing::Results, 0);
    let detail = app.current.clone().unwrap();
    assert_eq!(detail.title, "The Hobbit");
    assert!(detail.description.contains("Bilbo Baggins"));

    update(&mut app, Action::GetRecommendations);
    let recs: Vec<&str> = app.recommendations.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(recs, vec!["The Lord of the Rings", "The Chronicles of Narnia"]);
}

#[test]
fn test_quit_effect() {
    let mut app = placeholder_app();
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
