use folio_core::theme::memory::{
    FixedAppearance, MemoryStore, RecordingSurface,
};
use folio_core::{
    FilterState, Portfolio, TagIndex, TagSelection, Theme, ThemeController, filter_projects,
};

fn titles(projects: &[&folio_core::Project]) -> Vec<String> {
    projects.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn embedded_catalog_filtering() {
    let portfolio = Portfolio::embedded().expect("embedded content parses");
    let label = portfolio.site.all_tags_label.as_str();

    let index = TagIndex::build(&portfolio.projects, label);
    let labels = index.labels(label);
    assert_eq!(labels[0], "All");
    assert_eq!(&labels[1..4], &["Python", "Web Scraping", "BeautifulSoup"]);
    assert_eq!(labels.len(), 13);

    let mut state = FilterState::default();
    let everything = filter_projects(&portfolio.projects, &state);
    assert_eq!(everything.len(), portfolio.projects.len());

    for query in ["titanic", "survival", "prediction", "scikit", "TITANIC"] {
        state.set_search(query);
        assert_eq!(
            titles(&filter_projects(&portfolio.projects, &state)),
            vec!["Titanic Survival Prediction".to_string()],
            "query {query:?}"
        );
    }

    state.set_search("sql");
    let sql = filter_projects(&portfolio.projects, &state);
    assert!(sql.iter().all(|p| p.title != "Titanic Survival Prediction"));

    state.select_tag(TagSelection::tag("MySQL"));
    state.set_search("quiz");
    assert_eq!(
        titles(&filter_projects(&portfolio.projects, &state)),
        vec!["Quiz Management System (MySQL)".to_string()]
    );

    state.set_search("tableau");
    assert!(filter_projects(&portfolio.projects, &state).is_empty());

    state.clear();
    assert_eq!(
        filter_projects(&portfolio.projects, &state).len(),
        portfolio.projects.len()
    );
}

#[test]
fn every_indexed_tag_selects_at_least_one_project() {
    let portfolio = Portfolio::embedded().expect("embedded content parses");
    let index = TagIndex::build(&portfolio.projects, &portfolio.site.all_tags_label);

    for entry in index.entries() {
        let state = FilterState {
            search: String::new(),
            tag: entry.clone(),
        };
        assert!(
            !filter_projects(&portfolio.projects, &state).is_empty(),
            "tag {entry:?} selects nothing"
        );
    }
}

#[test]
fn theme_init_scenarios() {
    let config = Portfolio::embedded().expect("embedded content parses").site;

    // Persisted dark beats a light system preference.
    let controller = ThemeController::initialize(
        &config,
        MemoryStore::with_entry("theme", "dark"),
        &FixedAppearance(Some(false)),
        RecordingSurface::default(),
    );
    assert_eq!(controller.theme(), Theme::Dark);

    // System preference is used, and storage stays untouched until a toggle.
    let mut controller = ThemeController::initialize(
        &config,
        MemoryStore::default(),
        &FixedAppearance(Some(true)),
        RecordingSurface::default(),
    );
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(controller.store().get("theme"), None);
    controller.toggle();
    controller.toggle();
    assert_eq!(controller.store().get("theme"), Some("dark".to_string()));

    // Broken storage and no preference query.
    let mut controller = ThemeController::initialize(
        &config,
        MemoryStore::unavailable(),
        &FixedAppearance(None),
        RecordingSurface::default(),
    );
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.surface().dark(), Some(false));
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.surface().dark(), Some(true));
}
