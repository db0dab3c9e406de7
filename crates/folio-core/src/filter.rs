use tracing::trace;

use crate::content::Project;
use crate::tags::TagSelection;

/// Search text and tag selection, each
/// independently editable.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct FilterState {
  pub search: String,
  pub tag:    TagSelection
}

impl FilterState {
  pub fn set_search(
    &mut self,
    search: impl Into<String>
  ) {
    self.search = search.into();
  }

  pub fn select_tag(
    &mut self,
    tag: TagSelection
  ) {
    self.tag = tag;
  }

  /// Whether either criterion narrows
  /// the catalog.
  pub fn is_active(&self) -> bool {
    !self.tag.is_all()
      || !self.search.trim().is_empty()
  }

  pub fn clear(&mut self) {
    *self = Self::default();
  }
}

/// Projects admitted by both the tag
/// selection and the search text, in
/// catalog order.
#[tracing::instrument(skip_all)]
pub fn filter_projects<'a>(
  catalog: &'a [Project],
  state: &FilterState
) -> Vec<&'a Project> {
  let query =
    state.search.trim().to_lowercase();

  let shown: Vec<&Project> = catalog
    .iter()
    .filter(|project| {
      state.tag.admits(project)
    })
    .filter(|project| {
      query.is_empty()
        || matches_query(project, &query)
    })
    .collect();

  trace!(
    shown = shown.len(),
    total = catalog.len(),
    "filtered projects"
  );
  shown
}

/// `query` must already be trimmed and
/// lower-cased.
fn matches_query(
  project: &Project,
  query: &str
) -> bool {
  project
    .title
    .to_lowercase()
    .contains(query)
    || project
      .blurb
      .to_lowercase()
      .contains(query)
    || project
      .tags
      .join(" ")
      .to_lowercase()
      .contains(query)
}
