use std::collections::HashSet;

use tracing::{
  trace,
  warn
};

use crate::content::Project;

/// A tag filter value. `All` lives
/// outside the tag namespace, so a real
/// tag spelled like its label stays
/// selectable.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum TagSelection {
  #[default]
  All,
  Tag(String)
}

impl TagSelection {
  pub fn tag(
    value: impl Into<String>
  ) -> Self {
    Self::Tag(value.into())
  }

  pub fn is_all(&self) -> bool {
    matches!(self, Self::All)
  }

  pub fn label<'a>(
    &'a self,
    all_label: &'a str
  ) -> &'a str {
    match self {
      | Self::All => all_label,
      | Self::Tag(tag) => tag
    }
  }

  /// Identity of the entry, unique
  /// within a `TagIndex` even when a
  /// tag is spelled like the catch-all
  /// label.
  pub fn key(&self) -> String {
    match self {
      | Self::All => "all".to_string(),
      | Self::Tag(tag) => {
        format!("tag:{tag}")
      }
    }
  }

  /// Exact, case-sensitive membership.
  pub fn admits(
    &self,
    project: &Project
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Tag(tag) => {
        project.has_tag(tag)
      }
    }
  }
}

/// Every selectable tag filter, `All`
/// first, then tags in first-seen
/// catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIndex {
  entries: Vec<TagSelection>
}

impl TagIndex {
  #[tracing::instrument(skip(catalog))]
  pub fn build(
    catalog: &[Project],
    all_label: &str
  ) -> Self {
    let mut seen = HashSet::new();
    let mut entries =
      vec![TagSelection::All];

    for tag in catalog
      .iter()
      .flat_map(|project| &project.tags)
    {
      if !seen.insert(tag.as_str()) {
        continue;
      }
      if tag == all_label {
        warn!(
          tag = %tag,
          "catalog tag shares the \
           label of the catch-all \
           filter"
        );
      }
      entries
        .push(TagSelection::tag(tag));
    }

    trace!(
      count = entries.len(),
      "built tag index"
    );
    Self {
      entries
    }
  }

  pub fn entries(
    &self
  ) -> &[TagSelection] {
    &self.entries
  }

  pub fn labels<'a>(
    &'a self,
    all_label: &'a str
  ) -> Vec<&'a str> {
    self
      .entries
      .iter()
      .map(|entry| entry.label(all_label))
      .collect()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Never true: `All` is always
  /// present.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::{
    TagIndex,
    TagSelection
  };
  use crate::content::Project;

  fn catalog() -> Vec<Project> {
    vec![
      Project::new(
        "Scraper",
        "Collects pages",
        ["Python", "Web Scraping"],
        None
      ),
      Project::new(
        "Quiz",
        "Schema design",
        ["MySQL", "Python", "Database"],
        None
      ),
      Project::new(
        "Viz",
        "Dashboards",
        ["Tableau", "MySQL"],
        None
      ),
    ]
  }

  #[test]
  fn sentinel_first_then_first_seen_order()
   {
    let index =
      TagIndex::build(&catalog(), "All");
    assert_eq!(
      index.labels("All"),
      vec![
        "All",
        "Python",
        "Web Scraping",
        "MySQL",
        "Database",
        "Tableau"
      ]
    );
    assert_eq!(
      index.entries()[0],
      TagSelection::All
    );
  }

  #[test]
  fn entries_are_unique() {
    let index =
      TagIndex::build(&catalog(), "All");
    let unique: HashSet<_> =
      index.entries().iter().collect();
    assert_eq!(unique.len(), index.len());
  }

  #[test]
  fn empty_catalog_still_has_sentinel() {
    let index = TagIndex::build(&[], "All");
    assert_eq!(index.labels("All"), vec![
      "All"
    ]);
    assert!(!index.is_empty());
  }

  #[test]
  fn tag_named_like_sentinel_stays_distinct()
   {
    let catalog = vec![Project::new(
      "Everything",
      "Covers it all",
      ["All", "Misc"],
      None
    )];
    let index =
      TagIndex::build(&catalog, "All");

    assert_eq!(index.entries(), &[
      TagSelection::All,
      TagSelection::tag("All"),
      TagSelection::tag("Misc"),
    ]);

    let keys: HashSet<String> = index
      .entries()
      .iter()
      .map(TagSelection::key)
      .collect();
    assert_eq!(keys.len(), index.len());
    assert_eq!(
      index.labels("All"),
      vec!["All", "All", "Misc"]
    );
  }

  #[test]
  fn labels_follow_configured_sentinel()
   {
    let index =
      TagIndex::build(&catalog(), "Any");
    assert_eq!(index.labels("Any")[0], "Any");
  }

  #[test]
  fn selection_admits_exact_tags_only() {
    let project = Project::new(
      "Quiz",
      "",
      ["MySQL"],
      None
    );
    assert!(
      TagSelection::All.admits(&project)
    );
    assert!(
      TagSelection::tag("MySQL")
        .admits(&project)
    );
    assert!(
      !TagSelection::tag("mysql")
        .admits(&project)
    );
  }
}
