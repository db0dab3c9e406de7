use std::collections::HashSet;

use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  warn
};

use crate::config::SiteConfig;

/// The authored content compiled into
/// the site.
pub const EMBEDDED_CONTENT: &str =
  include_str!(
    "../content/portfolio.toml"
  );

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct Portfolio {
  #[serde(default)]
  pub site:       SiteConfig,
  pub profile:    Profile,
  #[serde(default)]
  pub highlights: Vec<Highlight>,
  #[serde(default)]
  pub projects:   Vec<Project>,
  #[serde(default)]
  pub skills:     Vec<SkillGroup>,
  #[serde(default)]
  pub learning:   Learning
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct Profile {
  pub name:     String,
  #[serde(default)]
  initials:     Option<String>,
  pub title:    String,
  #[serde(default)]
  pub subtitle: String,
  pub email:    String,
  #[serde(default)]
  pub location: String,
  #[serde(default)]
  pub kicker:   Option<String>,
  #[serde(default)]
  pub socials:  Socials,
  #[serde(default)]
  pub address:  Option<PostalAddress>
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Deserialize,
)]
pub struct Socials {
  pub github:    Option<String>,
  pub linkedin:  Option<String>,
  pub instagram: Option<String>
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct PostalAddress {
  pub locality: String,
  pub region:   String,
  pub country:  String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct Highlight {
  pub label: String,
  pub value: String,
  #[serde(default)]
  pub hint:  Option<String>
}

/// A catalog entry. The title is its
/// identity.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct Project {
  pub title: String,
  pub blurb: String,
  pub tags:  Vec<String>,
  #[serde(default)]
  href:      Option<String>
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct SkillGroup {
  pub group: String,
  pub items: Vec<String>
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Deserialize,
)]
pub struct Learning {
  #[serde(default)]
  pub topics: Vec<String>
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ProjectLink<'a> {
  Absent,
  Placeholder(&'a str),
  External(&'a str)
}

impl ProjectLink<'_> {
  pub fn href(&self) -> Option<&str> {
    match self {
      | Self::Absent => None,
      | Self::Placeholder(href)
      | Self::External(href) => {
        Some(*href)
      }
    }
  }

  /// External links open in a new tab
  /// with `rel="noreferrer"`.
  pub fn opens_new_tab(&self) -> bool {
    matches!(self, Self::External(_))
  }
}

impl Project {
  pub fn new(
    title: impl Into<String>,
    blurb: impl Into<String>,
    tags: impl IntoIterator<
      Item = impl Into<String>
    >,
    href: Option<&str>
  ) -> Self {
    Self {
      title: title.into(),
      blurb: blurb.into(),
      tags:  tags
        .into_iter()
        .map(Into::into)
        .collect(),
      href:  href.map(str::to_string)
    }
  }

  pub fn link(&self) -> ProjectLink<'_> {
    classify_link(self.href.as_deref())
  }

  pub fn has_tag(
    &self,
    tag: &str
  ) -> bool {
    self
      .tags
      .iter()
      .any(|value| value == tag)
  }
}

impl Profile {
  /// Header badge text. Falls back to
  /// the first letters of the first two
  /// words of the name.
  pub fn initials(&self) -> String {
    if let Some(initials) =
      self.initials.as_deref()
      && !initials.trim().is_empty()
    {
      return initials
        .trim()
        .to_string();
    }

    self
      .name
      .split_whitespace()
      .take(2)
      .filter_map(|word| {
        word.chars().next()
      })
      .flat_map(char::to_uppercase)
      .collect()
  }

  pub fn mailto(&self) -> String {
    format!("mailto:{}", self.email)
  }
}

impl Portfolio {
  /// Parses the content compiled into
  /// the binary.
  pub fn embedded()
  -> anyhow::Result<Self> {
    Self::from_toml_str(
      EMBEDDED_CONTENT
    )
    .context(
      "failed to load embedded \
       portfolio content"
    )
  }

  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut portfolio: Portfolio =
      toml::from_str(text).context(
        "failed to parse portfolio \
         document"
      )?;
    portfolio.site =
      portfolio.site.normalized();
    portfolio.audit();

    debug!(
      projects =
        portfolio.projects.len(),
      skills = portfolio.skills.len(),
      "loaded portfolio content"
    );
    Ok(portfolio)
  }

  /// Authored data is taken as given;
  /// suspicious entries are only
  /// reported.
  fn audit(&self) {
    let mut seen = HashSet::new();
    for project in &self.projects {
      if !seen
        .insert(project.title.as_str())
      {
        warn!(
          title = %project.title,
          "duplicate project title"
        );
      }
      if project.tags.is_empty() {
        warn!(
          title = %project.title,
          "project has no tags"
        );
      }
    }
  }
}

/// Last path segment of a profile URL,
/// used as the visible handle on
/// contact cards.
pub fn display_handle(url: &str) -> &str {
  url
    .trim_end_matches('/')
    .rsplit('/')
    .next()
    .filter(|segment| {
      !segment.is_empty()
    })
    .unwrap_or(url)
}

/// Only `http://` and `https://` URLs
/// leave the site.
pub fn is_external_href(
  href: &str
) -> bool {
  let href = href.trim();
  href.starts_with("http://")
    || href.starts_with("https://")
}

fn classify_link(
  href: Option<&str>
) -> ProjectLink<'_> {
  match href.map(str::trim) {
    | None => ProjectLink::Absent,
    | Some(href)
      if is_external_href(href) =>
    {
      ProjectLink::External(href)
    }
    | Some(href) => {
      ProjectLink::Placeholder(href)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Portfolio,
    Project,
    ProjectLink,
    display_handle,
    is_external_href
  };

  const MINIMAL: &str = r##"
[profile]
name = "Ada Lovelace"
title = "Analyst"
email = "ada@example.com"

[[projects]]
title = "Engine"
blurb = "Notes on the analytical engine."
tags = ["Math"]

[[projects]]
title = "Engine"
blurb = "Duplicate title is kept."
tags = []
href = "#"
"##;

  #[test]
  fn embedded_content_parses() {
    let portfolio =
      Portfolio::embedded().unwrap();
    assert_eq!(
      portfolio.profile.name,
      "Amir Karki"
    );
    assert_eq!(
      portfolio.projects.len(),
      4
    );
    assert_eq!(portfolio.skills.len(), 8);
    assert_eq!(
      portfolio.learning.topics.len(),
      4
    );
    assert_eq!(
      portfolio.site.theme_storage_key,
      "theme"
    );
  }

  #[test]
  fn minimal_document_uses_defaults_and_keeps_duplicates()
   {
    let portfolio =
      Portfolio::from_toml_str(MINIMAL)
        .unwrap();

    assert_eq!(
      portfolio.site.all_tags_label,
      "All"
    );
    assert!(portfolio.highlights.is_empty());
    assert!(
      portfolio.learning.topics.is_empty()
    );
    assert_eq!(
      portfolio.projects.len(),
      2
    );
    assert_eq!(
      portfolio.projects[0].link(),
      ProjectLink::Absent
    );
    assert_eq!(
      portfolio.projects[1].link(),
      ProjectLink::Placeholder("#")
    );
  }

  #[test]
  fn malformed_document_is_an_error() {
    let err = Portfolio::from_toml_str(
      "[profile]\nname = 3\n"
    )
    .unwrap_err();
    assert!(
      err
        .to_string()
        .contains("failed to parse")
    );
  }

  #[test]
  fn links_are_classified_by_scheme() {
    let external = Project::new(
      "a",
      "b",
      ["x"],
      Some("https://example.com/repo")
    );
    assert_eq!(
      external.link(),
      ProjectLink::External(
        "https://example.com/repo"
      )
    );
    assert!(external.link().opens_new_tab());

    let placeholder = Project::new(
      "a",
      "b",
      ["x"],
      Some("#")
    );
    assert!(
      !placeholder.link().opens_new_tab()
    );
    assert_eq!(
      placeholder.link().href(),
      Some("#")
    );

    let absent =
      Project::new("a", "b", ["x"], None);
    assert_eq!(absent.link().href(), None);
  }

  #[test]
  fn scheme_lookalikes_are_placeholders()
   {
    for href in
      ["http-notes.html", "httpfoo", "mailto:a@b.c"]
    {
      let project = Project::new(
        "a",
        "b",
        ["x"],
        Some(href)
      );
      assert_eq!(
        project.link(),
        ProjectLink::Placeholder(href),
        "href {href:?}"
      );
      assert!(!project.link().opens_new_tab());
      assert!(!is_external_href(href));
    }
    assert!(is_external_href(
      "http://example.com"
    ));
    assert!(is_external_href(
      " https://example.com"
    ));
  }

  #[test]
  fn initials_fall_back_to_name() {
    let portfolio =
      Portfolio::from_toml_str(MINIMAL)
        .unwrap();
    assert_eq!(
      portfolio.profile.initials(),
      "AL"
    );

    let embedded =
      Portfolio::embedded().unwrap();
    assert_eq!(
      embedded.profile.initials(),
      "AK"
    );
    assert_eq!(
      embedded.profile.mailto(),
      "mailto:Karkiamir417@gmail.com"
    );
  }

  #[test]
  fn handles_are_last_path_segments() {
    assert_eq!(
      display_handle(
        "https://github.com/Amir-karki"
      ),
      "Amir-karki"
    );
    assert_eq!(
      display_handle(
        "https://www.linkedin.com/in/someone/"
      ),
      "someone"
    );
    assert_eq!(display_handle(""), "");
  }
}
