use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_THEME_STORAGE_KEY:
  &str = "theme";
pub const DEFAULT_DARK_CLASS: &str =
  "dark";
pub const DEFAULT_ALL_TAGS_LABEL:
  &str = "All";

/// The `[site]` table of the content
/// document.
#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct SiteConfig {
  #[serde(
    default = "default_theme_storage_key"
  )]
  pub theme_storage_key: String,
  #[serde(default = "default_dark_class")]
  pub dark_class:        String,
  #[serde(
    default = "default_all_tags_label"
  )]
  pub all_tags_label:    String,
  #[serde(default)]
  pub copyright_start:   Option<i32>
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      theme_storage_key:
        default_theme_storage_key(),
      dark_class:
        default_dark_class(),
      all_tags_label:
        default_all_tags_label(),
      copyright_start:   None
    }
  }
}

impl SiteConfig {
  /// Replaces blank values with their
  /// defaults. A blank storage key or
  /// class name would silently disable
  /// persistence or the dark palette.
  pub fn normalized(mut self) -> Self {
    if self
      .theme_storage_key
      .trim()
      .is_empty()
    {
      warn!(
        "blank theme_storage_key; \
         using default"
      );
      self.theme_storage_key =
        default_theme_storage_key();
    }

    if self.dark_class.trim().is_empty()
    {
      warn!(
        "blank dark_class; using \
         default"
      );
      self.dark_class =
        default_dark_class();
    }

    if self
      .all_tags_label
      .trim()
      .is_empty()
    {
      warn!(
        "blank all_tags_label; using \
         default"
      );
      self.all_tags_label =
        default_all_tags_label();
    }

    self
  }

  /// Footer copyright span, e.g.
  /// `2023–2026`, or just the current
  /// year.
  pub fn copyright_years(
    &self,
    current_year: i32
  ) -> String {
    match self.copyright_start {
      | Some(start)
        if start < current_year =>
      {
        format!(
          "{start}–{current_year}"
        )
      }
      | _ => current_year.to_string()
    }
  }
}

fn default_theme_storage_key() -> String
{
  DEFAULT_THEME_STORAGE_KEY.to_string()
}

fn default_dark_class() -> String {
  DEFAULT_DARK_CLASS.to_string()
}

fn default_all_tags_label() -> String {
  DEFAULT_ALL_TAGS_LABEL.to_string()
}
