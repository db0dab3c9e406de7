use std::fmt;

use tracing::{
  debug,
  info,
  warn
};

use crate::config::SiteConfig;
use crate::error::{
  StorageError,
  SurfaceError
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Theme {
  #[default]
  Light,
  Dark
}

impl Theme {
  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  /// Only the exact stored spellings
  /// are recognized.
  pub fn from_storage_value(
    value: &str
  ) -> Option<Self> {
    match value {
      | "light" => Some(Self::Light),
      | "dark" => Some(Self::Dark),
      | _ => None
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn is_dark(self) -> bool {
    self == Self::Dark
  }

  /// Label of the toggle button: the
  /// theme it switches to.
  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "Dark",
      | Self::Dark => "Light"
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.storage_value())
  }
}

/// Persistent key-value store holding
/// the chosen theme.
pub trait ThemeStore {
  fn read(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>;

  fn write(
    &self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError>;
}

/// The host's appearance preference.
/// `None` when it cannot be queried.
pub trait SystemAppearance {
  fn prefers_dark(&self) -> Option<bool>;
}

/// Whatever carries the dark palette
/// flag, e.g. a class on the document
/// root.
pub trait ThemeSurface {
  fn set_dark(
    &self,
    class: &str,
    dark: bool
  ) -> Result<(), SurfaceError>;
}

/// Persisted value, else system
/// preference, else light. Never fails.
#[tracing::instrument(skip(
  store, appearance
))]
pub fn resolve_initial_theme(
  store: &impl ThemeStore,
  appearance: &impl SystemAppearance,
  key: &str
) -> Theme {
  match read_persisted(store, key) {
    | Some(theme) => {
      debug!(%theme, "using persisted theme");
      theme
    }
    | None => {
      let prefers_dark =
        appearance.prefers_dark();
      debug!(
        ?prefers_dark,
        "no persisted theme; using \
         system preference"
      );
      if prefers_dark.unwrap_or(false) {
        Theme::Dark
      } else {
        Theme::Light
      }
    }
  }
}

fn read_persisted(
  store: &impl ThemeStore,
  key: &str
) -> Option<Theme> {
  let raw = match store.read(key) {
    | Ok(raw) => raw?,
    | Err(error) => {
      warn!(
        %error,
        "failed reading persisted \
         theme"
      );
      return None;
    }
  };

  let theme =
    Theme::from_storage_value(&raw);
  if theme.is_none() {
    warn!(
      value = %raw,
      "ignoring unrecognized \
       persisted theme"
    );
  }
  theme
}

/// Owns the current theme and performs
/// its side effects. Storage and
/// surface failures are logged and
/// swallowed.
#[derive(Debug)]
pub struct ThemeController<St, Su> {
  current:     Theme,
  store:       St,
  surface:     Su,
  storage_key: String,
  dark_class:  String
}

impl<St, Su> ThemeController<St, Su>
where
  St: ThemeStore,
  Su: ThemeSurface
{
  /// Resolves the starting theme and
  /// paints it. Storage is not written
  /// until the first toggle.
  #[tracing::instrument(skip_all)]
  pub fn initialize(
    config: &SiteConfig,
    store: St,
    appearance: &impl SystemAppearance,
    surface: Su
  ) -> Self {
    let current = resolve_initial_theme(
      &store,
      appearance,
      &config.theme_storage_key
    );
    let controller = Self {
      current,
      store,
      surface,
      storage_key: config
        .theme_storage_key
        .clone(),
      dark_class: config
        .dark_class
        .clone()
    };

    info!(theme = %current, "theme initialized");
    controller.apply_surface();
    controller
  }

  pub fn theme(&self) -> Theme {
    self.current
  }

  pub fn is_dark(&self) -> bool {
    self.current.is_dark()
  }

  /// Flips the theme, then applies and
  /// persists it.
  pub fn toggle(&mut self) -> Theme {
    self.current =
      self.current.toggled();
    debug!(theme = %self.current, "theme toggled");
    self.apply();
    self.current
  }

  /// Each step is attempted even if
  /// the other fails.
  fn apply(&self) {
    self.apply_surface();
    self.persist();
  }

  pub fn store(&self) -> &St {
    &self.store
  }

  pub fn surface(&self) -> &Su {
    &self.surface
  }

  fn apply_surface(&self) {
    if let Err(error) =
      self.surface.set_dark(
        &self.dark_class,
        self.current.is_dark()
      )
    {
      warn!(
        %error,
        "failed applying theme to \
         rendering surface"
      );
    }
  }

  fn persist(&self) {
    if let Err(error) = self.store.write(
      &self.storage_key,
      self.current.storage_value()
    ) {
      warn!(
        %error,
        "failed persisting theme"
      );
    }
  }
}

/// In-memory collaborators for hosts
/// without a browser, and for tests.
pub mod memory {
  use std::cell::{
    Cell,
    RefCell
  };
  use std::collections::HashMap;

  use super::{
    SystemAppearance,
    ThemeStore,
    ThemeSurface
  };
  use crate::error::{
    StorageError,
    SurfaceError
  };

  #[derive(Debug, Default)]
  pub struct MemoryStore {
    entries:         RefCell<
      HashMap<String, String>
    >,
    writes:          Cell<usize>,
    pub fail_reads:  bool,
    pub fail_writes: bool
  }

  impl MemoryStore {
    pub fn with_entry(
      key: &str,
      value: &str
    ) -> Self {
      let store = Self::default();
      store.entries.borrow_mut().insert(
        key.to_string(),
        value.to_string()
      );
      store
    }

    /// Reads and writes both fail, as
    /// with disabled browser storage.
    pub fn unavailable() -> Self {
      Self {
        fail_reads: true,
        fail_writes: true,
        ..Self::default()
      }
    }

    pub fn get(
      &self,
      key: &str
    ) -> Option<String> {
      self.entries.borrow().get(key).cloned()
    }

    /// Successful writes so far.
    pub fn writes(&self) -> usize {
      self.writes.get()
    }
  }

  impl ThemeStore for MemoryStore {
    fn read(
      &self,
      key: &str
    ) -> Result<Option<String>, StorageError>
    {
      if self.fail_reads {
        return Err(
          StorageError::Unavailable
        );
      }
      Ok(self.get(key))
    }

    fn write(
      &self,
      key: &str,
      value: &str
    ) -> Result<(), StorageError> {
      if self.fail_writes {
        return Err(StorageError::Write {
          key:    key.to_string(),
          reason: "quota exceeded"
            .to_string()
        });
      }
      self.entries.borrow_mut().insert(
        key.to_string(),
        value.to_string()
      );
      self.writes.set(self.writes.get() + 1);
      Ok(())
    }
  }

  #[derive(
    Debug, Clone, Copy, Default,
  )]
  pub struct FixedAppearance(
    pub Option<bool>
  );

  impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> Option<bool> {
      self.0
    }
  }

  #[derive(Debug, Default)]
  pub struct RecordingSurface {
    dark:      Cell<Option<bool>>,
    pub fails: bool
  }

  impl RecordingSurface {
    pub fn failing() -> Self {
      Self {
        fails: true,
        ..Self::default()
      }
    }

    /// Last flag applied, if any.
    pub fn dark(&self) -> Option<bool> {
      self.dark.get()
    }
  }

  impl ThemeSurface for RecordingSurface {
    fn set_dark(
      &self,
      class: &str,
      dark: bool
    ) -> Result<(), SurfaceError> {
      if self.fails {
        return Err(
          SurfaceError::Rejected {
            class:  class.to_string(),
            reason: "detached document"
              .to_string()
          }
        );
      }
      self.dark.set(Some(dark));
      Ok(())
    }
  }
}
