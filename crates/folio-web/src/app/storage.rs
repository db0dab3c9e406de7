use folio_core::{
  StorageError,
  SurfaceError,
  SystemAppearance,
  ThemeStore,
  ThemeSurface
};
use wasm_bindgen::JsValue;

const PREFERS_DARK_QUERY: &str =
  "(prefers-color-scheme: dark)";

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

/// `window.matchMedia` for the dark
/// color-scheme query.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryAppearance;

/// Class list of `<html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRootSurface;

fn local_storage()
-> Result<web_sys::Storage, StorageError>
{
  web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .ok_or(StorageError::Unavailable)
}

fn describe(value: JsValue) -> String {
  value
    .as_string()
    .unwrap_or_else(|| format!("{value:?}"))
}

impl ThemeStore for BrowserStorage {
  fn read(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>
  {
    local_storage()?
      .get_item(key)
      .map_err(|error| {
        StorageError::Read {
          key:    key.to_string(),
          reason: describe(error)
        }
      })
  }

  fn write(
    &self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    local_storage()?
      .set_item(key, value)
      .map_err(|error| {
        StorageError::Write {
          key:    key.to_string(),
          reason: describe(error)
        }
      })
  }
}

impl SystemAppearance
  for MediaQueryAppearance
{
  fn prefers_dark(&self) -> Option<bool> {
    web_sys::window()
      .and_then(|window| {
        window
          .match_media(
            PREFERS_DARK_QUERY
          )
          .ok()
          .flatten()
      })
      .map(|list| list.matches())
  }
}

impl ThemeSurface for DocumentRootSurface {
  fn set_dark(
    &self,
    class: &str,
    dark: bool
  ) -> Result<(), SurfaceError> {
    let root = web_sys::window()
      .and_then(|window| {
        window.document()
      })
      .and_then(|document| {
        document.document_element()
      })
      .ok_or(SurfaceError::Unavailable)?;

    root
      .class_list()
      .toggle_with_force(class, dark)
      .map(|_| ())
      .map_err(|error| {
        SurfaceError::Rejected {
          class:  class.to_string(),
          reason: describe(error)
        }
      })
  }
}
