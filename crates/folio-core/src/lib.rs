pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod structured_data;
pub mod tags;
pub mod theme;

pub use config::SiteConfig;
pub use content::{
  Portfolio,
  Project,
  ProjectLink
};
pub use error::{
  StorageError,
  SurfaceError
};
pub use filter::{
  FilterState,
  filter_projects
};
pub use tags::{
  TagIndex,
  TagSelection
};
pub use theme::{
  SystemAppearance,
  Theme,
  ThemeController,
  ThemeStore,
  ThemeSurface
};
