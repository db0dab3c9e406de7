mod contact_card;
mod info_card;
mod project_card;
mod project_filters;
mod section_header;
mod site_chrome;
mod site_footer;
mod skill_group_card;

pub use contact_card::ContactCard;
pub use info_card::InfoCard;
pub use project_card::ProjectCard;
pub use project_filters::ProjectFilters;
pub use section_header::SectionHeader;
pub use site_chrome::SiteChrome;
pub use site_footer::SiteFooter;
pub use skill_group_card::SkillGroupCard;

type LinkAttrs = (
  Option<&'static str>,
  Option<&'static str>
);

/// `target`/`rel` for a link that may
/// leave the site.
fn new_tab_attrs(
  opens_new_tab: bool
) -> LinkAttrs {
  if opens_new_tab {
    (Some("_blank"), Some("noreferrer"))
  } else {
    (None, None)
  }
}
