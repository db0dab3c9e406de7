use folio_core::content::Socials;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
  pub name:    String,
  pub years:   String,
  pub socials: Socials
}

#[function_component(SiteFooter)]
pub fn site_footer(
  props: &SiteFooterProps
) -> Html {
  let links = [
    ("GitHub", &props.socials.github),
    ("LinkedIn", &props.socials.linkedin),
    ("Instagram", &props.socials.instagram)
  ];

  html! {
      <footer class="site-footer">
          <p>{ format!("© {} {}. All rights reserved.", props.years, props.name) }</p>
          <div class="footer-links">
              {
                  for links.into_iter().filter_map(|(label, href)| {
                      href.as_ref().map(|href| html! {
                          <a key={label} href={href.clone()}>{ label }</a>
                      })
                  })
              }
          </div>
      </footer>
  }
}
