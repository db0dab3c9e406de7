use folio_core::content::is_external_href;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::new_tab_attrs;

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
  pub icon:  String,
  pub label: String,
  pub value: String,
  #[prop_or_default]
  pub href:  Option<String>
}

#[function_component(ContactCard)]
pub fn contact_card(
  props: &ContactCardProps
) -> Html {
  let content = html! {
      <div class="contact-content">
          <div class="contact-icon">{ &props.icon }</div>
          <div>
              <p class="card-label">{ &props.label }</p>
              <p class="contact-value">{ &props.value }</p>
          </div>
      </div>
  };

  match props.href.as_deref() {
    | Some(href) => {
      let (target, rel) = new_tab_attrs(
        is_external_href(href)
      );
      html! {
          <a class="card contact-card" href={href.to_string()} {target} {rel}>
              { content }
          </a>
      }
    }
    | None => html! {
        <div class="card contact-card">{ content }</div>
    }
  }
}
