use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct InfoCardProps {
  pub label: String,
  pub value: String,
  #[prop_or_default]
  pub hint:  Option<String>
}

#[function_component(InfoCard)]
pub fn info_card(
  props: &InfoCardProps
) -> Html {
  html! {
      <div class="card info-card">
          <p class="card-label">{ &props.label }</p>
          <p class="card-value">{ &props.value }</p>
          {
              match props.hint.as_deref() {
                  Some(hint) => html! { <p class="card-hint">{ hint }</p> },
                  None => html! {}
              }
          }
      </div>
  }
}
