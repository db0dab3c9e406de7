use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
  pub kicker: String,
  pub title:  String
}

#[function_component(SectionHeader)]
pub fn section_header(
  props: &SectionHeaderProps
) -> Html {
  html! {
      <div class="section-header">
          <p class="kicker">{ &props.kicker }</p>
          <h2 class="gradient-text">{ &props.title }</h2>
      </div>
  }
}
