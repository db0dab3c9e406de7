use folio_core::content::SkillGroup;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SkillGroupCardProps {
  pub group: SkillGroup,
  pub index: usize
}

#[function_component(SkillGroupCard)]
pub fn skill_group_card(
  props: &SkillGroupCardProps
) -> Html {
  let style = format!(
    "animation-delay:{}ms;",
    props.index * 30
  );

  html! {
      <div class="card skill-card fade-in" {style}>
          <h3>{ &props.group.group }</h3>
          <div class="pill-row">
              {
                  for props.group.items.iter().map(|item| html! {
                      <span key={item.clone()} class="pill">{ item }</span>
                  })
              }
          </div>
      </div>
  }
}
