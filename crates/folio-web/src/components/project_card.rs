use folio_core::Project;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::new_tab_attrs;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
  pub project: Project,
  /// Position in the shown list, used
  /// to stagger the entry animation.
  pub index:   usize
}

#[function_component(ProjectCard)]
pub fn project_card(
  props: &ProjectCardProps
) -> Html {
  let project = &props.project;
  let link = project.link();
  let href =
    link.href().map(str::to_string);
  let (target, rel) =
    new_tab_attrs(link.opens_new_tab());
  let style = format!(
    "animation-delay:{}ms;",
    props.index * 50
  );

  html! {
      <a class="card project-card fade-in" {href} {target} {rel} {style}>
          <div class="project-head">
              <div>
                  <h3>{ &project.title }</h3>
                  <p class="muted">{ &project.blurb }</p>
              </div>
              {
                  if link.opens_new_tab() {
                      html! { <span class="icon external">{ "↗" }</span> }
                  } else {
                      html! {}
                  }
              }
          </div>
          <div class="pill-row">
              {
                  for project.tags.iter().map(|tag| html! {
                      <span key={tag.clone()} class="pill">{ tag }</span>
                  })
              }
          </div>
      </a>
  }
}
