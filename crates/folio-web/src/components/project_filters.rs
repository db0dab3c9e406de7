use folio_core::TagSelection;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ProjectFiltersProps {
  pub search:    String,
  /// Tag index entries with their
  /// display labels.
  pub tags:      Vec<(TagSelection, String)>,
  pub selected:  TagSelection,
  pub on_search: Callback<String>,
  pub on_select: Callback<TagSelection>
}

#[function_component(ProjectFilters)]
pub fn project_filters(
  props: &ProjectFiltersProps
) -> Html {
  let on_input = {
    let on_search =
      props.on_search.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_search.emit(input.value());
      }
    )
  };

  html! {
      <div class="project-filters">
          <div class="search">
              <span class="icon">{ "⌕" }</span>
              <input
                  type="search"
                  value={props.search.clone()}
                  oninput={on_input}
                  placeholder="Search projects…"
              />
          </div>
          <div class="tag-buttons">
              {
                  for props.tags.iter().map(|(selection, label)| {
                      let is_active = *selection == props.selected;
                      let on_select = props.on_select.clone();
                      let value = selection.clone();
                      html! {
                          <button
                              key={selection.key()}
                              class={classes!("tag-button", is_active.then_some("active"))}
                              onclick={move |_| on_select.emit(value.clone())}
                          >
                              <span class="icon">{ "#" }</span>
                              { label }
                          </button>
                      }
                  })
              }
          </div>
      </div>
  }
}
