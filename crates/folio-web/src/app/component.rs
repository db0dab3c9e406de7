use std::rc::Rc;

use chrono::{
  Datelike,
  Local
};
use folio_core::content::display_handle;
use folio_core::structured_data::person_schema;
use folio_core::{
  FilterState,
  Portfolio,
  Project,
  TagIndex,
  TagSelection,
  ThemeController,
  filter_projects
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_memo,
  use_mut_ref,
  use_state
};

use super::storage::{
  BrowserStorage,
  DocumentRootSurface,
  MediaQueryAppearance
};
use super::trace_interaction;
use crate::components::{
  ContactCard,
  InfoCard,
  ProjectCard,
  ProjectFilters,
  SectionHeader,
  SiteChrome,
  SiteFooter,
  SkillGroupCard
};

#[function_component(App)]
pub fn app() -> Html {
  let portfolio = use_memo((), |_| {
    Portfolio::embedded()
      .map(Rc::new)
      .inspect_err(|error| {
        tracing::error!(
          error = %format!("{error:#}"),
          "failed loading portfolio \
           content"
        );
      })
  });

  match &*portfolio {
    | Ok(portfolio) => html! {
        <Site portfolio={portfolio.clone()} />
    },
    | Err(error) => html! {
        <div class="load-error">
            <h1>{ "This page could not be loaded." }</h1>
            <pre>{ format!("{error:#}") }</pre>
        </div>
    }
  }
}

#[derive(Properties, PartialEq)]
struct SiteProps {
  portfolio: Rc<Portfolio>
}

#[function_component(Site)]
fn site(props: &SiteProps) -> Html {
  let portfolio = props.portfolio.clone();
  let profile = &portfolio.profile;
  let all_label =
    portfolio.site.all_tags_label.clone();

  let theme_controller = {
    let config = portfolio.site.clone();
    use_mut_ref(move || {
      ThemeController::initialize(
        &config,
        BrowserStorage,
        &MediaQueryAppearance,
        DocumentRootSurface
      )
    })
  };
  let theme = {
    let initial =
      theme_controller.borrow().theme();
    use_state(move || initial)
  };
  let filters =
    use_state(FilterState::default);

  let tag_index = use_memo(
    portfolio.clone(),
    |portfolio| {
      TagIndex::build(
        &portfolio.projects,
        &portfolio.site.all_tags_label
      )
    }
  );

  let shown = use_memo(
    (portfolio.clone(), (*filters).clone()),
    |(portfolio, state)| {
      filter_projects(
        &portfolio.projects,
        state
      )
      .into_iter()
      .cloned()
      .collect::<Vec<Project>>()
    }
  );

  let on_toggle_theme = {
    let theme_controller =
      theme_controller.clone();
    let theme = theme.clone();
    Callback::from(move |_: MouseEvent| {
      let next = theme_controller
        .borrow_mut()
        .toggle();
      trace_interaction(
        "theme",
        next.storage_value()
      );
      theme.set(next);
    })
  };

  let on_search = {
    let filters = filters.clone();
    Callback::from(move |value: String| {
      let mut next = (*filters).clone();
      next.set_search(value);
      filters.set(next);
    })
  };

  let on_select_tag = {
    let filters = filters.clone();
    let all_label = all_label.clone();
    Callback::from(
      move |selection: TagSelection| {
        trace_interaction(
          "tag-filter",
          selection.label(&all_label)
        );
        let mut next = (*filters).clone();
        next.select_tag(selection);
        filters.set(next);
      }
    )
  };

  let on_clear_filters = {
    let filters = filters.clone();
    Callback::from(move |_: MouseEvent| {
      let mut next = (*filters).clone();
      next.clear();
      filters.set(next);
    })
  };

  let tag_buttons: Vec<(
    TagSelection,
    String
  )> = tag_index
    .entries()
    .iter()
    .map(|entry| {
      (
        entry.clone(),
        entry.label(&all_label).to_string()
      )
    })
    .collect();

  let current_year = Local::now().year();
  let schema =
    person_schema(profile).to_string();

  html! {
      <div class="site">
          <SiteChrome
              initials={profile.initials()}
              toggle_label={theme.toggle_label().to_string()}
              dark={theme.is_dark()}
              on_toggle={on_toggle_theme}
          />

          <section id="home" class="hero">
              <div class="hero-glow" aria-hidden="true"></div>
              <div class="container">
                  {
                      match profile.kicker.as_deref() {
                          Some(kicker) => html! { <p class="kicker fade-in">{ kicker }</p> },
                          None => html! {}
                      }
                  }
                  <h1 class="gradient-text fade-in">{ &profile.name }</h1>
                  <h2 class="fade-in" style="animation-delay:50ms;">{ &profile.title }</h2>
                  <p class="muted fade-in" style="animation-delay:100ms;">{ &profile.subtitle }</p>
                  <div class="hero-actions fade-in" style="animation-delay:150ms;">
                      <a class="btn primary" href={profile.mailto()}>{ "✉ Contact" }</a>
                      {
                          match profile.socials.github.clone() {
                              Some(github) => html! {
                                  <a class="btn" href={github} target="_blank" rel="noreferrer">{ "GitHub" }</a>
                              },
                              None => html! {}
                          }
                      }
                      <span class="muted">{ format!("⌖ {}", profile.location) }</span>
                  </div>
              </div>
          </section>

          <section class="container highlights">
              {
                  for portfolio.highlights.iter().map(|highlight| html! {
                      <InfoCard
                          key={highlight.label.clone()}
                          label={highlight.label.clone()}
                          value={highlight.value.clone()}
                          hint={highlight.hint.clone()}
                      />
                  })
              }
          </section>

          <section id="projects" class="container">
              <SectionHeader kicker="Selected Work" title="Projects" />
              <ProjectFilters
                  search={filters.search.clone()}
                  tags={tag_buttons}
                  selected={filters.tag.clone()}
                  on_search={on_search}
                  on_select={on_select_tag}
              />
              {
                  if shown.is_empty() && filters.is_active() {
                      html! {
                          <div class="empty-state">
                              <p>{ "No projects match these filters." }</p>
                              <button class="btn" onclick={on_clear_filters}>{ "Clear filters" }</button>
                          </div>
                      }
                  } else if shown.is_empty() {
                      html! {
                          <div class="empty-state">
                              <p>{ "No projects yet." }</p>
                          </div>
                      }
                  } else {
                      html! {
                          <div class="grid two">
                              {
                                  for shown.iter().enumerate().map(|(index, project)| html! {
                                      <ProjectCard key={project.title.clone()} project={project.clone()} {index} />
                                  })
                              }
                          </div>
                      }
                  }
              }
          </section>

          <section id="skills" class="container">
              <SectionHeader kicker="Toolkit" title="Skills & Technologies" />
              <div class="grid two">
                  {
                      for portfolio.skills.iter().enumerate().map(|(index, group)| html! {
                          <SkillGroupCard key={group.group.clone()} group={group.clone()} {index} />
                      })
                  }
              </div>
              {
                  if portfolio.learning.topics.is_empty() {
                      html! {}
                  } else {
                      html! {
                          <div class="card learning">
                              <h3>{ "Currently exploring" }</h3>
                              <p class="muted">{ "Topics I'm actively learning and experimenting with:" }</p>
                              <div class="pill-row">
                                  {
                                      for portfolio.learning.topics.iter().map(|topic| html! {
                                          <span key={topic.clone()} class="pill">{ topic }</span>
                                      })
                                  }
                              </div>
                          </div>
                      }
                  }
              }
          </section>

          <section id="contact" class="container">
              <SectionHeader kicker="Say hello" title="Contact" />
              <div class="grid three">
                  <ContactCard
                      icon="✉"
                      label="Email"
                      value={profile.email.clone()}
                      href={Some(profile.mailto())}
                  />
                  {
                      for [
                          ("⌥", "GitHub", profile.socials.github.clone()),
                          ("in", "LinkedIn", profile.socials.linkedin.clone())
                      ]
                      .into_iter()
                      .filter_map(|(icon, label, href)| href.map(|href| html! {
                          <ContactCard
                              key={label}
                              icon={icon}
                              label={label}
                              value={display_handle(&href).to_string()}
                              href={Some(href.clone())}
                          />
                      }))
                  }
              </div>
          </section>

          <SiteFooter
              name={profile.name.clone()}
              years={portfolio.site.copyright_years(current_year)}
              socials={profile.socials.clone()}
          />

          <script type="application/ld+json">{ schema }</script>
      </div>
  }
}
