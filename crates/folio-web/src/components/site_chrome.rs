use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

const NAV: [(&str, &str); 4] = [
  ("#home", "Home"),
  ("#projects", "Projects"),
  ("#skills", "Skills"),
  ("#contact", "Contact")
];

#[derive(Properties, PartialEq)]
pub struct SiteChromeProps {
  pub initials:     String,
  /// Name of the theme the button
  /// switches to.
  pub toggle_label: String,
  pub dark:         bool,
  pub on_toggle:    Callback<MouseEvent>
}

#[function_component(SiteChrome)]
pub fn site_chrome(
  props: &SiteChromeProps
) -> Html {
  let icon =
    if props.dark { "☀" } else { "☾" };

  html! {
      <header class="site-chrome">
          <a href="#home" class="brand">
              <div class="brand-badge">{ &props.initials }</div>
              <span class="sr-only">{ "Go to home" }</span>
          </a>

          <nav class="site-nav">
              {
                  for NAV.iter().map(|(href, label)| html! {
                      <a key={*href} href={*href}>{ *label }</a>
                  })
              }
          </nav>

          <button
              class="btn theme-toggle"
              aria-label="Toggle theme"
              onclick={props.on_toggle.clone()}
          >
              <span class="icon">{ icon }</span>
              { &props.toggle_label }
          </button>
      </header>
  }
}
