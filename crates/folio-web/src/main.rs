mod app;
mod components;

use app::App;

const MOUNT_ID: &str = "app";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let renderer = match gloo::utils::document()
    .get_element_by_id(MOUNT_ID)
  {
    | Some(root) => {
      yew::Renderer::<App>::with_root(root)
    }
    | None => {
      tracing::warn!(
        mount = MOUNT_ID,
        "mount element missing; \
         rendering into <body>"
      );
      yew::Renderer::<App>::new()
    }
  };

  tracing::info!(
    version = env!("CARGO_PKG_VERSION"),
    "rendering portfolio"
  );
  renderer.render();
}
