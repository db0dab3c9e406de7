mod component;
mod storage;

pub use component::App;

/// Records a user interaction in both
/// the tracing stream and the browser
/// console.
fn trace_interaction(
  control: &str,
  value: &str
) {
  tracing::debug!(
    control,
    value,
    "interaction"
  );
  gloo::console::debug!(format!(
    "{control} -> {value}"
  ));
}
