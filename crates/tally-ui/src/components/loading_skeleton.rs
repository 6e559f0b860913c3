use yew::{
  Html,
  function_component,
  html
};

// One header bar plus three row bars, shown only until the
// first fetch resolves.
#[function_component(LoadingSkeleton)]
pub fn loading_skeleton() -> Html {
  html! {
      <div class="skeleton-stack">
          <div class="skeleton header"></div>
          {
              for (0..3).map(|_| html! {
                  <div class="skeleton row"></div>
              })
          }
      </div>
  }
}
