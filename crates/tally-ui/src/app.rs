mod component;
pub(crate) mod datetime;
mod session_gate;
pub(crate) mod tasks;

use gloo::console::log;
use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::{
  BrowserRouter,
  Redirect,
  Routable,
  Switch
};

#[derive(
  Clone, Copy, PartialEq, Routable,
)]
pub enum Route {
  #[at("/")]
  Home,
  #[at("/sign-in")]
  SignIn,
  #[not_found]
  #[at("/404")]
  NotFound
}

fn switch(route: Route) -> Html {
  match route {
    | Route::Home => html! {
      <session_gate::SessionGate />
    },
    | Route::SignIn => html! {
      <SignInPage />
    },
    | Route::NotFound => html! {
      <Redirect<Route> to={Route::Home} />
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <Switch<Route> render={switch} />
      </BrowserRouter>
  }
}

// Authentication itself lives in the hosted service; this
// page only has to exist as the redirect target for
// signed-out visitors.
#[function_component(SignInPage)]
fn sign_in_page() -> Html {
  html! {
      <div class="page">
          <div class="card sign-in">
              <div class="card-header">
                  <h2 class="card-title">{ "Sign in required" }</h2>
                  <p class="card-description">
                      { "Your tasks are private. Sign in through the hosted flow, then come back here." }
                  </p>
              </div>
          </div>
      </div>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
