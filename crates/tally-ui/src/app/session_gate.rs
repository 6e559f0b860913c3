use tally_shared::Identity;
use yew::{
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};
use yew_router::prelude::Redirect;

use super::Route;
use super::component::TodoView;
use crate::api;

#[derive(Clone, PartialEq)]
enum SessionState {
  Checking,
  SignedOut,
  SignedIn(Identity)
}

/// The authorization gate in front of the task view. The
/// identity check runs on every mount of the protected
/// route, so returning visitors are re-verified against the
/// hosted auth endpoint rather than a cached session flag.
#[function_component(SessionGate)]
pub fn session_gate() -> Html {
  let session = use_state(|| {
    SessionState::Checking
  });

  {
    let session = session.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::auth::current_user()
            .await
          {
            | Some(identity) => {
              session.set(
                SessionState::SignedIn(
                  identity
                )
              );
            }
            | None => {
              tracing::info!(
                "no signed-in user; \
                 redirecting to sign-in"
              );
              session.set(
                SessionState::SignedOut
              );
            }
          }
        }
      );
      || ()
    });
  }

  match &*session {
    // Blank until the identity resolves; the task view
    // never mounts for an unverified visitor.
    | SessionState::Checking => {
      html! {}
    }
    | SessionState::SignedOut => html! {
        <Redirect<Route> to={Route::SignIn} />
    },
    | SessionState::SignedIn(_) => {
      html! {
          <div class="page">
              <h1 class="page-title">{ "Your Tasks" }</h1>
              <TodoView />
          </div>
      }
    }
  }
}
