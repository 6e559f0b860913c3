use gloo::net::http::Request;
use tally_shared::Identity;

use super::config::{
  self,
  ServiceConfig
};
use super::decode_json;

/// Resolves the signed-in principal, if any. Every failure
/// mode — missing config, missing session, transport error,
/// rejected token — collapses to `None`: the gate treats
/// them all as "not signed in".
pub async fn current_user()
-> Option<Identity> {
  let service =
    match ServiceConfig::resolve() {
      | Ok(service) => service,
      | Err(error) => {
        tracing::debug!(
          error = %error,
          "identity check skipped"
        );
        return None;
      }
    };

  let Some(token) =
    config::session_token()
  else {
    tracing::debug!(
      "no stored session token"
    );
    return None;
  };

  match fetch_user(&service, &token)
    .await
  {
    | Ok(identity) => {
      tracing::debug!(
        user = %identity.id,
        "identity resolved"
      );
      Some(identity)
    }
    | Err(error) => {
      tracing::warn!(
        error = %error,
        "identity check failed; \
         treating as signed out"
      );
      None
    }
  }
}

async fn fetch_user(
  service: &ServiceConfig,
  token: &str
) -> Result<Identity, String> {
  let response = Request::get(
    &service.auth_user_url()
  )
  .header("apikey", &service.anon_key)
  .header(
    "Authorization",
    &format!("Bearer {token}")
  )
  .send()
  .await
  .map_err(|e| {
    format!("auth request failed: {e}")
  })?;

  decode_json(response, "auth user")
    .await
}
