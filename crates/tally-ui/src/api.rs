pub mod auth;
pub mod config;
pub mod todos;

use gloo::net::http::{
  RequestBuilder,
  Response
};
use serde::de::DeserializeOwned;

use self::config::ServiceConfig;

/// Attaches the service credentials every data-plane call
/// carries: the anon key, plus a bearer that is the stored
/// session token when present and the anon key otherwise.
pub(crate) fn authorized(
  request: RequestBuilder,
  service: &ServiceConfig
) -> RequestBuilder {
  let bearer = config::bearer_token(
    config::session_token(),
    &service.anon_key
  );
  request
    .header("apikey", &service.anon_key)
    .header(
      "Authorization",
      &format!("Bearer {bearer}")
    )
}

pub(crate) async fn decode_json<R>(
  response: Response,
  what: &str
) -> Result<R, String>
where
  R: DeserializeOwned
{
  if !response.ok() {
    return Err(format!(
      "{what} failed with status {}",
      response.status()
    ));
  }

  response
    .json::<R>()
    .await
    .map_err(|e| {
      format!("{what} decode error: {e}")
    })
}
