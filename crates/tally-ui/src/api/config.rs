use serde::Deserialize;

const SERVICE_URL_STORAGE_KEY: &str =
  "tally.service_url";
const ANON_KEY_STORAGE_KEY: &str =
  "tally.anon_key";
const SESSION_STORAGE_KEY: &str =
  "tally.session";

const BUILT_IN_SERVICE_URL:
  Option<&str> =
  option_env!("TALLY_SERVICE_URL");
const BUILT_IN_ANON_KEY: Option<&str> =
  option_env!("TALLY_ANON_KEY");

/// Where the hosted service lives. Local-storage overrides
/// win over the compile-time defaults.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ServiceConfig {
  pub base_url: String,
  pub anon_key: String
}

impl ServiceConfig {
  pub fn resolve()
  -> Result<Self, String> {
    from_parts(
      read_storage(
        SERVICE_URL_STORAGE_KEY
      ),
      read_storage(
        ANON_KEY_STORAGE_KEY
      ),
      BUILT_IN_SERVICE_URL,
      BUILT_IN_ANON_KEY
    )
    .ok_or_else(|| {
      "service endpoint is not \
       configured"
        .to_string()
    })
  }

  pub fn auth_user_url(
    &self
  ) -> String {
    format!(
      "{}/auth/v1/user",
      self.base_url
    )
  }
}

fn from_parts(
  stored_url: Option<String>,
  stored_key: Option<String>,
  built_url: Option<&str>,
  built_key: Option<&str>
) -> Option<ServiceConfig> {
  let base_url =
    pick(stored_url, built_url)?;
  let anon_key =
    pick(stored_key, built_key)?;

  Some(ServiceConfig {
    base_url: base_url
      .trim_end_matches('/')
      .to_string(),
    anon_key
  })
}

fn pick(
  stored: Option<String>,
  built: Option<&str>
) -> Option<String> {
  stored
    .map(|value| {
      value.trim().to_string()
    })
    .filter(|value| !value.is_empty())
    .or_else(|| {
      built
        .map(|value| {
          value.trim().to_string()
        })
        .filter(|value| {
          !value.is_empty()
        })
    })
}

// The sign-in flow is external; it leaves its session JSON
// in local storage and only `access_token` matters here.
#[derive(Debug, Deserialize)]
struct StoredSession {
  access_token: Option<String>
}

pub(crate) fn session_token()
-> Option<String> {
  let raw =
    read_storage(SESSION_STORAGE_KEY)?;
  access_token_from_session(&raw)
}

fn access_token_from_session(
  raw: &str
) -> Option<String> {
  match serde_json::from_str::<
    StoredSession
  >(raw)
  {
    | Ok(session) => session
      .access_token
      .map(|token| {
        token.trim().to_string()
      })
      .filter(|token| {
        !token.is_empty()
      }),
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing stored \
         session from local storage"
      );
      None
    }
  }
}

pub(crate) fn bearer_token(
  session: Option<String>,
  anon_key: &str
) -> String {
  session.unwrap_or_else(|| {
    anon_key.to_string()
  })
}

fn read_storage(
  key: &str
) -> Option<String> {
  web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage.get_item(key).ok().flatten()
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stored_values_win_over_built_in_defaults()
  {
    let service = from_parts(
      Some(
        "https://db.example.com/"
          .to_string()
      ),
      Some("stored-key".to_string()),
      Some("https://built.example.com"),
      Some("built-key"),
    )
    .expect("config resolves");

    assert_eq!(
      service.base_url,
      "https://db.example.com"
    );
    assert_eq!(
      service.anon_key,
      "stored-key"
    );
  }

  #[test]
  fn blank_storage_falls_back_to_built_in()
  {
    let service = from_parts(
      Some("   ".to_string()),
      None,
      Some("https://built.example.com"),
      Some("built-key"),
    )
    .expect("config resolves");

    assert_eq!(
      service.base_url,
      "https://built.example.com"
    );
    assert_eq!(
      service.anon_key,
      "built-key"
    );
  }

  #[test]
  fn missing_endpoint_yields_no_config()
  {
    assert!(
      from_parts(
        None,
        Some("key".to_string()),
        None,
        Some("built-key"),
      )
      .is_none()
    );
  }

  #[test]
  fn session_json_yields_access_token()
  {
    let raw = r#"{
      "access_token": "tok-123",
      "refresh_token": "tok-456",
      "expires_at": 1774000000
    }"#;

    assert_eq!(
      access_token_from_session(raw),
      Some("tok-123".to_string())
    );
  }

  #[test]
  fn malformed_session_yields_none() {
    assert_eq!(
      access_token_from_session(
        "not json"
      ),
      None
    );
    assert_eq!(
      access_token_from_session(
        r#"{"access_token": ""}"#
      ),
      None
    );
  }

  #[test]
  fn bearer_falls_back_to_anon_key() {
    assert_eq!(
      bearer_token(
        Some("tok".to_string()),
        "anon"
      ),
      "tok"
    );
    assert_eq!(
      bearer_token(None, "anon"),
      "anon"
    );
  }
}
