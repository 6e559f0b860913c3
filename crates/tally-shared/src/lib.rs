use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// One row of the hosted `todo` table.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TodoRow {
  pub id:         i64,
  #[serde(default)]
  pub title:      String,
  #[serde(default)]
  pub done:       bool,
  pub created_at: String,
  pub done_time:  Option<String>
}

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct TodoInsert {
  pub title: String,
  pub done:  bool
}

// Both completion fields travel together: a cleared
// `done_time` serializes as an explicit null, never an
// omitted key.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TodoDonePatch {
  pub done:      bool,
  pub done_time: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Identity {
  pub id:    Uuid,
  pub email: Option<String>
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn todo_row_parses_store_json() {
    let raw = r#"{
      "id": 7,
      "title": "Buy milk",
      "done": false,
      "created_at": "2026-02-20T09:30:00+00:00",
      "done_time": null
    }"#;

    let row: TodoRow =
      serde_json::from_str(raw)
        .expect("row json parses");

    assert_eq!(row.id, 7);
    assert_eq!(row.title, "Buy milk");
    assert!(!row.done);
    assert_eq!(row.done_time, None);
  }

  #[test]
  fn insert_payload_carries_no_row_metadata()
  {
    let payload = TodoInsert {
      title: "Buy milk".to_string(),
      done:  false
    };

    let value =
      serde_json::to_value(&payload)
        .expect("insert serializes");
    let object = value
      .as_object()
      .expect("insert is an object");

    assert_eq!(object.len(), 2);
    assert!(object.contains_key("title"));
    assert!(object.contains_key("done"));
  }

  #[test]
  fn done_patch_writes_explicit_null_when_clearing()
  {
    let patch = TodoDonePatch {
      done:      false,
      done_time: None
    };

    let value =
      serde_json::to_value(&patch)
        .expect("patch serializes");

    assert!(
      value
        .get("done_time")
        .expect("done_time key present")
        .is_null()
    );
  }

  #[test]
  fn identity_ignores_extra_auth_fields()
  {
    let raw = r#"{
      "id": "7c0a3ba2-9c51-44a1-bd4f-d06a1f3bba5d",
      "email": "dev@example.com",
      "aud": "authenticated",
      "role": "authenticated"
    }"#;

    let identity: Identity =
      serde_json::from_str(raw)
        .expect("identity parses");

    assert_eq!(
      identity.email.as_deref(),
      Some("dev@example.com")
    );
  }
}
