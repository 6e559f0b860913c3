use gloo::net::http::Request;
use tally_shared::{
  TodoDonePatch,
  TodoInsert,
  TodoRow
};

use super::config::ServiceConfig;
use super::{
  authorized,
  decode_json
};

const TODO_TABLE: &str = "todo";

/// All rows, newest first.
pub async fn list()
-> Result<Vec<TodoRow>, String> {
  let service =
    ServiceConfig::resolve()?;

  let response = authorized(
    Request::get(&list_url(&service)),
    &service
  )
  .send()
  .await
  .map_err(|e| {
    format!(
      "todo list request failed: {e}"
    )
  })?;

  decode_json(response, "todo list")
    .await
}

/// Inserts one row; the store answers with the created
/// row(s), id and created_at filled in.
pub async fn insert(
  row: &TodoInsert
) -> Result<Vec<TodoRow>, String> {
  let service =
    ServiceConfig::resolve()?;

  let request = authorized(
    Request::post(&table_url(
      &service, None
    )),
    &service
  )
  .header(
    "Prefer",
    "return=representation"
  )
  .json(&[row])
  .map_err(|e| {
    format!(
      "todo insert encode error: {e}"
    )
  })?;

  let response = request
    .send()
    .await
    .map_err(|e| {
      format!(
        "todo insert request failed: {e}"
      )
    })?;

  decode_json(response, "todo insert")
    .await
}

pub async fn set_done(
  id: i64,
  patch: &TodoDonePatch
) -> Result<(), String> {
  let service =
    ServiceConfig::resolve()?;

  let request = authorized(
    Request::patch(&table_url(
      &service,
      Some(id)
    )),
    &service
  )
  .header(
    "Prefer",
    "return=representation"
  )
  .json(patch)
  .map_err(|e| {
    format!(
      "todo update encode error: {e}"
    )
  })?;

  let response = request
    .send()
    .await
    .map_err(|e| {
      format!(
        "todo update request failed: {e}"
      )
    })?;

  let rows: Vec<TodoRow> =
    decode_json(
      response,
      "todo update"
    )
    .await?;

  if rows.is_empty() {
    return Err(format!(
      "todo update matched no row \
       for id {id}"
    ));
  }

  Ok(())
}

pub async fn delete(
  id: i64
) -> Result<(), String> {
  let service =
    ServiceConfig::resolve()?;

  let response = authorized(
    Request::delete(&table_url(
      &service,
      Some(id)
    )),
    &service
  )
  .header(
    "Prefer",
    "return=representation"
  )
  .send()
  .await
  .map_err(|e| {
    format!(
      "todo delete request failed: {e}"
    )
  })?;

  let rows: Vec<TodoRow> =
    decode_json(
      response,
      "todo delete"
    )
    .await?;

  if rows.is_empty() {
    return Err(format!(
      "todo delete matched no row \
       for id {id}"
    ));
  }

  Ok(())
}

fn list_url(
  service: &ServiceConfig
) -> String {
  format!(
    "{}/rest/v1/{TODO_TABLE}?select=*&order=created_at.desc",
    service.base_url
  )
}

fn table_url(
  service: &ServiceConfig,
  id: Option<i64>
) -> String {
  match id {
    | Some(id) => format!(
      "{}/rest/v1/{TODO_TABLE}?id=eq.{id}",
      service.base_url
    ),
    | None => format!(
      "{}/rest/v1/{TODO_TABLE}",
      service.base_url
    )
  }
}
