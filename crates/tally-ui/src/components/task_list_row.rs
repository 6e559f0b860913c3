use chrono_tz::Tz;
use tally_shared::TodoRow;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use crate::app::datetime::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub todo:      TodoRow,
  pub timezone:  Tz,
  pub on_toggle: Callback<(i64, bool)>,
  pub on_delete: Callback<i64>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.todo.id;
  let done = props.todo.done;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  let row_class = if done {
    "row done"
  } else {
    "row"
  };
  let title_class = if done {
    "row-title done"
  } else {
    "row-title"
  };

  let created = format_timestamp(
    Some(&props.todo.created_at),
    props.timezone
  );
  let completed = if done {
    props
      .todo
      .done_time
      .as_deref()
      .map(|done_time| {
        format_timestamp(
          Some(done_time),
          props.timezone
        )
      })
  } else {
    None
  };

  html! {
      <div class={row_class}>
          <div class="row-main">
              <input
                  type="checkbox"
                  id={format!("todo-{id}")}
                  checked={done}
                  onchange={move |_| on_toggle.emit((id, done))}
              />
              <div>
                  <label for={format!("todo-{id}")} class={title_class}>
                      { &props.todo.title }
                  </label>
                  <div class="row-meta">
                      { format!("Created: {created}") }
                      {
                          if let Some(completed) = completed {
                              html! {
                                  <span>{ format!(" • Completed: {completed}") }</span>
                              }
                          } else {
                              html! {}
                          }
                      }
                  </div>
              </div>
          </div>
          <button
              class="btn danger"
              onclick={move |_| on_delete.emit(id)}
          >
              { "Delete" }
          </button>
      </div>
  }
}
