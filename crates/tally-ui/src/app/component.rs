use chrono::{
  SecondsFormat,
  Utc
};
use tally_shared::{
  TodoInsert,
  TodoRow
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};

use super::tasks;
use super::ui_debug;
use crate::api;
use crate::components::{
  AddTodoModal,
  ErrorBanner,
  ListFooter,
  LoadingSkeleton,
  TaskList
};

const LOAD_FAILED_MESSAGE: &str =
  "Failed to load todos. Please try \
   again later.";
const ADD_FAILED_MESSAGE: &str =
  "Failed to add todo. Please try \
   again.";
const UPDATE_FAILED_MESSAGE: &str =
  "Failed to update todo status. \
   Please try again.";
const DELETE_FAILED_MESSAGE: &str =
  "Failed to delete todo. Please try \
   again.";

#[function_component(TodoView)]
pub fn todo_view() -> Html {
  let todos =
    use_state(Vec::<TodoRow>::new);
  let draft_title =
    use_state(String::new);
  let is_loading = use_state(|| true);
  let error = use_state(|| {
    None::<&'static str>
  });
  let add_open = use_state(|| false);

  {
    let todos = todos.clone();
    let is_loading =
      is_loading.clone();
    let error = error.clone();

    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::todos::list().await
          {
            | Ok(rows) => {
              tracing::debug!(
                total = rows.len(),
                "loaded todo list"
              );
              todos.set(rows);
            }
            | Err(err) => {
              tracing::error!(
                error = %err,
                "todo list failed"
              );
              error.set(Some(
                LOAD_FAILED_MESSAGE
              ));
            }
          }
          is_loading.set(false);
        }
      );
      || ()
    });
  }

  let on_add_click = {
    let add_open = add_open.clone();
    Callback::from(
      move |_: MouseEvent| {
        add_open.set(true);
        ui_debug(
          "action.add_modal.open",
          "clicked Add New Todo"
        );
      }
    )
  };

  let on_add_cancel = {
    let add_open = add_open.clone();
    Callback::from(
      move |_: MouseEvent| {
        add_open.set(false);
      }
    )
  };

  let on_draft_input = {
    let draft_title =
      draft_title.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        draft_title.set(input.value());
      }
    )
  };

  let on_add_submit = {
    let todos = todos.clone();
    let draft_title =
      draft_title.clone();
    let add_open = add_open.clone();
    let error = error.clone();

    Callback::from(
      move |_: MouseEvent| {
        // Blank drafts send nothing; the dialog stays open
        // with the draft untouched.
        let Some(title) =
          tasks::trimmed_title(
            &draft_title
          )
        else {
          return;
        };

        let todos = todos.clone();
        let draft_title =
          draft_title.clone();
        let add_open = add_open.clone();
        let error = error.clone();

        wasm_bindgen_futures::spawn_local(async move {
          let row = TodoInsert {
            title,
            done: false
          };

          match api::todos::insert(&row).await {
            | Ok(created) => {
              todos.set(tasks::prepend_rows(&todos, created));
              draft_title.set(String::new());
              add_open.set(false);
            }
            | Err(err) => {
              tracing::error!(error = %err, "todo insert failed");
              error.set(Some(ADD_FAILED_MESSAGE));
            }
          }
        });
      }
    )
  };

  let on_toggle = {
    let todos = todos.clone();
    let error = error.clone();

    Callback::from(
      move |(id, current_done): (
        i64,
        bool
      )| {
        let todos = todos.clone();
        let error = error.clone();
        let patch = tasks::toggle_patch(
          current_done,
          Utc::now().to_rfc3339_opts(
            SecondsFormat::Millis,
            true
          )
        );

        wasm_bindgen_futures::spawn_local(async move {
          match api::todos::set_done(id, &patch).await {
            // The store confirmed; mirror the same values
            // locally instead of re-fetching the row.
            | Ok(()) => {
              todos.set(tasks::apply_toggle(&todos, id, &patch));
            }
            | Err(err) => {
              tracing::error!(error = %err, id, "todo update failed");
              error.set(Some(UPDATE_FAILED_MESSAGE));
            }
          }
        });
      }
    )
  };

  let on_delete = {
    let todos = todos.clone();
    let error = error.clone();

    Callback::from(move |id: i64| {
      let todos = todos.clone();
      let error = error.clone();

      wasm_bindgen_futures::spawn_local(
        async move {
          match api::todos::delete(id)
            .await
          {
            | Ok(()) => {
              todos.set(
                tasks::remove_row(
                  &todos, id
                )
              );
            }
            | Err(err) => {
              tracing::error!(
                error = %err,
                id,
                "todo delete failed"
              );
              error.set(Some(
                DELETE_FAILED_MESSAGE
              ));
            }
          }
        }
      );
    })
  };

  if *is_loading {
    return html! {
        <LoadingSkeleton />
    };
  }

  let completed =
    tasks::completed_count(&todos);

  html! {
      <div class="card">
          <div class="card-header">
              <h2 class="card-title">{ "Todo List" }</h2>
              <p class="card-description">{ "Manage your tasks efficiently" }</p>
          </div>
          <div class="card-content">
              {
                  if let Some(message) = *error {
                      html! { <ErrorBanner message={message} /> }
                  } else {
                      html! {}
                  }
              }
              <div class="toolbar">
                  <button class="btn primary" onclick={on_add_click}>
                      { "Add New Todo" }
                  </button>
              </div>
              {
                  if *add_open {
                      html! {
                          <AddTodoModal
                              draft={(*draft_title).clone()}
                              on_input={on_draft_input}
                              on_cancel={on_add_cancel}
                              on_submit={on_add_submit}
                          />
                      }
                  } else {
                      html! {}
                  }
              }
              <TaskList
                  todos={(*todos).clone()}
                  on_toggle={on_toggle}
                  on_delete={on_delete}
              />
          </div>
          <ListFooter
              completed={completed}
              total={todos.len()}
          />
      </div>
  }
}
