use tally_shared::TodoRow;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;
use crate::app::datetime::display_timezone;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub todos:     Vec<TodoRow>,
  pub on_toggle: Callback<(i64, bool)>,
  pub on_delete: Callback<i64>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.todos.is_empty() {
    return html! {
        <div class="empty-list">
            { "No todos yet. Add your first task!" }
        </div>
    };
  }

  let timezone = display_timezone();

  html! {
      <div class="todo-list">
          {
              for props.todos.iter().cloned().map(|todo| html! {
                  <TaskListRow
                      todo={todo}
                      timezone={timezone}
                      on_toggle={props.on_toggle.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </div>
  }
}
