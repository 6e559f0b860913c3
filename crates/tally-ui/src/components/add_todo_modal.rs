use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AddTodoModalProps {
  pub draft:     String,
  pub on_input:
    Callback<web_sys::InputEvent>,
  pub on_cancel: Callback<MouseEvent>,
  pub on_submit: Callback<MouseEvent>
}

#[function_component(AddTodoModal)]
pub fn add_todo_modal(
  props: &AddTodoModalProps
) -> Html {
  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="modal-header">
                  <h3>{ "Add New Todo" }</h3>
                  <p class="card-description">
                      { "Enter the details for your new task" }
                  </p>
              </div>
              <div class="field">
                  <label for="todo-title-input">{ "Title" }</label>
                  <input
                      id="todo-title-input"
                      value={props.draft.clone()}
                      placeholder="Enter your task"
                      oninput={props.on_input.clone()}
                  />
              </div>
              <div class="modal-footer">
                  <button
                      type="button"
                      class="btn"
                      onclick={props.on_cancel.clone()}
                  >
                      { "Cancel" }
                  </button>
                  <button
                      type="button"
                      class="btn primary"
                      onclick={props.on_submit.clone()}
                  >
                      { "Add Todo" }
                  </button>
              </div>
          </div>
      </div>
  }
}
