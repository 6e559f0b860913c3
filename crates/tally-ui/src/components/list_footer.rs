use yew::{
  Html,
  Properties,
  function_component,
  html
};

use crate::app::tasks::footer_label;

#[derive(Properties, PartialEq)]
pub struct ListFooterProps {
  pub completed: usize,
  pub total:     usize
}

#[function_component(ListFooter)]
pub fn list_footer(
  props: &ListFooterProps
) -> Html {
  html! {
      <div class="card-footer">
          { footer_label(props.completed, props.total) }
      </div>
  }
}
