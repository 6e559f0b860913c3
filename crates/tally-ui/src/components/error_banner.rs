use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
  pub message: &'static str
}

#[function_component(ErrorBanner)]
pub fn error_banner(
  props: &ErrorBannerProps
) -> Html {
  html! {
      <div class="banner error">
          <strong>{ "Error" }</strong>
          <span>{ props.message }</span>
      </div>
  }
}
