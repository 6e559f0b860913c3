mod add_todo_modal;
mod error_banner;
mod list_footer;
mod loading_skeleton;
mod task_list;
mod task_list_row;

pub use add_todo_modal::AddTodoModal;
pub use error_banner::ErrorBanner;
pub use list_footer::ListFooter;
pub use loading_skeleton::LoadingSkeleton;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
