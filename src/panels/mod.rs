mod task_list;
mod util;

pub use task_list::TaskListPanel;
pub use util::column_block;
