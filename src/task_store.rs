use crate::task::{Column, Task};

const TASKS_PER_COLUMN: usize = 3;

/// The fixed sample tasks shown in `column`.
pub fn seed_tasks(column: Column) -> Vec<Task> {
    (1..=TASKS_PER_COLUMN)
        .map(|n| {
            Task::new(
                format!("title {n} goes here"),
                format!("description {n} goes here"),
                column,
            )
        })
        .collect()
}
