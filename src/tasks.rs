use crate::dates::today_key;
use crate::models::Task;
use uuid::Uuid;

pub fn new_task(title: impl Into<String>, recurring: bool) -> Task {
    Task {
        id: Uuid::new_v4().to_string(),
        title: title.into(),
        recurring,
        created_at: today_key(),
        completed_dates: Vec::new(),
    }
}

/// Tasks due on `day`, in insertion order. Recurring tasks are due from
/// their creation day onward, one-off tasks only on the creation day itself.
pub fn due_on<'a>(tasks: &'a [Task], day: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| {
            if task.recurring {
                task.created_at.as_str() <= day
            } else {
                task.created_at == day
            }
        })
        .collect()
}

/// Flips membership of `day` in the task's completed dates. An unknown id
/// changes nothing and reports `false`.
pub fn toggle_completion(tasks: &mut [Task], id: &str, day: &str) -> bool {
    let task = match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => task,
        None => return false,
    };

    if task.completed_dates.iter().any(|done| done == day) {
        task.completed_dates.retain(|done| done != day);
    } else {
        task.completed_dates.push(day.to_string());
    }
    true
}

pub fn remove_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}
