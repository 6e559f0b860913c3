use tally_shared::{
  TodoDonePatch,
  TodoRow
};

/// The add precondition: a draft participates only once its
/// trimmed form is non-empty.
pub fn trimmed_title(
  draft: &str
) -> Option<String> {
  let trimmed = draft.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

/// Store-returned rows land in front of the existing
/// sequence, keeping it newest-first.
pub fn prepend_rows(
  current: &[TodoRow],
  created: Vec<TodoRow>
) -> Vec<TodoRow> {
  let mut next = created;
  next
    .extend(current.iter().cloned());
  next
}

// `done` and `done_time` only ever change together.
pub fn toggle_patch(
  current_done: bool,
  now: String
) -> TodoDonePatch {
  let done = !current_done;
  let done_time =
    if done { Some(now) } else { None };

  TodoDonePatch {
    done,
    done_time
  }
}

/// Applies a confirmed toggle locally, preserving the row's
/// position in the sequence.
pub fn apply_toggle(
  current: &[TodoRow],
  id: i64,
  patch: &TodoDonePatch
) -> Vec<TodoRow> {
  current
    .iter()
    .cloned()
    .map(|row| {
      if row.id == id {
        TodoRow {
          done: patch.done,
          done_time: patch
            .done_time
            .clone(),
          ..row
        }
      } else {
        row
      }
    })
    .collect()
}

pub fn remove_row(
  current: &[TodoRow],
  id: i64
) -> Vec<TodoRow> {
  current
    .iter()
    .filter(|row| row.id != id)
    .cloned()
    .collect()
}

pub fn completed_count(
  rows: &[TodoRow]
) -> usize {
  rows
    .iter()
    .filter(|row| row.done)
    .count()
}

pub fn footer_label(
  completed: usize,
  total: usize
) -> String {
  format!(
    "{completed} of {total} tasks \
     completed"
  )
}
