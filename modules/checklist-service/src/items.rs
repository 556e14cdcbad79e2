//! In-memory checklist item store.

use crate::error::{ChecklistError, ChecklistResult};
use checklist_types::ChecklistItem;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

#[derive(Default)]
pub struct ItemStore {
    items: RwLock<Vec<ChecklistItem>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, newest first. Equal timestamps keep insertion order.
    pub fn list(&self) -> Vec<ChecklistItem> {
        let mut sorted = self.items.read().clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }

    pub fn create(&self, title: &str) -> ChecklistResult<ChecklistItem> {
        self.create_at(title, Utc::now())
    }

    pub fn create_at(
        &self,
        title: &str,
        created_at: DateTime<Utc>,
    ) -> ChecklistResult<ChecklistItem> {
        let title = normalize_title(title, "Title is required.")?;
        let item = ChecklistItem {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            done: false,
            created_at,
        };

        self.items.write().push(item.clone());
        log::debug!("Created checklist item {}", item.id);
        Ok(item)
    }

    /// Applies only the supplied fields. A supplied title must be non-empty after trimming.
    pub fn update(
        &self,
        id: &str,
        title: Option<&str>,
        done: Option<bool>,
    ) -> ChecklistResult<ChecklistItem> {
        let title = title
            .map(|t| normalize_title(t, "Title must not be empty."))
            .transpose()?;

        let mut items = self.items.write();
        let target = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(item_not_found)?;

        if let Some(title) = title {
            target.title = title;
        }
        if let Some(done) = done {
            target.done = done;
        }

        log::debug!("Updated checklist item {}", id);
        Ok(target.clone())
    }

    pub fn delete(&self, id: &str) -> ChecklistResult<bool> {
        let mut items = self.items.write();
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(item_not_found)?;

        items.remove(index);
        log::debug!("Deleted checklist item {}", id);
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.read().iter().filter(|item| item.done).count()
    }
}

fn normalize_title(title: &str, message: &str) -> ChecklistResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ChecklistError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

fn item_not_found() -> ChecklistError {
    ChecklistError::NotFound("Item not found.".to_string())
}
