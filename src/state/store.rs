use std::fmt;
use std::sync::Arc;

use super::error::{StoreError, StoreResult};
use crate::tokens::{apply_edit, Theme, ThemeEdit};

const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Theme) + Send + Sync>;

/// Single-writer container for the theme being edited.
///
/// Readers take [`ThemeStore::snapshot`] and hand it to review/export; the
/// snapshot is immutable, so those calls never observe a half-applied edit.
pub struct ThemeStore {
    theme: Arc<Theme>,
    revision: u64,
    undo_stack: Vec<Arc<Theme>>,
    redo_stack: Vec<Arc<Theme>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: Arc::new(theme),
            revision: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn snapshot(&self) -> Arc<Theme> {
        Arc::clone(&self.theme)
    }

    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Theme) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Apply an edit and notify subscribers. Returns the new revision.
    ///
    /// An edit that leaves the theme unchanged (rejected or no-op) does not
    /// bump the revision or touch history.
    pub fn apply(&mut self, edit: &ThemeEdit) -> u64 {
        let next = apply_edit(&self.theme, edit);
        if next == *self.theme {
            tracing::debug!(edit = ?edit, revision = self.revision, "edit produced no change");
            return self.revision;
        }
        tracing::debug!(edit = ?edit, revision = self.revision + 1, "apply theme edit");
        self.commit(next);
        self.revision
    }

    /// Swap in a whole theme, e.g. after importing a JSON snapshot.
    pub fn replace(&mut self, theme: Theme) -> u64 {
        tracing::debug!(name = %theme.name, "replace theme");
        self.commit(theme);
        self.revision
    }

    pub fn undo(&mut self) -> StoreResult<u64> {
        let previous = self.undo_stack.pop().ok_or(StoreError::NothingToUndo)?;
        let current = std::mem::replace(&mut self.theme, previous);
        self.redo_stack.push(current);
        self.revision += 1;
        self.notify();
        tracing::debug!(revision = self.revision, "undo applied");
        Ok(self.revision)
    }

    pub fn redo(&mut self) -> StoreResult<u64> {
        let next = self.redo_stack.pop().ok_or(StoreError::NothingToRedo)?;
        let current = std::mem::replace(&mut self.theme, next);
        self.undo_stack.push(current);
        self.revision += 1;
        self.notify();
        tracing::debug!(revision = self.revision, "redo applied");
        Ok(self.revision)
    }

    fn commit(&mut self, theme: Theme) {
        let previous = std::mem::replace(&mut self.theme, Arc::new(theme));
        self.undo_stack.push(previous);
        if self.undo_stack.len() > HISTORY_LIMIT {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        self.revision += 1;
        self.notify();
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.theme);
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme.name)
            .field("revision", &self.revision)
            .field("undo", &self.undo_stack.len())
            .field("redo", &self.redo_stack.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl fmt::Display for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThemeStore({}@{})", self.theme.name, self.revision)
    }
}
