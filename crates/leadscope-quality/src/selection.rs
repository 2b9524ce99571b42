//! The set of rows a user has picked for bulk actions.
//!
//! Rows are identified by [`LeadKey`], which is derived from lead content,
//! so re-sorting or re-filtering a view never moves a selection onto a
//! different lead.

use std::collections::BTreeSet;

use leadscope_core::{BusinessLead, LeadKey};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: BTreeSet<LeadKey>,
}

impl SelectionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of `key`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, key: LeadKey) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    pub fn select_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = LeadKey>,
    {
        self.selected.extend(keys);
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn is_selected(&self, key: &LeadKey) -> bool {
        self.selected.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop keys whose lead is no longer among `rows`.
    pub fn retain_visible<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a BusinessLead>,
    {
        let visible: BTreeSet<LeadKey> = rows.into_iter().map(BusinessLead::key).collect();
        self.selected.retain(|key| visible.contains(key));
    }

    /// The leads an action should operate on, in display order.
    ///
    /// An empty selection means "everything currently displayed".
    #[must_use]
    pub fn resolve<'a, I>(&self, rows: I) -> Vec<&'a BusinessLead>
    where
        I: IntoIterator<Item = &'a BusinessLead>,
    {
        if self.selected.is_empty() {
            return rows.into_iter().collect();
        }
        rows.into_iter()
            .filter(|lead| self.selected.contains(&lead.key()))
            .collect()
    }
}
