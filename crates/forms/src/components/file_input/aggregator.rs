use composer_util::list_key;
use tracing::debug;

use crate::components::common::DistinctUntilChanged;

/// Which event source triggered a form change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// The secondary file path list was edited.
    SecondaryFiles,
    /// A native form interaction (commit of a plain text field).
    Raw,
}

/// Merges the secondary-file edits and raw form changes into one stream.
///
/// Secondary file edits pass through a distinct-until-changed guard keyed by
/// the comma-joined path list. Raw changes always pass. Nothing passes once
/// the aggregator has been unsubscribed.
#[derive(Debug, Default)]
pub(crate) struct ChangeAggregator {
    secondary_files: DistinctUntilChanged,
    subscribed: bool,
}

impl ChangeAggregator {
    /// Starts aggregating, treating `initial_paths` as already seen.
    pub(crate) fn subscribe(initial_paths: &[String]) -> Self {
        Self {
            secondary_files: DistinctUntilChanged::seeded(list_key(initial_paths)),
            subscribed: true,
        }
    }

    pub(crate) fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    pub(crate) fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Feeds an edit of the secondary file list.
    pub(crate) fn secondary_files_changed(&mut self, paths: &[String]) -> Option<ChangeSource> {
        if !self.subscribed {
            return None;
        }
        let key = list_key(paths);
        if !self.secondary_files.admit(key) {
            debug!(paths = ?paths, "suppressing unchanged secondary files");
            return None;
        }
        Some(ChangeSource::SecondaryFiles)
    }

    /// Feeds a native form change.
    pub(crate) fn raw_change(&self) -> Option<ChangeSource> {
        self.subscribed.then_some(ChangeSource::Raw)
    }

    /// Records a value written into the secondary files field by an inbound
    /// model refresh, so the write itself never surfaces as an edit.
    pub(crate) fn sync_secondary_files(&mut self, paths: &[String]) {
        self.secondary_files.seed(list_key(paths));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn suppresses_structurally_equal_edits() {
        let mut aggregator = ChangeAggregator::subscribe(&[]);
        assert_eq!(aggregator.secondary_files_changed(&paths(&["a.txt"])), Some(ChangeSource::SecondaryFiles));
        assert_eq!(aggregator.secondary_files_changed(&paths(&["a.txt"])), None);
        assert_eq!(aggregator.secondary_files_changed(&paths(&[])), Some(ChangeSource::SecondaryFiles));
    }

    #[test]
    fn initial_paths_count_as_seen() {
        let mut aggregator = ChangeAggregator::subscribe(&paths(&["a.txt", "b.txt"]));
        assert_eq!(aggregator.secondary_files_changed(&paths(&["a.txt", "b.txt"])), None);
    }

    #[test]
    fn synced_paths_are_not_edits() {
        let mut aggregator = ChangeAggregator::subscribe(&[]);
        aggregator.sync_secondary_files(&paths(&["c.txt"]));
        assert_eq!(aggregator.secondary_files_changed(&paths(&["c.txt"])), None);
        assert_eq!(aggregator.secondary_files_changed(&paths(&[])), Some(ChangeSource::SecondaryFiles));
    }

    #[test]
    fn raw_changes_always_pass_until_unsubscribed() {
        let mut aggregator = ChangeAggregator::subscribe(&[]);
        assert_eq!(aggregator.raw_change(), Some(ChangeSource::Raw));
        assert_eq!(aggregator.raw_change(), Some(ChangeSource::Raw));

        aggregator.unsubscribe();
        assert!(!aggregator.is_subscribed());
        assert_eq!(aggregator.raw_change(), None);
        assert_eq!(aggregator.secondary_files_changed(&paths(&["x"])), None);
    }
}
