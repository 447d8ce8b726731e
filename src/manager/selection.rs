use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Process-wide set of entry names marked for the next batch operation.
///
/// Names are plain strings and are never checked against directory contents;
/// a stale name simply fails when an executor touches it. The store is a
/// value type so tests construct isolated instances per case.
#[derive(Debug, Default)]
pub struct Selection {
    names: BTreeSet<String>,
}

/// A fully resolved mutation of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    Select(String),
    Deselect(String),
    /// Replace the set with the supplied names. The store has no knowledge
    /// of directory contents, so the caller provides the full entry list.
    SelectAll(Vec<String>),
    DeselectAll,
}

/// Outcome of parsing the wire form `{action, entry?}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAction {
    /// Ready to apply as-is.
    Apply(SelectionAction),
    /// `select_all`: the caller must gather the current entry list first.
    SelectAll,
}

/// Parse an action tag and optional entry name from a request body.
pub fn parse_action(tag: &str, entry: Option<String>) -> Result<ParsedAction> {
    match tag {
        "select" | "deselect" => {
            let entry = entry.ok_or_else(|| Error::MissingEntry {
                action: tag.to_string(),
            })?;
            Ok(ParsedAction::Apply(if tag == "select" {
                SelectionAction::Select(entry)
            } else {
                SelectionAction::Deselect(entry)
            }))
        }
        "select_all" => Ok(ParsedAction::SelectAll),
        "deselect_all" => Ok(ParsedAction::Apply(SelectionAction::DeselectAll)),
        other => Err(Error::InvalidAction {
            action: other.to_string(),
        }),
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current names in lexicographic order.
    pub fn get(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Apply one action. Every action is idempotent.
    pub fn apply(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::Select(entry) => {
                self.names.insert(entry);
            }
            SelectionAction::Deselect(entry) => {
                self.names.remove(&entry);
            }
            SelectionAction::SelectAll(entries) => {
                self.names = entries.into_iter().collect();
            }
            SelectionAction::DeselectAll => self.names.clear(),
        }
    }

    /// Drop a name after an executor has consumed it (delete/move success).
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_of(names: &[&str]) -> Selection {
        let mut s = Selection::new();
        s.apply(SelectionAction::SelectAll(
            names.iter().map(|n| n.to_string()).collect(),
        ));
        s
    }

    #[test]
    fn select_is_idempotent() {
        let mut s = Selection::new();
        s.apply(SelectionAction::Select("a.txt".into()));
        s.apply(SelectionAction::Select("a.txt".into()));
        assert_eq!(s.get(), vec!["a.txt"]);
    }

    #[test]
    fn deselect_inverts_select() {
        let mut s = selection_of(&["keep.txt"]);
        let before = s.get();
        s.apply(SelectionAction::Select("tmp.log".into()));
        s.apply(SelectionAction::Deselect("tmp.log".into()));
        assert_eq!(s.get(), before);
    }

    #[test]
    fn deselect_absent_is_noop() {
        let mut s = selection_of(&["a"]);
        s.apply(SelectionAction::Deselect("missing".into()));
        assert_eq!(s.get(), vec!["a"]);
    }

    #[test]
    fn select_all_replaces_then_deselect_all_clears() {
        let mut s = selection_of(&["old"]);
        s.apply(SelectionAction::SelectAll(vec!["x".into(), "y".into()]));
        assert_eq!(s.get(), vec!["x", "y"]);
        s.apply(SelectionAction::DeselectAll);
        assert!(s.is_empty());
    }

    #[test]
    fn parse_rejects_unknown_action() {
        let err = parse_action("invert", None).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { action } if action == "invert"));
    }

    #[test]
    fn parse_requires_entry_for_select_and_deselect() {
        for tag in ["select", "deselect"] {
            let err = parse_action(tag, None).unwrap_err();
            assert!(matches!(err, Error::MissingEntry { action } if action == tag));
        }
    }

    #[test]
    fn parse_select_all_defers_to_caller() {
        assert_eq!(
            parse_action("select_all", None).unwrap(),
            ParsedAction::SelectAll
        );
        // A stray entry field is tolerated.
        assert_eq!(
            parse_action("deselect_all", Some("a".into())).unwrap(),
            ParsedAction::Apply(SelectionAction::DeselectAll)
        );
    }
}
