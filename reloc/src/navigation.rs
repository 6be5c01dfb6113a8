//! Session navigation state.
//!
//! A shell session carries five location slots in its environment:
//!
//! | slot                      | variable | updated by                    |
//! |---------------------------|----------|-------------------------------|
//! | [`Slot::Current`]         | `r`      | a navigation that moved       |
//! | [`Slot::Previous`]        | `rr`     | a navigation that moved       |
//! | [`Slot::Pending`]         | `rp`     | a query with prefixes         |
//! | [`Slot::PendingOneBack`]  | `r1`     | a query with prefixes         |
//! | [`Slot::PendingTwoBack`]  | `r2`     | a query with prefixes         |
//!
//! [`NavigationState`] holds a snapshot of these slots. Transitions are
//! plain methods on the struct; reading the environment and rendering
//! export statements happen outside them.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the navigation slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Where the last real navigation went.
    Current,
    /// Where the last real navigation came from.
    Previous,
    /// The most recently queried location.
    Pending,
    /// The query before [`Slot::Pending`].
    PendingOneBack,
    /// The query before [`Slot::PendingOneBack`].
    PendingTwoBack,
}

impl Slot {
    /// All slots, in export order.
    pub const ALL: [Self; 5] = [
        Self::Current,
        Self::Previous,
        Self::Pending,
        Self::PendingOneBack,
        Self::PendingTwoBack,
    ];

    /// The environment variable backing this slot.
    #[must_use]
    pub const fn var_name(self) -> &'static str {
        match self {
            Self::Current => "r",
            Self::Previous => "rr",
            Self::Pending => "rp",
            Self::PendingOneBack => "r1",
            Self::PendingTwoBack => "r2",
        }
    }

    /// Looks up a slot by its variable name.
    #[must_use]
    pub fn from_var_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.var_name() == name)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.var_name())
    }
}

/// Snapshot of the navigation slots.
///
/// # Examples
///
/// ```
/// use reloc::{NavigationState, Slot};
/// use std::path::Path;
///
/// let mut state = NavigationState::default();
/// state.apply_query_update("/p1");
/// state.apply_query_update("/p2");
/// assert_eq!(state.get(Slot::Pending), Some(Path::new("/p2")));
/// assert_eq!(state.get(Slot::PendingOneBack), Some(Path::new("/p1")));
///
/// assert!(state.apply_navigate_update("/old", "/new"));
/// assert_eq!(state.get(Slot::Previous), Some(Path::new("/old")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    slots: HashMap<Slot, PathBuf>,
}

impl NavigationState {
    /// Reads a snapshot from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(env::vars_os())
    }

    /// Builds a snapshot from `(name, value)` pairs.
    ///
    /// Unknown names are ignored; empty values leave the slot unset.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut state = Self::default();
        for (name, value) in vars {
            let name = name.into();
            let Some(slot) = name.to_str().and_then(Slot::from_var_name) else {
                continue;
            };
            let value = value.into();
            if !value.is_empty() {
                state.slots.insert(slot, PathBuf::from(value));
            }
        }
        state
    }

    /// The value of `slot`, if set.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&Path> {
        self.slots.get(&slot).map(PathBuf::as_path)
    }

    /// Sets or clears `slot`.
    pub fn set(&mut self, slot: Slot, value: Option<PathBuf>) {
        match value {
            Some(path) if !path.as_os_str().is_empty() => {
                self.slots.insert(slot, path);
            }
            _ => {
                self.slots.remove(&slot);
            }
        }
    }

    /// Shifts the pending chain by one and records `resolved` as pending.
    ///
    /// Each older slot takes the value of the newer one only when the newer
    /// one is set.
    pub fn apply_query_update(&mut self, resolved: impl Into<PathBuf>) {
        self.shift(Slot::PendingOneBack, Slot::PendingTwoBack);
        self.shift(Slot::Pending, Slot::PendingOneBack);
        self.slots.insert(Slot::Pending, resolved.into());
    }

    /// Records a move from `old` to `new`.
    ///
    /// Returns `false` and changes nothing when both are the same directory.
    pub fn apply_navigate_update(
        &mut self,
        old: impl Into<PathBuf>,
        new: impl Into<PathBuf>,
    ) -> bool {
        let (old, new) = (old.into(), new.into());
        if old == new {
            return false;
        }
        self.slots.insert(Slot::Previous, old);
        self.slots.insert(Slot::Current, new);
        true
    }

    /// `(variable, value)` pairs for every set slot, in [`Slot::ALL`] order.
    #[must_use]
    pub fn exports(&self) -> Vec<(&'static str, &Path)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|path| (slot.var_name(), path)))
            .collect()
    }

    /// Slots whose value differs from `before`, as `(variable, value)`.
    ///
    /// A slot that became unset is reported with `None`.
    #[must_use]
    pub fn changes_since(&self, before: &Self) -> Vec<(&'static str, Option<&Path>)> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot) != before.get(*slot))
            .map(|slot| (slot.var_name(), self.get(slot)))
            .collect()
    }

    fn shift(&mut self, from: Slot, to: Slot) {
        if let Some(value) = self.slots.get(&from).cloned() {
            self.slots.insert(to, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_update_shifts_chain() {
        let mut state = NavigationState::default();
        state.apply_query_update("/p1");
        assert_eq!(state.get(Slot::Pending), Some(Path::new("/p1")));
        assert_eq!(state.get(Slot::PendingOneBack), None);

        state.apply_query_update("/p2");
        assert_eq!(state.get(Slot::Pending), Some(Path::new("/p2")));
        assert_eq!(state.get(Slot::PendingOneBack), Some(Path::new("/p1")));
        assert_eq!(state.get(Slot::PendingTwoBack), None);

        state.apply_query_update("/p3");
        assert_eq!(state.get(Slot::PendingTwoBack), Some(Path::new("/p1")));
        assert_eq!(state.get(Slot::PendingOneBack), Some(Path::new("/p2")));
        assert_eq!(state.get(Slot::Pending), Some(Path::new("/p3")));
    }

    #[test]
    fn test_query_update_leaves_current_and_previous() {
        let mut state = NavigationState::default();
        state.set(Slot::Current, Some(PathBuf::from("/c")));
        state.apply_query_update("/p");
        assert_eq!(state.get(Slot::Current), Some(Path::new("/c")));
        assert_eq!(state.get(Slot::Previous), None);
    }

    #[test]
    fn test_navigate_update() {
        let mut state = NavigationState::default();
        assert!(state.apply_navigate_update("/a", "/b"));
        assert_eq!(state.get(Slot::Previous), Some(Path::new("/a")));
        assert_eq!(state.get(Slot::Current), Some(Path::new("/b")));

        assert!(!state.apply_navigate_update("/b", "/b"));
        assert_eq!(state.get(Slot::Previous), Some(Path::new("/a")));
        assert_eq!(state.get(Slot::Pending), None);
    }

    #[test]
    fn test_from_vars() {
        let state = NavigationState::from_vars([
            ("r", "/cur"),
            ("rr", ""),
            ("r2", "/older"),
            ("HOME", "/home/u"),
        ]);
        assert_eq!(state.get(Slot::Current), Some(Path::new("/cur")));
        assert_eq!(state.get(Slot::Previous), None);
        assert_eq!(state.get(Slot::PendingTwoBack), Some(Path::new("/older")));
        assert_eq!(state.exports().len(), 2);
    }

    #[test]
    fn test_set_empty_clears() {
        let mut state = NavigationState::from_vars([("rp", "/x")]);
        state.set(Slot::Pending, Some(PathBuf::new()));
        assert_eq!(state.get(Slot::Pending), None);
    }

    #[test]
    fn test_exports_order_and_changes() {
        let before = NavigationState::from_vars([("r", "/a"), ("rp", "/q")]);
        let mut after = before.clone();
        after.apply_navigate_update("/a", "/b");

        let names: Vec<&str> = after.exports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["r", "rr", "rp"]);

        let changed = after.changes_since(&before);
        assert_eq!(
            changed,
            vec![("r", Some(Path::new("/b"))), ("rr", Some(Path::new("/a")))]
        );
    }

    #[test]
    fn test_slot_names_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_var_name(slot.var_name()), Some(slot));
        }
        assert_eq!(Slot::from_var_name("r3"), None);
    }
}
