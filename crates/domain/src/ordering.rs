// crates/domain/src/ordering.rs
//! Visibility and ordering rules for directory entry names.
//!
//! The pipeline is split into small pure steps so each rule can be tested
//! on its own:
//!
//! 1. [`with_self_entries`] adds `.` and `..` when hidden entries are shown
//! 2. [`filter_hidden`] drops dotfiles unless hidden entries are shown
//! 3. [`sort_names`] orders by [`sort_key`], breaking ties by the raw name
//! 4. [`SortOrder::apply`] reverses the finished sequence for `-r`
//!
//! [`order_names`] composes the four.

use std::cmp::Ordering;

use crate::options::ListingOptions;

pub const SELF_ENTRY: &str = ".";
pub const PARENT_ENTRY: &str = "..";

/// Direction applied to an already sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Reverses the whole sequence for [`SortOrder::Descending`]. The
    /// comparator is never negated, so ties keep their relative order
    /// mirrored rather than re-sorted.
    pub fn apply<T>(self, mut names: Vec<T>) -> Vec<T> {
        if self == Self::Descending {
            names.reverse();
        }
        names
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(reverse: bool) -> Self {
        if reverse {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

#[inline]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Adds the `.` and `..` entries when hidden entries are requested.
///
/// Directory reads never report them, so `-a` listings add them explicitly.
/// Names already present are not duplicated.
pub fn with_self_entries<T>(mut names: Vec<T>, show_hidden: bool) -> Vec<T>
where
    T: AsRef<str> + From<&'static str>,
{
    if show_hidden {
        for special in [SELF_ENTRY, PARENT_ENTRY] {
            if !names.iter().any(|n| n.as_ref() == special) {
                names.push(T::from(special));
            }
        }
    }
    names
}

pub fn filter_hidden<T: AsRef<str>>(names: Vec<T>, show_hidden: bool) -> Vec<T> {
    if show_hidden {
        return names;
    }
    names.into_iter().filter(|n| !is_hidden(n.as_ref())).collect()
}

/// Derived ordering key: ASCII letters and digits only, lowercased.
pub fn sort_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Compares by [`sort_key`], then by the original name.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

/// Stable sort by [`compare_names`] over the display form of each name.
pub fn sort_names<T: AsRef<str>>(mut names: Vec<T>) -> Vec<T> {
    names.sort_by_cached_key(|n| {
        let name = n.as_ref();
        (sort_key(name), name.to_owned())
    });
    names
}

/// Full visibility + ordering pipeline for one listing.
pub fn order_names<T>(names: Vec<T>, options: &ListingOptions) -> Vec<T>
where
    T: AsRef<str> + From<&'static str>,
{
    let names = with_self_entries(names, options.show_hidden);
    let names = filter_hidden(names, options.show_hidden);
    let names = sort_names(names);
    SortOrder::from(options.reverse).apply(names)
}
