// crates/shared-kernel/src/value_objects/entry_name.rs
use std::{
    ffi::{OsStr, OsString},
    fmt,
};

/// A directory entry name as the OS reported it, paired with its UTF-8
/// rendering.
///
/// Filesystem calls use [`EntryName::raw`]; ordering and display use
/// [`EntryName::as_str`], which replaces invalid sequences with `U+FFFD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryName {
    raw: OsString,
    display: String,
}

impl EntryName {
    pub fn new(raw: impl Into<OsString>) -> Self {
        let raw = raw.into();
        let display = raw.to_string_lossy().into_owned();
        Self { raw, display }
    }

    #[inline]
    pub fn raw(&self) -> &OsStr {
        &self.raw
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn into_display(self) -> String {
        self.display
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for EntryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EntryName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<OsString> for EntryName {
    fn from(raw: OsString) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
