// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the metadata adapter reads
//! the same on every target. Unix exposes the full `lstat` record; other
//! platforms get a best-effort approximation.

use std::{cell::RefCell, collections::HashMap, fs::Metadata};

use lsgrid_shared_kernel::FileKind;

// ============================================================================
// File type classification
// ============================================================================

#[cfg(unix)]
pub fn file_kind(meta: &Metadata) -> FileKind {
    use std::os::unix::fs::FileTypeExt;

    let ft = meta.file_type();
    if ft.is_symlink() {
        FileKind::Symlink
    } else if ft.is_dir() {
        FileKind::Directory
    } else if ft.is_char_device() {
        FileKind::CharDevice
    } else if ft.is_block_device() {
        FileKind::BlockDevice
    } else if ft.is_fifo() {
        FileKind::Fifo
    } else if ft.is_socket() {
        FileKind::Socket
    } else {
        FileKind::Regular
    }
}

#[cfg(not(unix))]
pub fn file_kind(meta: &Metadata) -> FileKind {
    let ft = meta.file_type();
    if ft.is_symlink() {
        FileKind::Symlink
    } else if ft.is_dir() {
        FileKind::Directory
    } else {
        FileKind::Regular
    }
}

// ============================================================================
// Raw numeric fields
// ============================================================================

/// Raw fields of an `lstat` result that have no portable accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStat {
    pub mode: u32,
    pub links: u64,
    pub blocks512: u64,
    pub uid: u32,
    pub gid: u32,
}

#[cfg(unix)]
pub fn raw_stat(meta: &Metadata) -> RawStat {
    use std::os::unix::fs::MetadataExt;

    RawStat {
        mode: meta.mode(),
        links: meta.nlink(),
        blocks512: meta.blocks(),
        uid: meta.uid(),
        gid: meta.gid(),
    }
}

#[cfg(not(unix))]
pub fn raw_stat(meta: &Metadata) -> RawStat {
    let base = if meta.is_dir() { 0o755 } else { 0o644 };
    let mode = if meta.permissions().readonly() {
        base & !0o222
    } else {
        base
    };
    RawStat { mode, links: 1, blocks512: meta.len().div_ceil(512), uid: 0, gid: 0 }
}

// ============================================================================
// Owner and group names
// ============================================================================

/// Caches uid/gid to name lookups for the lifetime of one listing.
///
/// Unknown ids fall back to their numeric form.
#[derive(Debug, Default)]
pub struct OwnerNames {
    users: RefCell<HashMap<u32, String>>,
    groups: RefCell<HashMap<u32, String>>,
}

impl OwnerNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, uid: u32) -> String {
        self.users.borrow_mut().entry(uid).or_insert_with(|| lookup_user(uid)).clone()
    }

    pub fn group(&self, gid: u32) -> String {
        self.groups.borrow_mut().entry(gid).or_insert_with(|| lookup_group(gid)).clone()
    }
}

#[cfg(unix)]
fn lookup_user(uid: u32) -> String {
    uzers::get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| uid.to_string())
}

#[cfg(unix)]
fn lookup_group(gid: u32) -> String {
    uzers::get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| gid.to_string())
}

#[cfg(not(unix))]
fn lookup_user(uid: u32) -> String {
    uid.to_string()
}

#[cfg(not(unix))]
fn lookup_group(gid: u32) -> String {
    gid.to_string()
}
