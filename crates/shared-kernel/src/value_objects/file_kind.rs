// crates/shared-kernel/src/value_objects/file_kind.rs

/// File type classification as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Regular,
    Directory,
    CharDevice,
    BlockDevice,
    Fifo,
    Symlink,
    Socket,
}

impl FileKind {
    pub const ALL: [FileKind; 7] = [
        Self::Regular,
        Self::Directory,
        Self::CharDevice,
        Self::BlockDevice,
        Self::Fifo,
        Self::Symlink,
        Self::Socket,
    ];

    /// Single-character glyph used as the first column of a permission string.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Regular => '-',
            Self::Directory => 'd',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::Fifo => 'p',
            Self::Symlink => 'l',
            Self::Socket => 's',
        }
    }
}
