// crates/shared-kernel/src/value_objects/file_mode.rs
use std::fmt;

/// The 12 low bits of a Unix `st_mode`: nine permission bits plus setuid,
/// setgid and sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct FileMode(u16);

impl FileMode {
    pub const SETUID: u16 = 0o4000;
    pub const SETGID: u16 = 0o2000;
    pub const STICKY: u16 = 0o1000;
    pub const MASK: u16 = 0o7777;

    /// Builds a mode from raw `st_mode` bits; file type bits are discarded.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self((raw & Self::MASK as u32) as u16)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns true when every bit of `flag` is set.
    #[inline]
    pub const fn contains(self, flag: u16) -> bool {
        self.0 & flag == flag
    }

    /// Returns the 3-bit rwx value for the triple starting at `shift`
    /// (6 = owner, 3 = group, 0 = other).
    #[inline]
    pub const fn triple(self, shift: u32) -> u8 {
        ((self.0 >> shift) & 0o7) as u8
    }

    #[inline]
    pub const fn owner(self) -> u8 {
        self.triple(6)
    }

    #[inline]
    pub const fn group(self) -> u8 {
        self.triple(3)
    }

    #[inline]
    pub const fn other(self) -> u8 {
        self.triple(0)
    }
}

impl From<u32> for FileMode {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl fmt::Octal for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}
