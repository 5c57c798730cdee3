// crates/domain/src/permissions.rs
//! Decoding of file type and mode bits into the ten-character `ls -l`
//! permission string.

use std::fmt;

use lsgrid_shared_kernel::{FileKind, FileMode, MetadataRecord};

/// Glyphs for one rwx triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Triple {
    read: char,
    write: char,
    execute: char,
}

const fn triple(read: char, write: char, execute: char) -> Triple {
    Triple { read, write, execute }
}

/// Indexed by the 3-bit permission value.
const TRIPLES: [Triple; 8] = [
    triple('-', '-', '-'),
    triple('-', '-', 'x'),
    triple('-', 'w', '-'),
    triple('-', 'w', 'x'),
    triple('r', '-', '-'),
    triple('r', '-', 'x'),
    triple('r', 'w', '-'),
    triple('r', 'w', 'x'),
];

/// Which triple a special bit overlays and the glyph it puts there.
#[derive(Debug, Clone, Copy)]
struct SpecialOverlay {
    bit: u16,
    slot: usize,
    with_execute: char,
    without_execute: char,
}

const OVERLAYS: [SpecialOverlay; 3] = [
    SpecialOverlay { bit: FileMode::SETUID, slot: 0, with_execute: 's', without_execute: 'S' },
    SpecialOverlay { bit: FileMode::SETGID, slot: 1, with_execute: 's', without_execute: 'S' },
    SpecialOverlay { bit: FileMode::STICKY, slot: 2, with_execute: 't', without_execute: 'T' },
];

/// Owner, group, other.
const SHIFTS: [u32; 3] = [6, 3, 0];

/// Ten-character permission string such as `drwxr-xr-x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionString([char; 10]);

impl PermissionString {
    pub fn decode(kind: FileKind, mode: FileMode) -> Self {
        let mut triples = SHIFTS.map(|shift| TRIPLES[usize::from(mode.triple(shift))]);

        for overlay in &OVERLAYS {
            if mode.contains(overlay.bit) {
                let target = &mut triples[overlay.slot];
                target.execute = if target.execute == 'x' {
                    overlay.with_execute
                } else {
                    overlay.without_execute
                };
            }
        }

        let mut glyphs = ['-'; 10];
        glyphs[0] = kind.glyph();
        for (i, t) in triples.iter().enumerate() {
            glyphs[1 + i * 3] = t.read;
            glyphs[2 + i * 3] = t.write;
            glyphs[3 + i * 3] = t.execute;
        }
        Self(glyphs)
    }

    pub fn from_record(record: &MetadataRecord) -> Self {
        Self::decode(record.kind, record.mode)
    }

    pub fn as_chars(&self) -> &[char; 10] {
        &self.0
    }
}

impl fmt::Display for PermissionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}
