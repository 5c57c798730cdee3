// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry_name;
pub mod file_kind;
pub mod file_mode;
pub mod metadata_record;

pub use entry_name::EntryName;
pub use file_kind::FileKind;
pub use file_mode::FileMode;
pub use metadata_record::MetadataRecord;
