use chrono::{Local, TimeZone};
use lsgrid_core::infrastructure::io::output::formatters::{output_long, output_short};
use lsgrid_domain::{
    layout::ColumnLayout, long_format::LongListing, model::FileEntry, options::DEFAULT_COLUMN_COUNT,
};
use lsgrid_shared_kernel::{FileKind, FileMode, MetadataRecord};
use proptest::prelude::*;

fn render_short(names: Vec<String>) -> String {
    let layout = ColumnLayout::arrange(names, DEFAULT_COLUMN_COUNT);
    let mut buf = Vec::new();
    output_short(&layout, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

proptest! {
    #[test]
    fn short_output_has_ceil_rows_and_every_name_once(
        names in prop::collection::btree_set("[a-z]{1,10}", 0..60)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let out = render_short(names.clone());

        prop_assert_eq!(out.lines().count(), names.len().div_ceil(DEFAULT_COLUMN_COUNT));
        let mut printed: Vec<String> = out.split_whitespace().map(str::to_string).collect();
        printed.sort();
        prop_assert_eq!(printed, names);
    }

    #[test]
    fn long_output_has_total_plus_one_line_per_entry(
        modes in prop::collection::vec(0u32..0o10000, 0..30),
        blocks in 0u64..64,
    ) {
        let entries: Vec<FileEntry> = modes
            .iter()
            .enumerate()
            .map(|(i, mode)| FileEntry::with_metadata(format!("f{i}"), MetadataRecord {
                kind: FileKind::Regular,
                mode: FileMode::new(*mode),
                link_count: 1,
                owner: "u".into(),
                group: "g".into(),
                size: i as u64 * 100,
                blocks512: blocks,
                modified: Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            }))
            .collect();

        let mut buf = Vec::new();
        output_long(&LongListing::from_entries(&entries), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        prop_assert_eq!(lines.len(), entries.len() + 1);
        let expected_total = format!("total {}", blocks * entries.len() as u64 / 2);
        prop_assert_eq!(lines[0], expected_total.as_str());
        for line in &lines[1..] {
            prop_assert_eq!(line.find(' '), Some(10));
        }
    }
}
