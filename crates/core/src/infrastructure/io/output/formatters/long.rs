use std::io::Write;

use lsgrid_domain::long_format::LongListing;

/// Writes `total <blocks>` and one aligned line per entry:
/// permissions, links, owner, group, size, timestamp, name.
pub fn output_long(listing: &LongListing, out: &mut impl Write) -> anyhow::Result<()> {
    let w = listing.widths;
    writeln!(out, "total {}", listing.total_blocks)?;
    for row in &listing.rows {
        writeln!(
            out,
            "{} {:>links$} {:<owner$} {:<group$} {:>size$} {} {}",
            row.permissions,
            row.links,
            row.owner,
            row.group,
            row.size,
            row.timestamp,
            row.name,
            links = w.links,
            owner = w.owner,
            group = w.group,
            size = w.size,
        )?;
    }
    Ok(())
}
