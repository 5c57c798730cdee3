pub mod formatters;
mod writer;

use std::io::Write;

use formatters::{output_long, output_short};
use lsgrid_usecase::{EntryFailure, ListingReport, ReportBody};

use crate::error::ErrorContext;

/// Emit a listing to stdout.
pub fn emit(report: &ListingReport) -> anyhow::Result<()> {
    let mut writer = writer::OutputWriter::stdout();
    write_report(report, &mut writer)?;
    writer.flush().context("flushing listing")?;
    Ok(())
}

/// Render a listing into any writer.
pub fn write_report(report: &ListingReport, out: &mut impl Write) -> anyhow::Result<()> {
    match &report.body {
        ReportBody::Short(layout) => output_short(layout, out),
        ReportBody::Long(listing) => output_long(listing, out),
    }
}

/// One `lsgrid: <message>` line per entry that could not be described.
pub fn report_failures(failures: &[EntryFailure], out: &mut impl Write) -> anyhow::Result<()> {
    for failure in failures {
        writeln!(out, "lsgrid: {}", failure.error)?;
    }
    Ok(())
}
