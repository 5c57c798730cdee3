use log::debug;
use lsgrid_domain::{
    layout::ColumnLayout,
    long_format::LongListing,
    model::FileEntry,
    options::OutputFormat,
    ordering::order_names,
};
use lsgrid_ports::filesystem::{DirectoryReader, MetadataProvider};
use lsgrid_shared_kernel::{EntryName, Result};

use crate::dto::{EntryFailure, ListingReport, ListingRequest, ReportBody};

pub struct ListDirectory<'a> {
    reader: &'a dyn DirectoryReader,
    metadata: &'a dyn MetadataProvider,
}

impl<'a> ListDirectory<'a> {
    pub fn new(reader: &'a dyn DirectoryReader, metadata: &'a dyn MetadataProvider) -> Self {
        Self { reader, metadata }
    }

    /// Reads, orders and shapes one directory listing.
    ///
    /// A directory that cannot be read fails the whole run. Entries whose
    /// metadata cannot be read in long format are reported in
    /// [`ListingReport::failures`] and left out of the body. Failures are
    /// only logged at `debug`; reporting them to the user is the caller's job.
    pub fn run(&self, request: &ListingRequest) -> Result<ListingReport> {
        let names = self.collect(request)?;

        let report = match request.options.format() {
            OutputFormat::Short => {
                let names = names.into_iter().map(EntryName::into_display).collect();
                ListingReport {
                    body: ReportBody::Short(ColumnLayout::arrange(names, request.columns)),
                    failures: Vec::new(),
                }
            }
            OutputFormat::Long => {
                let (entries, failures) = self.resolve(request, names);
                ListingReport {
                    body: ReportBody::Long(LongListing::from_entries(&entries)),
                    failures,
                }
            }
        };
        Ok(report)
    }

    fn collect(&self, request: &ListingRequest) -> Result<Vec<EntryName>> {
        let raw = self.reader.read_names(&request.path)?;
        let ordered = order_names(raw, &request.options);
        debug!("{} entries listed from '{}'", ordered.len(), request.path.display());
        Ok(ordered)
    }

    fn resolve(
        &self,
        request: &ListingRequest,
        names: Vec<EntryName>,
    ) -> (Vec<FileEntry>, Vec<EntryFailure>) {
        let mut entries = Vec::with_capacity(names.len());
        let mut failures = Vec::new();
        for name in names {
            match self.metadata.metadata(&request.path, name.raw()) {
                Ok(record) => entries.push(FileEntry::with_metadata(name, record)),
                Err(error) => {
                    debug!("skipping entry: {error}");
                    failures.push(EntryFailure { name: name.into_display(), error });
                }
            }
        }
        (entries, failures)
    }
}
