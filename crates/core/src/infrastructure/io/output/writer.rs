use std::io::{BufWriter, Stdout, Write};

/// Buffered handle on stdout; the listing is written in one flush.
pub(crate) struct OutputWriter(BufWriter<Stdout>);

impl OutputWriter {
    pub(crate) fn stdout() -> Self {
        Self(BufWriter::new(std::io::stdout()))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}
