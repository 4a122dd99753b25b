//! Shared output utilities

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter feeding the `minus` pager
///
/// Long reports (`log`, `global-log`) are written through it when stdout is a
/// terminal; the pager is shown with `minus::page_all` once the command
/// returns.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
