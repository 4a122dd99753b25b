use crate::artifacts::index::CHECKSUM_SIZE;
use anyhow::anyhow;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};

/// Stream wrapper hashing every byte that passes through it
///
/// Readers call [`Checksum::verify`] once all entries are parsed to compare
/// the trailing 20 bytes with the running digest; writers finish with
/// [`Checksum::write_checksum`].
#[derive(Debug)]
pub struct Checksum<F> {
    file: F,
    digest: Sha1,
}

impl<F> Checksum<F> {
    pub(crate) fn new(file: F) -> Self {
        Checksum {
            file,
            digest: Sha1::new(),
        }
    }

    pub(crate) fn into_inner(self) -> F {
        self.file
    }
}

impl<F: Read> Checksum<F> {
    pub(crate) fn verify(&mut self) -> anyhow::Result<()> {
        let mut expected_checksum = [0u8; CHECKSUM_SIZE];
        self.file
            .read_exact(&mut expected_checksum)
            .map_err(|_| anyhow!("Missing checksum at the end of area file"))?;

        let actual_checksum = self.digest.clone().finalize();

        if expected_checksum != actual_checksum.as_slice() {
            return Err(anyhow!("Checksum does not match value stored on disk"));
        }

        Ok(())
    }
}

impl<F: Write> Checksum<F> {
    pub(crate) fn write_checksum(&mut self) -> anyhow::Result<()> {
        let checksum = self.digest.clone().finalize();
        self.file
            .write_all(checksum.as_slice())
            .map_err(|_| anyhow!("Failed to write checksum to area file"))?;

        Ok(())
    }
}

impl<F: Read> Read for Checksum<F> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let read = self.file.read(buf)?;
        self.digest.update(&buf[..read]);
        Ok(read)
    }
}

impl<F: Write> Write for Checksum<F> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.file.write(buf)?;
        self.digest.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}
