use std::fs;
use std::io;
use std::path::Path;

/// Abstracts whole-file reads and overwrites of a target file
pub trait TextStore {
    /// Read every byte of an existing file
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;
    /// Replace the contents of an existing file.
    ///
    /// The file is truncated before writing; a write that fails partway
    /// (disk full) leaves it truncated and the error is returned as is.
    fn overwrite(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Plain filesystem store
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl TextStore for FsStore {
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn overwrite(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        // create(false): a file that vanished after the read is not recreated
        let mut file = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path)?;
        io::Write::write_all(&mut file, bytes)?;
        file.sync_all()
    }
}
