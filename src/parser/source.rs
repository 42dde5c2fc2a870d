//! Input source abstraction for reading XML entries from a directory or a ZIP archive.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Read;

/// Trait for abstracting batch input I/O (directory vs. ZIP source).
///
/// An input source can enumerate its `*.xml` entries and read one entry as
/// text. Extraction and rendering never see which implementation backs them.
pub trait InputSource {
    /// List all `.xml` entries of the source, sorted by path so that batch
    /// runs over the same input are reproducible.
    fn list_xml_entries(&mut self) -> Result<Vec<Utf8PathBuf>>;
    /// Read the entry at the given logical path and return its content.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String>;
}

/// Reads `.xml` files directly from one local directory (non-recursive).
pub struct DirSource {
    dir: Utf8PathBuf,
}

impl DirSource {
    pub fn new(dir: impl AsRef<Utf8Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl InputSource for DirSource {
    fn list_xml_entries(&mut self) -> Result<Vec<Utf8PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(self.dir.as_std_path())
            .with_context(|| format!("Read dir {}", self.dir))?
        {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let p = Utf8PathBuf::from_path_buf(entry.path())
                .map_err(|_| anyhow::anyhow!("Non-UTF8 path in {}", self.dir))?;
            if p.extension().is_some_and(|e| e.eq_ignore_ascii_case("xml")) {
                files.push(p);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("Failed to read {}", path))
    }
}

/// Reads `.xml` entries from a ZIP archive, optionally restricted to a
/// folder prefix inside the archive.
pub struct ZipSource<R: Read + std::io::Seek> {
    zip: zip::ZipArchive<R>,
    folder: Option<String>,
}

impl<R: Read + std::io::Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let zip = zip::ZipArchive::new(reader).context("Failed to open zip archive")?;
        Ok(Self { zip, folder: None })
    }

    /// Restrict entry listing to paths under `folder` inside the archive.
    pub fn with_folder(reader: R, folder: impl Into<String>) -> Result<Self> {
        let mut source = Self::new(reader)?;
        source.folder = Some(normalize_zip_path(&folder.into()));
        Ok(source)
    }
}

/// Strip leading `./` and `/` so callers can pass either form of zip path.
fn normalize_zip_path(path: &str) -> String {
    path.trim_start_matches("./").trim_start_matches('/').to_string()
}

impl<R: Read + std::io::Seek> InputSource for ZipSource<R> {
    fn list_xml_entries(&mut self) -> Result<Vec<Utf8PathBuf>> {
        let mut prefix = self.folder.clone().unwrap_or_default();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        let mut files = Vec::new();
        for i in 0..self.zip.len() {
            let name = self.zip.by_index(i)?.name().to_string();
            if name.starts_with(&prefix)
                && !name.ends_with('/')
                && name.to_ascii_lowercase().ends_with(".xml")
            {
                files.push(Utf8PathBuf::from(name));
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        let p = normalize_zip_path(path.as_str());
        let mut f = self
            .zip
            .by_name(&p)
            .with_context(|| format!("Entry {} not found in zip", p))?;
        let mut s = String::new();
        f.read_to_string(&mut s)
            .with_context(|| format!("Failed to read {} from zip", p))?;
        Ok(s)
    }
}
