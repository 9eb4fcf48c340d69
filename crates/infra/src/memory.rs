// crates/infra/src/memory.rs
//! In-memory volume implementing the filesystem ports.
//!
//! Listing order is insertion order, which makes enumeration order a property
//! of the fixture rather than of the host filesystem.

use std::{
    collections::HashMap,
    ffi::OsString,
    io,
    path::{Component, Path, PathBuf},
};

use load_all_ports::filesystem::{FileSource, FileSystem};
use load_all_shared_kernel::{FilesystemError, LoaderError, Result};

#[derive(Debug, Clone)]
enum Node {
    Dir(Vec<OsString>),
    File(String),
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    nodes: HashMap<PathBuf, Node>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a volume from `(relative path, contents)` pairs placed under `root`.
    ///
    /// Intermediate directories are created on demand; `root` itself always exists,
    /// even when `layout` is empty.
    pub fn from_layout<I, P, C>(root: impl AsRef<Path>, layout: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<Path>,
        C: Into<String>,
    {
        let root = root.as_ref();
        let mut fs = Self::new();
        fs.add_dir(root)?;
        for (relative, contents) in layout {
            fs.add_file(root.join(relative), contents)?;
        }
        Ok(fs)
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        self.ensure_dir(&normalize(path.as_ref()))?;
        Ok(self)
    }

    pub fn add_file(
        &mut self,
        path: impl AsRef<Path>,
        contents: impl Into<String>,
    ) -> Result<&mut Self> {
        let path = normalize(path.as_ref());
        match self.nodes.get_mut(&path) {
            Some(Node::File(existing)) => {
                *existing = contents.into();
                return Ok(self);
            }
            Some(Node::Dir(_)) => {
                return Err(FilesystemError::Stat {
                    path,
                    source: io::Error::other("a directory already exists at this path"),
                }
                .into());
            }
            None => {}
        }
        self.attach_to_parent(&path)?;
        self.nodes.insert(path, Node::File(contents.into()));
        Ok(self)
    }

    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        match self.nodes.get(path) {
            Some(Node::Dir(_)) => return Ok(()),
            Some(Node::File(_)) => {
                return Err(FilesystemError::NotADirectory { path: path.to_path_buf() }.into());
            }
            None => {}
        }
        self.attach_to_parent(path)?;
        self.nodes.insert(path.to_path_buf(), Node::Dir(Vec::new()));
        Ok(())
    }

    fn attach_to_parent(&mut self, path: &Path) -> Result<()> {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return Ok(());
        };
        if !parent.as_os_str().is_empty() {
            self.ensure_dir(parent)?;
            if let Some(Node::Dir(children)) = self.nodes.get_mut(parent) {
                children.push(name.to_os_string());
            }
        }
        Ok(())
    }

    fn node(&self, path: &Path) -> Option<&Node> {
        self.nodes.get(&normalize(path))
    }
}

/// Lexical normalization: drops `.` components and resolves `..` against the path itself.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl FileSystem for MemoryFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<OsString>> {
        match self.node(dir) {
            Some(Node::Dir(children)) => Ok(children.clone()),
            Some(Node::File(_)) => {
                Err(FilesystemError::NotADirectory { path: dir.to_path_buf() }.into())
            }
            None => Err(FilesystemError::NotFound { path: dir.to_path_buf() }.into()),
        }
    }

    fn is_directory(&self, path: &Path) -> Result<bool> {
        match self.node(path) {
            Some(node) => Ok(matches!(node, Node::Dir(_))),
            None => Err(FilesystemError::NotFound { path: path.to_path_buf() }.into()),
        }
    }
}

impl FileSource for MemoryFileSystem {
    fn is_file(&self, path: &Path) -> Result<bool> {
        Ok(matches!(self.node(path), Some(Node::File(_))))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self.node(path) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Dir(_)) => Err(LoaderError::Read {
                path: path.to_path_buf(),
                source: io::Error::other("is a directory"),
            }
            .into()),
            None => Err(LoaderError::Read {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }
            .into()),
        }
    }
}
