use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct Project {
    pub root: TempDir,
}

impl Project {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn read(&self, path: &str) -> String {
        let path = self.path().join(path);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("cannot read file {path:?}"))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.path().join(path).exists()
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.path().join(path).is_dir()
    }

    /// Every file below `path`, keyed by its path relative to `path`.
    pub fn snapshot(&self, path: &str) -> BTreeMap<PathBuf, Vec<u8>> {
        let base = self.path().join(path);
        let mut files = BTreeMap::new();
        collect_files(&base, &base, &mut files);
        files
    }
}

fn collect_files(base: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap_or_else(|_| panic!("cannot list {dir:?}")) {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.insert(path.strip_prefix(base).unwrap().join(""), Vec::new());
            collect_files(base, &path, files);
        } else {
            let content = fs::read(&path).unwrap();
            files.insert(path.strip_prefix(base).unwrap().to_path_buf(), content);
        }
    }
}
