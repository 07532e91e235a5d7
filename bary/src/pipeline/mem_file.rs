use crate::encode::*;
use crate::{Error, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const VECTORS_FILE: &str = "vectors.mem";
pub const EXPECTED_L1_FILE: &str = "expected_l1.mem";
pub const EXPECTED_L2_FILE: &str = "expected_l2.mem";
pub const EXPECTED_L3_FILE: &str = "expected_l3.mem";
pub const EXPECTED_Z_FILE: &str = "expected_z.mem";

pub const OUTPUT_FILES: [&str; 5] = [VECTORS_FILE, EXPECTED_L1_FILE, EXPECTED_L2_FILE, EXPECTED_L3_FILE, EXPECTED_Z_FILE];

/// Writes one `Display`ed item per line, truncating any previous file.
pub fn write_lines<T: Display>(path: &Path, items: impl IntoIterator<Item = T>) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for item in items {
        writeln!(writer, "{}", item).map_err(|e| Error::io(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))
}

/// Parses every line of `path` as `T`. Line numbers in errors are 1-based.
pub fn read_lines<T>(path: &Path) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut items = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        let item = line.trim_end_matches('\r').parse::<T>().map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: e.to_string(),
        })?;
        items.push(item);
    }
    Ok(items)
}

/// Contents of a full set of vector files, line `i` of every column belonging to case `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemFileSet {
    pub vectors: Vec<PackedRecord>,
    pub l1: Vec<FixedPointWord>,
    pub l2: Vec<FixedPointWord>,
    pub l3: Vec<FixedPointWord>,
    pub z: Vec<FixedPointWord>,
}

impl MemFileSet {
    pub fn paths(dir: &Path) -> [PathBuf; 5] {
        OUTPUT_FILES.map(|name| dir.join(name))
    }

    pub fn write(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let [vectors, l1, l2, l3, z] = Self::paths(dir);
        write_lines(&vectors, &self.vectors)?;
        write_lines(&l1, &self.l1)?;
        write_lines(&l2, &self.l2)?;
        write_lines(&l3, &self.l3)?;
        write_lines(&z, &self.z)?;
        Ok(vec![vectors, l1, l2, l3, z])
    }

    pub fn read(dir: &Path) -> Result<Self> {
        let [vectors, l1, l2, l3, z] = Self::paths(dir);
        Ok(Self {
            vectors: read_lines(&vectors)?,
            l1: read_lines(&l1)?,
            l2: read_lines(&l2)?,
            l3: read_lines(&l3)?,
            z: read_lines(&z)?,
        })
    }

    /// Number of cases if every file has the same line count.
    pub fn consistent_len(&self) -> Option<usize> {
        let n = self.vectors.len();
        [self.l1.len(), self.l2.len(), self.l3.len(), self.z.len()].iter().all(|&len| len == n).then_some(n)
    }
}
