//! Reading and writing study files
//!
//! Every read checks that its file exists and fails with
//! [`CoreError::FileNotFound`] otherwise. Every write creates missing parent
//! directories and overwrites the target. Text is always UTF-8.

use crate::artifact::SqlArtifact;
use crate::coding::Coding;
use crate::config::StudyConfig;
use crate::error::{CoreError, CoreResult};
use crate::valueset::{filter_expansion, ValueSet, ValueSetFile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Fail with [`CoreError::FileNotFound`] unless `path` exists.
pub fn ensure_exists(path: &Path) -> CoreResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        })
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> CoreError + '_ {
    move |source| CoreError::IoWithPath {
        path: path.display().to_string(),
        source,
    }
}

fn create_parent_dir(path: &Path) -> CoreResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(io_err(parent))
        }
        _ => Ok(()),
    }
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> CoreResult<String> {
    ensure_exists(path)?;
    fs::read_to_string(path).map_err(io_err(path))
}

/// Read a file as raw bytes.
pub fn read_bytes(path: &Path) -> CoreResult<Vec<u8>> {
    ensure_exists(path)?;
    fs::read(path).map_err(io_err(path))
}

/// Write a UTF-8 text file, returning the path written.
pub fn write_text(path: &Path, contents: &str) -> CoreResult<PathBuf> {
    create_parent_dir(path)?;
    fs::write(path, contents).map_err(io_err(path))?;
    log::debug!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CoreResult<T> {
    let content = read_text(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Serialize to pretty-printed JSON and write it, returning the path written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> CoreResult<PathBuf> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    write_text(path, &content)
}

/// Lazily read rows of a headerless CSV file.
pub struct CsvRows {
    path: PathBuf,
    records: csv::StringRecordsIntoIter<File>,
}

impl Iterator for CsvRows {
    type Item = CoreResult<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|source| CoreError::Csv {
                    path: self.path.display().to_string(),
                    source,
                }),
        )
    }
}

/// Open a headerless CSV file. Each call starts again from the first row.
pub fn read_csv(path: &Path) -> CoreResult<CsvRows> {
    ensure_exists(path)?;
    let file = File::open(path).map_err(io_err(path))?;
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    Ok(CsvRows {
        path: path.to_path_buf(),
        records: reader.into_records(),
    })
}

/// Write every row to a CSV file, returning the path written.
pub fn write_csv<I, R, F>(path: &Path, rows: I) -> CoreResult<PathBuf>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    create_parent_dir(path)?;
    let csv_err = |source: csv::Error| CoreError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    for row in rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer.flush().map_err(io_err(path))?;
    Ok(path.to_path_buf())
}

/// Columns of a code-list CSV: `system, code, display`.
const CODING_COLUMNS: usize = 3;

/// Read a headerless `system,code,display` CSV into codings.
pub fn read_codings_csv(path: &Path) -> CoreResult<Vec<Coding>> {
    read_csv(path)?
        .enumerate()
        .map(|(index, row)| {
            let row = row?;
            match <[String; CODING_COLUMNS]>::try_from(row) {
                Ok([system, code, display]) => Ok(Coding::new(system, code, display)),
                Err(row) => Err(CoreError::CsvRow {
                    path: path.display().to_string(),
                    line: index as u64 + 1,
                    expected: CODING_COLUMNS,
                    found: row.len(),
                }),
            }
        })
        .collect()
}

/// Input and output directories of a study, anchored at its root directory.
///
/// The root is the directory holding `study.yml`; it is canonicalized so the
/// resolved paths do not depend on the working directory of later calls.
#[derive(Debug, Clone)]
pub struct StudyPaths {
    root: PathBuf,
    valueset_dir: PathBuf,
    output_dir: PathBuf,
}

impl StudyPaths {
    pub fn new(root: &Path, config: &StudyConfig) -> CoreResult<Self> {
        let root = root.canonicalize().map_err(|_| CoreError::FileNotFound {
            path: root.display().to_string(),
        })?;
        Ok(Self {
            valueset_dir: root.join(&config.valueset_dir),
            output_dir: root.join(&config.output_dir),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn valueset_dir(&self) -> &Path {
        &self.valueset_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of a file in the value set directory.
    pub fn valueset(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.valueset_dir.join(filename)
    }

    /// Path of a file in the output directory.
    pub fn output(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(filename)
    }

    /// Load a value set file (one document or a list) from the value set directory.
    pub fn load_valueset(&self, filename: impl AsRef<Path>) -> CoreResult<Vec<ValueSet>> {
        let path = self.valueset(filename);
        let file: ValueSetFile =
            read_json(&path).map_err(|e| match e {
                CoreError::Json(source) => CoreError::ValueSetParse {
                    path: path.display().to_string(),
                    message: source.to_string(),
                },
                other => other,
            })?;
        Ok(file.into_vec())
    }

    /// Load a value set file and keep the expansion entries matching any term.
    ///
    /// See [`filter_expansion`] for how documents are merged.
    pub fn filter_expansion_file<S: AsRef<str>>(
        &self,
        filename: impl AsRef<Path>,
        terms: &[S],
    ) -> CoreResult<Vec<ValueSet>> {
        let valuesets = self.load_valueset(filename)?;
        Ok(filter_expansion(&valuesets, terms))
    }

    /// Save value set documents as a JSON list in the value set directory.
    pub fn save_valueset(
        &self,
        filename: impl AsRef<Path>,
        valuesets: &[ValueSet],
    ) -> CoreResult<PathBuf> {
        write_json(&self.valueset(filename), valuesets)
    }

    /// Write an artifact to `<output_dir>/<table_name>.sql`.
    pub fn save_artifact(&self, artifact: &SqlArtifact) -> CoreResult<PathBuf> {
        write_text(&self.output(artifact.file_name()), &artifact.contents)
    }
}

#[cfg(test)]
#[path = "files_test.rs"]
mod tests;
