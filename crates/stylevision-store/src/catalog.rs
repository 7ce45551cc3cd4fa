use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use stylevision_core::ProductRecord;

use crate::StoreError;

/// Append-only table of saved products.
pub trait ProductCatalog: Send + Sync {
    /// Append exactly one row.
    fn append(&self, record: &ProductRecord) -> Result<(), StoreError>;

    /// All rows, in append order.
    fn list(&self) -> Result<Vec<ProductRecord>, StoreError>;

    fn contains_id(&self, p_id: &str) -> Result<bool, StoreError> {
        Ok(self.list()?.iter().any(|r| r.p_id == p_id))
    }
}

/// CSV file with the fixed [`ProductRecord::COLUMNS`] header.
///
/// Appends from this process are serialised; other writers need their own lock.
pub struct CsvCatalog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvCatalog {
    /// Open the catalog, creating the file and header if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let catalog = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };
        catalog.ensure_header()?;
        Ok(catalog)
    }

    fn ensure_header(&self) -> Result<(), StoreError> {
        let empty = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                return Err(StoreError::Internal(format!(
                    "stat {}: {e}",
                    self.path.display()
                )))
            }
        };
        if !empty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Internal(format!("mkdir: {e}")))?;
        }
        let header = encode_rows(std::iter::once(ProductRecord::COLUMNS))?;
        self.write_all(&header)?;
        tracing::info!(path = %self.path.display(), "initialised product catalog");
        Ok(())
    }

    fn write_all(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::Internal(format!("open {}: {e}", self.path.display())))?;
        file.write_all(bytes)
            .map_err(|e| StoreError::Internal(format!("write {}: {e}", self.path.display())))
    }
}

impl ProductCatalog for CsvCatalog {
    fn append(&self, record: &ProductRecord) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Internal("catalog lock poisoned".into()))?;
        self.ensure_header()?;
        // Encode first so the row goes out in a single write.
        let row = encode_rows(std::iter::once(record.to_row()))?;
        self.write_all(&row)?;
        tracing::info!(p_id = %record.p_id, path = %self.path.display(), "appended product row");
        Ok(())
    }

    /// Rows are read by position. The header line is skipped whatever its width,
    /// so files started with extra header columns still load.
    fn list(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(r) => r,
            Err(e) => match e.kind() {
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    return Ok(Vec::new())
                }
                _ => return Err(StoreError::Internal(format!("open catalog: {e}"))),
            },
        };
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| StoreError::Internal(format!("read catalog row: {e}")))?;
            let line = row.position().map_or(0, |p| p.line());
            if row.len() != ProductRecord::COLUMNS.len() {
                return Err(StoreError::Internal(format!(
                    "catalog row at line {line} has {} fields, expected {}",
                    row.len(),
                    ProductRecord::COLUMNS.len()
                )));
            }
            let record = row
                .deserialize::<ProductRecord>(None)
                .map_err(|e| StoreError::Internal(format!("decode catalog row at line {line}: {e}")))?;
            records.push(record);
        }
        Ok(records)
    }
}

/// Render records as a standalone CSV document with header.
pub fn render_csv(records: &[ProductRecord]) -> Result<String, StoreError> {
    let rows = std::iter::once(ProductRecord::COLUMNS)
        .map(|cols| cols.to_vec())
        .chain(records.iter().map(|r| r.to_row().to_vec()));
    let bytes = encode_rows(rows)?;
    String::from_utf8(bytes).map_err(|e| StoreError::Internal(format!("csv utf-8: {e}")))
}

fn encode_rows<I, R, F>(rows: I) -> Result<Vec<u8>, StoreError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| StoreError::Internal(format!("encode csv: {e}")))?;
    }
    writer
        .into_inner()
        .map_err(|e| StoreError::Internal(format!("flush csv: {e}")))
}
