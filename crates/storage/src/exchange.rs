//! Bulk contact exchange with delimited text files
//!
//! The repository never touches files itself; load and save go through a
//! [`ContactExchange`]. [`CsvExchange`] is the only format shipped.
//!
//! CSV layout: a header row naming the columns, then one contact per row.
//!
//! ```text
//! id,firstname,lastname,street,city,state,zip
//! 1,Jo,Li,1 Oak,X,Y,1
//! ```
//!
//! Header names match case-insensitively and may come in any order. The `id`
//! column is optional; an empty cell means "no identifier yet".

use rolodex_core::{Contact, ContactField, ContactId, Error, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

use crate::backend::ContactIter;

/// Header name of the identifier column
pub const ID_COLUMN: &str = "id";

/// Reads and writes contacts in some file format
pub trait ContactExchange {
    /// Parse every contact in `source`
    fn read(&self, source: &mut dyn io::Read) -> Result<Vec<Contact>>;

    /// Write `contacts` to `sink` in the order given
    fn write(&self, sink: &mut dyn io::Write, contacts: ContactIter<'_>) -> Result<()>;

    /// Read a whole file
    fn read_path(&self, path: &Path) -> Result<Vec<Contact>> {
        let mut file = BufReader::new(File::open(path)?);
        self.read(&mut file)
    }

    /// Create or truncate `path` and write into it
    fn write_path(&self, path: &Path, contacts: ContactIter<'_>) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        self.write(&mut file, contacts)
    }
}

/// CSV format backed by the `csv` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExchange;

impl CsvExchange {
    /// New CSV exchange
    pub fn new() -> Self {
        Self
    }
}

enum Column {
    Id,
    Field(ContactField),
    Ignored,
}

impl Column {
    fn from_header(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case(ID_COLUMN) {
            Column::Id
        } else {
            ContactField::from_key(name)
                .map(Column::Field)
                .unwrap_or(Column::Ignored)
        }
    }
}

fn csv_error(e: csv::Error) -> Error {
    Error::csv(e.to_string())
}

impl ContactExchange for CsvExchange {
    fn read(&self, source: &mut dyn io::Read) -> Result<Vec<Contact>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let columns: Vec<Column> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(Column::from_header)
            .collect();

        let mut contacts = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let row = row.map_err(csv_error)?;
            let mut builder = Contact::builder();
            for (column, cell) in columns.iter().zip(row.iter()) {
                let cell = cell.trim();
                match column {
                    Column::Id if !cell.is_empty() => {
                        let id: ContactId = cell.parse().map_err(|_| {
                            Error::csv(format!("row {}: invalid id '{}'", idx + 1, cell))
                        })?;
                        builder = builder.id(id);
                    }
                    Column::Field(field) => builder = builder.field(*field, cell),
                    _ => {}
                }
            }

            let contact = builder.build();
            if contact.is_blank() {
                debug!(row = idx + 1, "skipping blank csv row");
                continue;
            }
            contacts.push(contact);
        }

        Ok(contacts)
    }

    fn write(&self, sink: &mut dyn io::Write, contacts: ContactIter<'_>) -> Result<()> {
        let mut writer = csv::Writer::from_writer(sink);

        let mut header = vec![ID_COLUMN];
        header.extend(ContactField::ALL.iter().map(|f| f.key()));
        writer.write_record(&header).map_err(csv_error)?;

        for contact in contacts {
            let id = contact.id().map(|id| id.to_string()).unwrap_or_default();
            let mut record = vec![id.as_str()];
            record.extend(ContactField::ALL.iter().map(|f| contact.field(*f)));
            writer.write_record(&record).map_err(csv_error)?;
        }

        writer.flush()?;
        Ok(())
    }
}
