//! Conversion of CSV tables into the Parquet files consumed by the
//! benchmarked search executables.
//!
//! Two user-named columns are kept: the title column becomes `ID` and the
//! content column becomes `Content`. Every other column is dropped. The file
//! is written uncompressed and tagged with `creator = CSVParquetConvert`
//! key-value metadata.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use csv::{ReaderBuilder, StringRecord};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use parquet::format::KeyValue;

use crate::error::{Result, WordhoodError};

/// Name of the output column holding the title values.
pub const ID_COLUMN: &str = "ID";
/// Name of the output column holding the content values.
pub const CONTENT_COLUMN: &str = "Content";
/// Metadata key identifying the producer of the file.
pub const CREATOR_KEY: &str = "creator";
/// Metadata value identifying the producer of the file.
pub const CREATOR: &str = "CSVParquetConvert";

/// The two selected columns of a CSV table. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub ids: Vec<Option<String>>,
    pub contents: Vec<Option<String>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Converts CSV files to Parquet, keeping a title and a content column.
#[derive(Debug, Clone)]
pub struct TableConverter {
    title_column: String,
    content_column: String,
    delimiter: u8,
}

impl TableConverter {
    pub fn new<T: Into<String>, C: Into<String>>(title_column: T, content_column: C) -> Self {
        TableConverter {
            title_column: title_column.into(),
            content_column: content_column.into(),
            delimiter: b',',
        }
    }

    /// Set the field delimiter of the input.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn title_column(&self) -> &str {
        &self.title_column
    }

    pub fn content_column(&self) -> &str {
        &self.content_column
    }

    /// Convert `input` into `output` and return the number of rows written.
    ///
    /// The whole input is read before `output` is created, so a missing
    /// column or a malformed row never leaves a partial file behind.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<usize> {
        let table = self.read_table(File::open(input)?)?;
        log::debug!(
            "read {} rows from {} ({:?} -> {ID_COLUMN}, {:?} -> {CONTENT_COLUMN})",
            table.len(),
            input.display(),
            self.title_column,
            self.content_column
        );

        self.write_parquet(&table, File::create(output)?)?;
        Ok(table.len())
    }

    /// Read the title and content columns from CSV with a header row.
    pub fn read_table<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let title_index = column_index(&headers, &self.title_column)?;
        let content_index = column_index(&headers, &self.content_column)?;

        let mut table = Table::default();
        for record in reader.records() {
            let record = record?;
            table.ids.push(cell(&record, title_index));
            table.contents.push(cell(&record, content_index));
        }

        Ok(table)
    }

    /// Write `table` as a single uncompressed row group.
    pub fn write_parquet<W: Write + Send>(&self, table: &Table, sink: W) -> Result<()> {
        let schema = output_schema();
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(table.ids.clone())),
            Arc::new(StringArray::from(table.contents.clone())),
        ];
        let batch = RecordBatch::try_new(schema.clone(), columns)?;

        let properties = WriterProperties::builder()
            .set_compression(Compression::UNCOMPRESSED)
            .set_key_value_metadata(Some(vec![KeyValue::new(
                CREATOR_KEY.to_string(),
                CREATOR.to_string(),
            )]))
            .build();

        let mut writer = ArrowWriter::try_new(sink, schema, Some(properties))?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(())
    }
}

/// The `ID`/`Content` schema, carrying the creator tag as schema metadata.
pub fn output_schema() -> SchemaRef {
    let metadata = HashMap::from([(CREATOR_KEY.to_string(), CREATOR.to_string())]);
    Arc::new(
        Schema::new(vec![
            Field::new(ID_COLUMN, DataType::Utf8, true),
            Field::new(CONTENT_COLUMN, DataType::Utf8, true),
        ])
        .with_metadata(metadata),
    )
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        let available: Vec<&str> = headers.iter().collect();
        WordhoodError::conversion(format!(
            "column '{name}' not found in CSV header (available: {})",
            available.join(", ")
        ))
    })
}

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
