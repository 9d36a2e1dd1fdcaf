//! Table converter tests: write Parquet and read it back.

use std::fs::{self, File};
use std::path::Path;

use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;
use assert_cmd::Command;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use predicates::prelude::*;
use tempfile::TempDir;
use wordhood::convert::{CONTENT_COLUMN, CREATOR, CREATOR_KEY, ID_COLUMN, TableConverter};

const REVIEWS: &str = "\
id,name,stars,text
1,Cafe Rouge,4,\"Great coffee, slow service\"
2,Noodle Bar,5,Best ramen in town
3,,2,
";

fn write_input(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("reviews.csv");
    fs::write(&input, REVIEWS).unwrap();
    input
}

fn read_batches(path: &Path) -> Vec<RecordBatch> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(path).unwrap()).unwrap();
    builder
        .build()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn string_column(batch: &RecordBatch, index: usize) -> &StringArray {
    batch
        .column(index)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap()
}

#[test]
fn test_columns_renamed_and_selected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("reviews.parquet");

    let rows = TableConverter::new("name", "text")
        .convert_file(&input, &output)
        .unwrap();
    assert_eq!(rows, 3);

    let batches = read_batches(&output);
    let batch = &batches[0];
    let names: Vec<&str> = batch
        .schema_ref()
        .fields()
        .iter()
        .map(|f| f.name().as_str())
        .collect();
    assert_eq!(names, vec![ID_COLUMN, CONTENT_COLUMN]);
    assert_eq!(batches.iter().map(RecordBatch::num_rows).sum::<usize>(), 3);

    let ids = string_column(batch, 0);
    let contents = string_column(batch, 1);
    assert_eq!(ids.value(0), "Cafe Rouge");
    assert_eq!(ids.value(1), "Noodle Bar");
    assert!(ids.is_null(2));
    assert_eq!(contents.value(0), "Great coffee, slow service");
    assert_eq!(contents.value(1), "Best ramen in town");
    assert!(contents.is_null(2));
}

#[test]
fn test_creator_metadata_and_no_compression() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("reviews.parquet");

    TableConverter::new("name", "text")
        .convert_file(&input, &output)
        .unwrap();

    let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(&output).unwrap()).unwrap();
    let metadata = builder.metadata();

    let key_values = metadata.file_metadata().key_value_metadata().unwrap();
    assert!(
        key_values
            .iter()
            .any(|kv| kv.key == CREATOR_KEY && kv.value.as_deref() == Some(CREATOR))
    );
    assert_eq!(
        builder.schema().metadata().get(CREATOR_KEY).map(String::as_str),
        Some(CREATOR)
    );

    for row_group in metadata.row_groups() {
        for column in row_group.columns() {
            assert_eq!(column.compression(), Compression::UNCOMPRESSED);
        }
    }
}

#[test]
fn test_header_only_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.csv");
    let output = dir.path().join("empty.parquet");
    fs::write(&input, "title,body\n").unwrap();

    let rows = TableConverter::new("title", "body")
        .convert_file(&input, &output)
        .unwrap();
    assert_eq!(rows, 0);

    let rows: usize = read_batches(&output).iter().map(RecordBatch::num_rows).sum();
    assert_eq!(rows, 0);
}

#[allow(deprecated)] // cargo_bin() warns about custom build-dir
fn convert_cmd() -> Command {
    Command::cargo_bin("wordhood-convert").expect("wordhood-convert binary should be built by cargo")
}

#[test]
fn test_cli_conversion_successful() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("reviews.parquet");

    convert_cmd()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .args(["-t", "name", "-c", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion successful!"));

    assert!(output.exists());
}

#[test]
fn test_cli_missing_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("reviews.parquet");

    convert_cmd()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .args(["-t", "title", "-c", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "An error occurred: Conversion error: column 'title' not found",
        ))
        .stderr(predicate::str::contains("panicked").not());

    assert!(!output.exists());
}

#[test]
fn test_cli_missing_input_is_reported() {
    let dir = TempDir::new().unwrap();

    convert_cmd()
        .args(["-i", dir.path().join("absent.csv").to_str().unwrap()])
        .args(["-o", dir.path().join("out.parquet").to_str().unwrap()])
        .args(["-t", "name", "-c", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("An error occurred: I/O error"));
}
