//
//  adacord-cli
//  cli/data.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Data commands: push local files into a bucket, fetch rows back out.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::Row;
use crate::output::{rows_table, OutputFormat, OutputWriter};

use super::GlobalOptions;

/// Push and fetch bucket data
#[derive(Args, Debug)]
pub struct DataCommand {
    #[command(subcommand)]
    pub command: DataSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DataSubcommand {
    /// Push the rows of a local file to a bucket
    Push(PushArgs),

    /// Fetch all rows of a bucket
    Fetch(FetchArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DataFileFormat {
    Csv,
    Json,
    Jsonlines,
}

impl DataFileFormat {
    /// Guess the format from the file extension.
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::Jsonlines),
            _ => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct PushArgs {
    /// Bucket uuid or name
    #[arg(long)]
    pub bucket: String,

    /// Path to the data file
    #[arg(long)]
    pub filepath: PathBuf,

    /// File format (guessed from the extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<DataFileFormat>,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Bucket uuid or name
    #[arg(long)]
    pub bucket: String,
}

impl DataCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            DataSubcommand::Push(args) => self.push(args, global).await,
            DataSubcommand::Fetch(args) => self.fetch(args, global).await,
        }
    }

    async fn push(&self, args: &PushArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let format = args
            .format
            .or_else(|| DataFileFormat::from_path(&args.filepath))
            .context("could not guess the file format, pass --format")?;

        let rows = parse_rows(&args.filepath, format)?;
        if rows.is_empty() {
            bail!("{} contains no rows", args.filepath.display());
        }

        let api = global.api()?;
        let spinner = upload_spinner(writer.is_json(), rows.len());

        let result = api.buckets().push_data(&args.bucket, &rows).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let result = result?;

        writer.success("The data has been loaded 🚀");
        if writer.is_json() {
            writer.write_json(&result)?;
        }
        Ok(())
    }

    async fn fetch(&self, args: &FetchArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;

        let rows = api.buckets().get_data(&args.bucket).await?;
        if writer.is_json() {
            writer.write_json(&serde_json::Value::Array(
                rows.into_iter().map(serde_json::Value::Object).collect(),
            ))?;
        } else if rows.is_empty() {
            println!("The bucket is empty.");
        } else {
            println!("{}", rows_table(&rows));
        }
        Ok(())
    }
}

fn upload_spinner(json: bool, row_count: usize) -> Option<ProgressBar> {
    if json {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid progress template"),
    );
    spinner.set_message(format!("Pushing {row_count} row(s)..."));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    Some(spinner)
}

/// Parses a local data file into rows.
fn parse_rows(path: &Path, format: DataFileFormat) -> Result<Vec<Row>> {
    match format {
        DataFileFormat::Csv => parse_csv(path),
        DataFileFormat::Json => parse_json(path),
        DataFileFormat::Jsonlines => parse_jsonlines(path),
    }
}

/// CSV: first record is the header; every value is pushed as a string.
fn parse_csv(path: &Path) -> Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("could not open {}", path.display()))?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), serde_json::Value::String(value.to_string()));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// JSON: a top-level array of flat objects.
fn parse_json(path: &Path) -> Result<Vec<Row>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let rows: Vec<Row> =
        serde_json::from_str(&raw).context("expected a JSON array of flat objects")?;
    Ok(rows)
}

/// JSON lines: one flat object per line, blank lines skipped.
fn parse_jsonlines(path: &Path) -> Result<Vec<Row>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid JSON on line {}", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_uses_header_row() {
        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        std::io::Write::write_all(&mut file, b"sensor,value\na,1\nb,2\n").unwrap();

        let rows = parse_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["sensor"], serde_json::json!("a"));
        assert_eq!(rows[1]["value"], serde_json::json!("2"));
    }

    #[test]
    fn test_parse_json_array() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        std::io::Write::write_all(&mut file, br#"[{"a":1},{"a":2}]"#).unwrap();

        let rows = parse_json(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["a"], serde_json::json!(2));
    }

    #[test]
    fn test_parse_jsonlines_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::with_suffix(".jsonl").unwrap();
        std::io::Write::write_all(&mut file, b"{\"a\":1}\n\n{\"a\":2}\n").unwrap();

        let rows = parse_jsonlines(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_format_guess_from_extension() {
        assert!(matches!(
            DataFileFormat::from_path(Path::new("rows.csv")),
            Some(DataFileFormat::Csv)
        ));
        assert!(matches!(
            DataFileFormat::from_path(Path::new("rows.ndjson")),
            Some(DataFileFormat::Jsonlines)
        ));
        assert!(DataFileFormat::from_path(Path::new("rows.parquet")).is_none());
    }
}
