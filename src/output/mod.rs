//
//  adacord-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the CLI, in two modes:
//!
//! - **Table format**: human-readable tables for interactive terminal use
//! - **JSON format**: machine-readable output for scripting and piping
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the available output formats
//! - [`OutputWriter`]: entry point for writing formatted output
//! - [`TableOutput`]: trait for types that can be rendered as table rows
//!
//! The CLI wrapper is the only place where API results get formatted;
//! the core client returns data and errors untouched.

mod table;

pub use table::*;

use anyhow::Result;
use console::style;
use serde::Serialize;

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// Human-readable table format (default).
    #[default]
    Table,
    /// JSON format for scripting; pretty-printed.
    Json,
}

impl OutputFormat {
    /// Selects the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Types that can be rendered as rows of a terminal table.
pub trait TableOutput {
    /// Column headers, in display order.
    fn headers() -> Vec<&'static str>;

    /// One table row for this value, matching [`headers`](Self::headers).
    fn row(&self) -> Vec<String>;
}

/// Writes values in the selected output format.
#[derive(Debug, Clone, Copy)]
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Whether this writer emits JSON.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Writes a single value: a one-row table, or a JSON object.
    pub fn write<T: TableOutput + Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Table => {
                println!("{}", data_table(&T::headers(), std::iter::once(value.row())));
            }
        }
        Ok(())
    }

    /// Writes a list of values: a table, or a JSON array.
    pub fn write_list<T: TableOutput + Serialize>(&self, values: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
            OutputFormat::Table => {
                println!(
                    "{}",
                    data_table(&T::headers(), values.iter().map(TableOutput::row))
                );
            }
        }
        Ok(())
    }

    /// Writes a raw JSON value in either mode.
    ///
    /// In table mode the value is still printed as pretty JSON — query
    /// results and confirmation payloads are server-defined and have no
    /// fixed columns.
    pub fn write_json(&self, value: &serde_json::Value) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Writes a success message; suppressed in JSON mode so the output
    /// stays machine-readable.
    pub fn success(&self, message: &str) {
        if !self.is_json() {
            println!("{}", style(message).white().bold());
        }
    }
}
