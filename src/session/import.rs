//! CSV import
//!
//! Reads bank-style CSV exports into transactions: detects the column layout
//! from the header row, accepts several date formats and treats negative
//! outflows as positive expenses. When the amount column mixes signs the
//! positive rows are deposits and are skipped. Bad rows are reported, never
//! fatal.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{parse_date_time, Category, Money, Transaction, TransactionInput};

const ALTERNATE_DATE_FORMATS: [&str; 7] = [
    "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y", "%d-%m-%Y",
];

/// Column layout of a CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub description_column: Option<usize>,
    pub category_column: Option<usize>,
    pub amount_column: usize,
    /// Preferred date format, tried before the built-in list
    pub date_format: Option<String>,
    /// Whether the first row is a header
    pub has_header: bool,
    pub delimiter: u8,
}

impl Default for ColumnMapping {
    /// `date,description,category,amount`, with a header row
    fn default() -> Self {
        Self {
            date_column: 0,
            description_column: Some(1),
            category_column: Some(2),
            amount_column: 3,
            date_format: None,
            has_header: true,
            delimiter: b',',
        }
    }
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Common bank export layout: date, description, amount (no category)
    pub fn simple_bank() -> Self {
        Self {
            date_column: 0,
            description_column: Some(1),
            category_column: None,
            amount_column: 2,
            date_format: Some("%m/%d/%Y".to_string()),
            has_header: true,
            delimiter: b',',
        }
    }

    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = Some(format.to_string());
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// A successfully parsed CSV row
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// 1-based data row number (the header is not counted)
    pub row_number: usize,
    pub input: TransactionInput,
    /// Whether the source amount was written as a negative outflow
    pub was_negative: bool,
}

/// Outcome of importing one CSV source
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub transactions: Vec<Transaction>,
    /// Row number and message for every rejected row
    pub errors: Vec<(usize, String)>,
    /// Deposits left out of a signed export
    pub skipped_inflows: usize,
}

impl ImportResult {
    pub fn imported(&self) -> usize {
        self.transactions.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Importer for CSV transaction files
#[derive(Debug, Clone, Default)]
pub struct CsvImporter {
    mapping: Option<ColumnMapping>,
}

impl CsvImporter {
    /// Importer that detects the column layout from the first row
    pub fn new() -> Self {
        Self::default()
    }

    /// Importer with a fixed column layout
    pub fn with_mapping(mapping: ColumnMapping) -> Self {
        Self {
            mapping: Some(mapping),
        }
    }

    pub fn import_file(&self, path: &Path) -> DashboardResult<ImportResult> {
        let file = std::fs::File::open(path).map_err(|e| {
            DashboardError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_reader(file)
    }

    pub fn import_str(&self, data: &str) -> DashboardResult<ImportResult> {
        self.import_reader(data.as_bytes())
    }

    /// Parse every row and build transactions from the valid ones
    pub fn import_reader<R: Read>(&self, reader: R) -> DashboardResult<ImportResult> {
        let delimiter = self.mapping.as_ref().map(|m| m.delimiter).unwrap_or(b',');
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = reader.records();
        let first = match records.next() {
            Some(record) => record?,
            None => return Ok(ImportResult::default()),
        };

        let mapping = match &self.mapping {
            Some(mapping) => mapping.clone(),
            None => detect_mapping(&first),
        };
        debug!(?mapping, "importing CSV");

        let mut rows = Vec::new();
        if !mapping.has_header {
            rows.push(Ok(first));
        }
        rows.extend(records);

        let parsed: Vec<(usize, Result<ParsedRow, String>)> = rows
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let row_number = idx + 1;
                let row = record
                    .map_err(|e| format!("Error reading CSV record: {}", e))
                    .and_then(|record| parse_record(&record, row_number, &mapping));
                (row_number, row)
            })
            .collect();

        let has_outflows = parsed.iter().any(|(_, r)| matches!(r, Ok(row) if row.was_negative));
        let has_inflows = parsed.iter().any(|(_, r)| matches!(r, Ok(row) if !row.was_negative));
        let signed_export = has_outflows && has_inflows;

        let mut result = ImportResult::default();
        for (row_number, parsed) in parsed {
            match parsed {
                Ok(row) if signed_export && !row.was_negative => {
                    debug!(row = row_number, "skipping deposit in signed CSV export");
                    result.skipped_inflows += 1;
                }
                Ok(row) => result.transactions.push(row.input.into_transaction()),
                Err(message) => {
                    warn!(row = row_number, %message, "skipping CSV row");
                    result.errors.push((row_number, message));
                }
            }
        }

        Ok(result)
    }
}

/// Detect the column layout from the first record
///
/// A first row whose first field parses as a date is treated as data in the
/// default `date,description,category,amount` order.
pub fn detect_mapping(headers: &StringRecord) -> ColumnMapping {
    if headers
        .get(0)
        .and_then(|first| parse_import_date(first, None))
        .is_some()
    {
        return ColumnMapping::new().with_header(false);
    }

    let mut date_column = None;
    let mut description_column = None;
    let mut category_column = None;
    let mut amount_column = None;

    for (idx, header) in headers.iter().enumerate() {
        let h = header.trim().to_lowercase();

        if h.contains("category") || h == "type" {
            category_column.get_or_insert(idx);
        } else if h.contains("description")
            || h.contains("payee")
            || h.contains("merchant")
            || h.contains("memo")
            || h.contains("name")
        {
            description_column.get_or_insert(idx);
        } else if h.contains("date") || h.contains("posted") {
            date_column.get_or_insert(idx);
        } else if h.contains("amount") || h.contains("debit") || h.contains("withdrawal") {
            amount_column.get_or_insert(idx);
        }
    }

    let defaults = ColumnMapping::new();
    ColumnMapping {
        date_column: date_column.unwrap_or(defaults.date_column),
        description_column: description_column.or(defaults.description_column),
        category_column,
        amount_column: amount_column.unwrap_or(defaults.amount_column),
        ..defaults
    }
}

fn parse_record(
    record: &StringRecord,
    row_number: usize,
    mapping: &ColumnMapping,
) -> Result<ParsedRow, String> {
    let date_str = record
        .get(mapping.date_column)
        .ok_or_else(|| "Missing date column".to_string())?;
    let date = parse_import_date(date_str, mapping.date_format.as_deref())
        .ok_or_else(|| format!("Could not parse date: '{}'", date_str))?;

    let amount_str = record
        .get(mapping.amount_column)
        .ok_or_else(|| "Missing amount column".to_string())?;
    let signed_amount = parse_amount(amount_str)?;
    let was_negative = signed_amount.is_negative();
    let amount = signed_amount.abs();

    let description = mapping
        .description_column
        .and_then(|col| record.get(col))
        .unwrap_or_default()
        .to_string();

    let category = mapping
        .category_column
        .and_then(|col| record.get(col))
        .filter(|c| !c.is_empty())
        .unwrap_or(Category::Other.label())
        .to_string();

    let input = TransactionInput::new(amount, date, description, category);
    input.validate().map_err(|e| e.to_string())?;

    Ok(ParsedRow {
        row_number,
        input,
        was_negative,
    })
}

/// Parse a date in any supported import format, at midnight when no time is given
fn parse_import_date(s: &str, preferred: Option<&str>) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Some(format) = preferred {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    if let Some(dt) = parse_date_time(s) {
        return Some(dt);
    }

    ALTERNATE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse an amount, accepting currency symbols and accounting negatives `(50.00)`
fn parse_amount(s: &str) -> Result<Money, String> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '(' | ')'))
        .collect();

    let value = cleaned
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .map(|v| format!("-{}", v))
        .unwrap_or(cleaned);

    Money::parse(&value).map_err(|e| format!("Could not parse amount '{}': {}", s, e))
}
