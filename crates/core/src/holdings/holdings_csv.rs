//! CSV export and import for holdings.
//!
//! Export writes one row per holding with its derived totals. Import reads the
//! first six columns of the same layout back into `NewHolding` drafts and
//! reports every rejected row instead of failing the whole upload.

use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::holdings_model::{normalize_symbol, Holding, NewHolding};
use crate::assets::AssetType;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::utils::format_utils::format_fixed;

/// Column headers of an exported holdings file.
pub const HOLDINGS_CSV_HEADERS: [&str; 8] = [
    "Name",
    "Symbol",
    "Type",
    "Quantity",
    "Purchase Price",
    "Current Price",
    "Total Value",
    "Gain/Loss",
];

/// A data row that was skipped during import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CsvRowIssue {
    /// 1-based line number in the uploaded file (the header is line 1)
    pub line: u64,
    pub message: String,
}

/// Drafts parsed from an upload, before anything is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedHoldingsCsv {
    pub holdings: Vec<NewHolding>,
    pub issues: Vec<CsvRowIssue>,
}

/// Outcome of a CSV import once accepted rows are stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportResult {
    pub imported: Vec<Holding>,
    pub issues: Vec<CsvRowIssue>,
}

/// Serializes holdings to CSV text: a header row, then one row per holding.
///
/// Quantities and prices are written in their shortest exact form; the two
/// derived columns always carry two decimals. Fields are quoted only when they
/// contain a delimiter, quote or line break. No trailing newline.
pub fn holdings_to_csv(holdings: &[Holding]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HOLDINGS_CSV_HEADERS)?;
    for holding in holdings {
        let total_value = holding.market_value();
        let gain_loss = total_value.saturating_sub(holding.cost_basis());
        writer.write_record([
            holding.name.clone(),
            holding.symbol.clone(),
            holding.asset_type.as_str().to_string(),
            holding.quantity.normalize().to_string(),
            holding.purchase_price.normalize().to_string(),
            holding.current_price.normalize().to_string(),
            format_fixed(total_value, DISPLAY_DECIMAL_PRECISION),
            format_fixed(gain_loss, DISPLAY_DECIMAL_PRECISION),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(format!("Failed to flush CSV writer: {}", e)))?;
    let mut text = String::from_utf8(bytes)
        .map_err(|e| Error::Unexpected(format!("CSV output is not valid UTF-8: {}", e)))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Parses an uploaded holdings file into drafts owned by `user_id`.
///
/// Expects the export layout; columns past the sixth are ignored. The first
/// record is the header. A missing or empty current price falls back to the
/// purchase price, and an empty type means `stock`. Rows that are not valid
/// UTF-8 are reported like any other rejected row.
pub fn parse_holdings_csv(content: &[u8], user_id: &str) -> Result<ParsedHoldingsCsv> {
    let content = strip_bom(content);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let mut parsed = ParsedHoldingsCsv::default();
    for record in reader.byte_records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let record = match StringRecord::from_byte_record(record) {
            Ok(record) => record,
            Err(e) => {
                let message = format!("Invalid UTF-8 encoding: {}", e.utf8_error());
                debug!("Skipping CSV line {}: {}", line, message);
                parsed.issues.push(CsvRowIssue { line, message });
                continue;
            }
        };

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        match parse_row(&record, user_id) {
            Ok(holding) => parsed.holdings.push(holding),
            Err(message) => {
                debug!("Skipping CSV line {}: {}", line, message);
                parsed.issues.push(CsvRowIssue { line, message });
            }
        }
    }

    Ok(parsed)
}

fn strip_bom(content: &[u8]) -> &[u8] {
    content.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(content)
}

fn parse_row(record: &StringRecord, user_id: &str) -> std::result::Result<NewHolding, String> {
    let field = |index: usize| record.get(index).map(str::trim).unwrap_or_default();

    let name = field(0);
    let symbol = normalize_symbol(field(1));
    if name.is_empty() {
        return Err("Missing name".to_string());
    }
    if symbol.is_empty() {
        return Err("Missing symbol".to_string());
    }

    let asset_type = match field(2) {
        "" => AssetType::default(),
        raw => AssetType::from_str(raw).map_err(|e| e.to_string())?,
    };
    let quantity = parse_decimal("quantity", field(3))?;
    let purchase_price = parse_decimal("purchase price", field(4))?;
    let current_price = match field(5) {
        "" => purchase_price,
        raw => parse_decimal("current price", raw)?,
    };

    let holding = NewHolding {
        user_id: user_id.to_string(),
        name: name.to_string(),
        symbol,
        quantity,
        purchase_price,
        current_price,
        asset_type,
    };
    holding.validate().map_err(|e| e.to_string())?;
    Ok(holding)
}

fn parse_decimal(column: &str, raw: &str) -> std::result::Result<Decimal, String> {
    if raw.is_empty() {
        return Err(format!("Missing {}", column));
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| format!("Invalid {} '{}'", column, raw))
}
