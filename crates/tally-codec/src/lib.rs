//! Import/export codec for ledger snapshots.
//!
//! Export is a lossless JSON array of `{id, date, type, category, amount}`
//! in store order, built for round-tripping through
//! [`tally_core::TransactionService::replace_all`]. Import accepts the
//! line-oriented `date,type,category,amount` paste format and mints a fresh
//! id per line; ids are never read from import text.

use tracing::warn;

use tally_core::{CoreError, CoreResult};
use tally_domain::{Transaction, TransactionKind};

const DATE_FORMAT: &str = "%Y-%m-%d";
const LINE_FIELD_COUNT: usize = 4;

/// Serializes a snapshot to the export blob. The caller decides where the
/// text goes; this crate is agnostic to the sink.
pub fn export_transactions(transactions: &[Transaction]) -> CoreResult<String> {
    serde_json::to_string_pretty(transactions).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Parses a previously exported blob back into records, ids preserved.
pub fn parse_export(text: &str) -> CoreResult<Vec<Transaction>> {
    serde_json::from_str(text).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Parses pasted delimited text, one `date,type,category,amount` record per
/// line. Blank lines produce no record, so a trailing newline is harmless.
/// The first malformed line aborts the whole import; nothing partial is
/// returned.
pub fn import_lines(text: &str) -> CoreResult<Vec<Transaction>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            skipped += 1;
            continue;
        }
        records.push(parse_line(index + 1, line)?);
    }
    if skipped > 0 {
        warn!(skipped, "ignored blank lines during import");
    }
    Ok(records)
}

fn parse_line(line: usize, text: &str) -> CoreResult<Transaction> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != LINE_FIELD_COUNT {
        return Err(CoreError::Parse {
            line,
            message: format!(
                "expected {LINE_FIELD_COUNT} fields `date,type,category,amount`, got {}",
                fields.len()
            ),
        });
    }
    let date = chrono::NaiveDate::parse_from_str(fields[0].trim(), DATE_FORMAT).map_err(|_| {
        CoreError::Parse {
            line,
            message: format!("date `{}` is not a valid YYYY-MM-DD date", fields[0].trim()),
        }
    })?;
    let kind: TransactionKind = fields[1].trim().parse().map_err(|err| CoreError::Parse {
        line,
        message: format!("{err}"),
    })?;
    let category = fields[2].trim();
    let amount: f64 = fields[3].trim().parse().map_err(|_| CoreError::Parse {
        line,
        message: format!("amount `{}` is not numeric", fields[3].trim()),
    })?;
    if !amount.is_finite() {
        return Err(CoreError::Parse {
            line,
            message: format!("amount `{}` is not a finite number", fields[3].trim()),
        });
    }
    Ok(Transaction::new(date, kind, category, amount))
}
