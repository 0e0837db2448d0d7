//! Parser for two-column numeric text tables with comma decimal separators.
//!
//! Vendor ASCII exports in this domain are written by locale-configured
//! instrument software: the decimal separator is a comma while columns are
//! separated by tabs or runs of whitespace. Decimal commas are therefore
//! normalized to periods *before* the line is split into fields; doing it
//! the other way around would glue the columns together.

/// Errors raised for malformed numeric tables.
///
/// The offending line rides along verbatim for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A retained row did not split into exactly two fields
    #[error("expected 2 columns but found {found}: {line:?}")]
    ColumnCount {
        /// Number of whitespace-separated fields found
        found: usize,
        /// The offending line as read from the file
        line: String,
    },

    /// A field did not convert to a number after comma normalization
    #[error("non-numeric field {token:?} in line {line:?}")]
    NonNumeric {
        /// The offending field after comma normalization
        token: String,
        /// The offending line as read from the file
        line: String,
    },
}

/// Parse a two-column numeric table into aligned value sequences.
///
/// The first `skip_rows` lines are discarded as header; blank lines anywhere
/// after that are skipped. Each remaining row must hold exactly two numeric
/// fields, comma or period decimal separator, separated by tabs or
/// whitespace. Returns the first column (axis values) and the second column
/// (data values), always of equal length.
pub fn parse_table(text: &str, skip_rows: usize) -> Result<(Vec<f64>, Vec<f64>), TableError> {
    let mut axis_values = Vec::new();
    let mut data_values = Vec::new();

    for line in text.lines().skip(skip_rows) {
        if line.trim().is_empty() {
            continue;
        }
        let normalized = line.replace(',', ".");
        let fields: Vec<&str> = normalized.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(TableError::ColumnCount {
                found: fields.len(),
                line: line.to_string(),
            });
        }
        axis_values.push(parse_field(fields[0], line)?);
        data_values.push(parse_field(fields[1], line)?);
    }

    Ok((axis_values, data_values))
}

fn parse_field(field: &str, line: &str) -> Result<f64, TableError> {
    field.parse().map_err(|_| TableError::NonNumeric {
        token: field.to_string(),
        line: line.to_string(),
    })
}
