//! Numeric Column Extraction
//!
//! Walks one column of a [`CsvTable`] and converts each cell to `f64`.
//!
//! Two policies exist and are deliberately different:
//! - **Strict** (column chosen by name): every present cell must be numeric and
//!   at least one value must come out.
//! - **Lenient** (column chosen by index): non-numeric cells and rows too short
//!   to have the column are skipped, and an empty result is fine.

use crate::csv_table::CsvTable;
use crate::error::{Result, SortBenchError};

/// How to treat cells that are not plain decimal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPolicy {
    Strict,
    Lenient,
}

/// Extract the values at `position` from every data row.
///
/// Rows with fewer than `position + 1` fields contribute nothing under either
/// policy. `label` names the column in the `EmptyNumericColumn` error.
pub fn extract(
    table: &CsvTable,
    position: usize,
    policy: ExtractionPolicy,
    label: &str,
) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(table.row_count());

    for row in table.rows() {
        let Some(cell) = row.get(position) else {
            continue;
        };
        let text = cell.trim();
        match parse_decimal(text) {
            Some(value) => values.push(value),
            None => match policy {
                ExtractionPolicy::Strict => {
                    return Err(SortBenchError::NonNumericValue(text.to_string()))
                }
                ExtractionPolicy::Lenient => {}
            },
        }
    }

    if values.is_empty() && policy == ExtractionPolicy::Strict {
        return Err(SortBenchError::EmptyNumericColumn(label.to_string()));
    }

    Ok(values)
}

/// Parse a plain ASCII decimal literal: optional leading `-`, digits, and an
/// optional fractional part. At least one digit is required.
///
/// Signs other than a leading `-`, exponents, `NaN`, `inf`, grouping
/// separators and values that overflow to infinity are all rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_accepts_plain_literals() {
        assert_eq!(parse_decimal("42"), Some(42.0));
        assert_eq!(parse_decimal("-3.25"), Some(-3.25));
        assert_eq!(parse_decimal("0.1"), Some(0.1));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("7."), Some(7.0));
        assert_eq!(parse_decimal("-0"), Some(-0.0));
        assert_eq!(parse_decimal("123456789.123456789"), Some(123456789.123456789));
    }

    #[test]
    fn test_parse_decimal_rejects_everything_else() {
        for text in [
            "", "-", ".", "-.", "abc", "+1", "1e5", "NaN", "inf", "-inf", "1,000", "1.2.3",
            "--1", " 1", "1 ", "0x10", "1_000",
        ] {
            assert_eq!(parse_decimal(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_decimal_rejects_overflow() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(parse_decimal(&huge), None);
    }

    #[test]
    fn test_strict_extracts_column() {
        let table = CsvTable::parse("a,b\n1,2\n3,4").unwrap();
        let values = extract(&table, 1, ExtractionPolicy::Strict, "b").unwrap();
        assert_eq!(values, vec![2.0, 4.0]);
    }

    #[test]
    fn test_strict_trims_cells() {
        let table = CsvTable::parse("a\n  1.5  \n\t-2 ").unwrap();
        let values = extract(&table, 0, ExtractionPolicy::Strict, "a").unwrap();
        assert_eq!(values, vec![1.5, -2.0]);
    }

    #[test]
    fn test_strict_rejects_non_numeric() {
        let table = CsvTable::parse("a,b\n1,2\n3, abc ").unwrap();
        let err = extract(&table, 1, ExtractionPolicy::Strict, "b").unwrap_err();
        assert_eq!(err, SortBenchError::NonNumericValue("abc".into()));
    }

    #[test]
    fn test_strict_rejects_empty_cell() {
        let table = CsvTable::parse("a,b\n,2").unwrap();
        let err = extract(&table, 0, ExtractionPolicy::Strict, "a").unwrap_err();
        assert_eq!(err, SortBenchError::NonNumericValue(String::new()));
    }

    #[test]
    fn test_strict_skips_short_rows() {
        let table = CsvTable::parse("a,b\n1\n3,4").unwrap();
        let values = extract(&table, 1, ExtractionPolicy::Strict, "b").unwrap();
        assert_eq!(values, vec![4.0]);
    }

    #[test]
    fn test_strict_empty_column_is_error() {
        let table = CsvTable::parse("a,b\n1\n3").unwrap();
        let err = extract(&table, 1, ExtractionPolicy::Strict, "b").unwrap_err();
        assert_eq!(err, SortBenchError::EmptyNumericColumn("b".into()));
    }

    #[test]
    fn test_lenient_skips_bad_cells_and_short_rows() {
        let table = CsvTable::parse("a,b\n1,x\n2\n3,4\n5,-6.5").unwrap();
        let values = extract(&table, 1, ExtractionPolicy::Lenient, "1").unwrap();
        assert_eq!(values, vec![4.0, -6.5]);
    }

    #[test]
    fn test_lenient_allows_empty_result() {
        let table = CsvTable::parse("a,b\n1,2\n3,4").unwrap();
        let values = extract(&table, 7, ExtractionPolicy::Lenient, "7").unwrap();
        assert!(values.is_empty());
    }
}
