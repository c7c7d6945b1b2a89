//! CSV/TSV input producing rectangular rows of text.

use std::str::FromStr;

use crate::error::{GridError, Result};

/// Field separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }

    /// Guess from a file extension; anything but `tsv`/`tab` is comma separated.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "tsv" | "tab" => Delimiter::Tab,
            _ => Delimiter::Comma,
        }
    }
}

impl FromStr for Delimiter {
    type Err = GridError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "," | "comma" | "csv" => Ok(Delimiter::Comma),
            "\t" | "\\t" | "tab" | "tsv" => Ok(Delimiter::Tab),
            other => Err(GridError::Other(format!("unknown delimiter: {other}"))),
        }
    }
}

/// Parse delimited bytes into rows of trimmed fields.
///
/// Blank lines are skipped. Short rows are padded with empty strings so
/// every row has as many fields as the widest one. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn parse_delimited(data: &[u8], delim: Delimiter) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delim.as_byte())
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        // whitespace-only line
        if record.len() == 1 && record.iter().all(<[u8]>::is_empty) {
            continue;
        }
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    Ok(rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_pads_short_rows() {
        let rows =
            parse_delimited(b"Name,Age,City\nAlice,30\n\nBob,25,LA", Delimiter::Comma).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["Alice", "30", ""]);
        assert_eq!(rows[2][2], "LA");
    }

    #[test]
    fn test_parse_tsv_trims_fields() {
        let rows = parse_delimited(b"A\t B \n1\t2\n   \n", Delimiter::Tab).unwrap();
        assert_eq!(rows, vec![vec!["A", "B"], vec!["1", "2"]]);
    }

    #[test]
    fn test_quoted_fields() {
        let rows = parse_delimited(
            b"\"Hello, World\",42\n\"She said \"\"hi\"\"\",0",
            Delimiter::Comma,
        )
        .unwrap();
        assert_eq!(rows[0][0], "Hello, World");
        assert_eq!(rows[1][0], "She said \"hi\"");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_delimited(b"", Delimiter::Comma).unwrap().is_empty());
    }

    #[test]
    fn test_delimiter_names() {
        assert_eq!("tab".parse::<Delimiter>().unwrap(), Delimiter::Tab);
        assert_eq!(Delimiter::from_extension("TSV"), Delimiter::Tab);
        assert!("|".parse::<Delimiter>().is_err());
    }
}
