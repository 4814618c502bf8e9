// src/csv.rs
use std::io::Write;

use ::csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::store::DataSet;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quote {
    /// Only fields containing the delimiter, quotes or line breaks.
    Necessary,
    /// Every field, header included.
    Always,
}

impl From<Quote> for QuoteStyle {
    fn from(q: Quote) -> Self {
        match q {
            Quote::Necessary => QuoteStyle::Necessary,
            Quote::Always => QuoteStyle::Always,
        }
    }
}

/// Write header then rows. `"` inside a field is doubled.
pub fn write_table<W: Write>(
    w: W,
    data: &DataSet,
    delimiter: u8,
    quote: Quote,
) -> Result<(), ::csv::Error> {
    let mut out = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(quote.into())
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    out.write_record(&data.headers)?;
    for row in &data.rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}
