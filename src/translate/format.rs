use google_sheets4::api::{CellFormat, NumberFormat, TextFormat};
use std::fmt;
use tracing::debug;

/// Column formats understood by `change_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKeyword {
    Integer,
    Bold,
    SpecialDate,
    BrDate,
    BrDateTime,
}

impl FormatKeyword {
    pub const ALL: [FormatKeyword; 5] = [
        FormatKeyword::Integer,
        FormatKeyword::Bold,
        FormatKeyword::SpecialDate,
        FormatKeyword::BrDate,
        FormatKeyword::BrDateTime,
    ];

    /// Case-sensitive lookup, `None` for anything unrecognised.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKeyword::Integer => "INTEGER",
            FormatKeyword::Bold => "BOLD",
            FormatKeyword::SpecialDate => "SPECIAL_DATE",
            FormatKeyword::BrDate => "BR_DATE",
            FormatKeyword::BrDateTime => "BR_DATE_TIME",
        }
    }

    /// Merge this keyword's fragment into `format`, replacing whichever
    /// field it owns.
    pub fn apply(&self, format: &mut CellFormat) {
        match self {
            FormatKeyword::Integer => format.number_format = Some(number_format("NUMBER", "#,#0")),
            FormatKeyword::Bold => {
                format.text_format = Some(TextFormat {
                    bold: Some(true),
                    ..Default::default()
                })
            }
            FormatKeyword::SpecialDate => {
                format.number_format = Some(number_format("DATE", "mmm.-yy"))
            }
            FormatKeyword::BrDate => format.number_format = Some(number_format("DATE", "dd/mm/yyyy")),
            FormatKeyword::BrDateTime => {
                format.number_format = Some(number_format("DATE", "dd/mm/yyyy hh:mm:ss"))
            }
        }
    }
}

impl fmt::Display for FormatKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn number_format(type_: &str, pattern: &str) -> NumberFormat {
    NumberFormat {
        type_: Some(type_.to_string()),
        pattern: Some(pattern.to_string()),
    }
}

/// Fold format keywords, in order, into one `userEnteredFormat`.
/// Later keywords win on the same field; unknown keywords are skipped.
pub fn build_format_style<S: AsRef<str>>(formats: &[S]) -> CellFormat {
    let mut style = CellFormat::default();

    for keyword in formats {
        match FormatKeyword::from_keyword(keyword.as_ref()) {
            Some(known) => known.apply(&mut style),
            None => debug!(keyword = keyword.as_ref(), "Ignoring unknown format keyword"),
        }
    }

    style
}
