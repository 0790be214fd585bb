use commentlens_types::{Comment, RawPayload};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::{Error, Result};

pub const CSV_HEADERS: [&str; 5] = ["Text", "Author", "Likes", "Platform", "Timestamp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    /// Same bytes as `Csv`, declared as a spreadsheet so Excel opens it directly
    Excel,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Excel => "application/vnd.ms-excel",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xls",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "excel" => Ok(ExportFormat::Excel),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
        }
    }
}

/// Encoded export ready to be handed to a download or file writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub extension: &'static str,
}

impl ExportArtifact {
    /// `<base_name>.<extension>`
    pub fn file_name(&self, base_name: &str) -> String {
        format!("{}.{}", base_name, self.extension)
    }
}

/// JSON re-emits the document as received; CSV/Excel read the typed comments.
pub fn export(payload: Option<&RawPayload>, format: ExportFormat) -> Result<ExportArtifact> {
    let payload = payload.ok_or(Error::NoData)?;

    let bytes = match format {
        ExportFormat::Json => serde_json::to_vec_pretty(payload.raw())?,
        ExportFormat::Csv | ExportFormat::Excel => {
            comments_to_csv(payload.payload().export_comments())?
        }
    };

    debug!(%format, bytes = bytes.len(), "encoded export");

    Ok(ExportArtifact {
        format,
        bytes,
        mime_type: format.mime_type(),
        extension: format.extension(),
    })
}

/// One header row plus one row per comment, joined by `\n` (no trailing newline).
///
/// Only the comment text is quoted; the remaining columns are written as-is.
fn comments_to_csv(comments: &[Comment]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADERS)?;

    for comment in comments {
        wtr.write_record([
            quote_field(&comment.text),
            comment.author.clone(),
            comment.likes.to_string(),
            comment.platform().to_string(),
            comment.timestamp.clone(),
        ])?;
    }

    let mut bytes = wtr.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
