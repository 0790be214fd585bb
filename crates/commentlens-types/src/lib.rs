pub mod comment;
pub mod error;
pub mod insight;
pub mod payload;
mod util;

pub use comment::{Comment, CommentData, PLATFORM};
pub use error::{Error, Result};
pub use insight::{Insight, LanguageTerm, PainPoint, SentimentItem, Topic};
pub use payload::{AnalysisPayload, Metadata, RawPayload, Sentiment};
pub use util::*;
