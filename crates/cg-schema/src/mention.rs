//! Evidence shared by every extracted variable

use serde::{Deserialize, Serialize};

/// Whether a variable is mentioned in a note, and the text spans citing it.
///
/// Flattened into every mention record, so `has_mention` and `spans` appear
/// at the top level of each serialized object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanMention {
    #[serde(default)]
    pub has_mention: bool,

    #[serde(default)]
    pub spans: Vec<String>,
}

impl SpanMention {
    /// A mention cited by the given spans.
    pub fn cited<I, S>(spans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            has_mention: true,
            spans: spans.into_iter().map(Into::into).collect(),
        }
    }
}
