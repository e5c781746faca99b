//! Complication Text Providers
//!
//! Sample text on a watch face complication is described by a small closed
//! set of `CLKTextProvider` records. Each record is a tagged dictionary on
//! the wire; the `class` key selects the variant. Rendering a provider
//! yields the human-readable sample string the paired device would show.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A composable sample-text primitive.
///
/// The variant set is closed: decoding a `class` tag outside this set fails
/// rather than defaulting, so a future provider class surfaces as an error
/// instead of silently wrong sample text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum TextProvider {
    /// Literal text
    #[serde(rename = "CLKSimpleTextProvider")]
    Simple { text: String },

    /// A calendar date, rendered as `yyyy-MM-dd`
    #[serde(rename = "CLKDateTextProvider")]
    Date {
        #[serde(with = "apple_epoch")]
        date: DateTime<Utc>,
    },

    /// A wall-clock time, rendered as `HH:mm`
    #[serde(rename = "CLKTimeTextProvider")]
    Time {
        #[serde(with = "apple_epoch")]
        date: DateTime<Utc>,
    },

    /// Concatenation of sub-providers interleaved with format segments
    #[serde(rename = "CLKMultiTextProvider")]
    Compound {
        format_segments: Vec<String>,
        #[serde(rename = "textProviders")]
        text_providers: Vec<TextProvider>,
    },
}

impl TextProvider {
    /// Render the sample string for this provider.
    ///
    /// Compound providers interleave each format segment with the rendering
    /// of the matching sub-provider (pairs stop at the shorter sequence),
    /// then append the last format segment once more. The trailing repeat is
    /// observed wire behavior that downstream tooling depends on; it is kept
    /// as-is. With no segments and no sub-providers the result is empty.
    pub fn sample_text(&self) -> String {
        match self {
            TextProvider::Simple { text } => text.clone(),
            TextProvider::Date { date } => date.format("%Y-%m-%d").to_string(),
            TextProvider::Time { date } => date.format("%H:%M").to_string(),
            TextProvider::Compound {
                format_segments,
                text_providers,
            } => {
                let mut rendered = String::new();
                for (segment, provider) in format_segments.iter().zip(text_providers) {
                    rendered.push_str(segment);
                    rendered.push_str(&provider.sample_text());
                }
                if let Some(last) = format_segments.last() {
                    rendered.push_str(last);
                }
                rendered
            }
        }
    }
}

/// Serde adapter for Apple reference-date timestamps.
///
/// Dates travel on the wire as fractional seconds since 2001-01-01T00:00:00Z,
/// the platform default for archived dates.
pub(crate) mod apple_epoch {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// 2001-01-01T00:00:00Z expressed in Unix seconds
    const APPLE_EPOCH_UNIX: i64 = 978_307_200;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Full nanosecond precision: the platform writes full-double
        // reference seconds, and a decoded date must re-encode to the same
        // wire value.
        let unix = date.timestamp() as f64 + f64::from(date.timestamp_subsec_nanos()) / 1e9;
        (unix - APPLE_EPOCH_UNIX as f64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let reference_secs = f64::deserialize(deserializer)?;
        let unix = reference_secs + APPLE_EPOCH_UNIX as f64;
        let whole = unix.floor();
        let nanos = ((unix - whole) * 1e9).round() as u32;
        Utc.timestamp_opt(whole as i64, nanos)
            .single()
            .ok_or_else(|| D::Error::custom(format!("date out of range: {}", reference_secs)))
    }
}
