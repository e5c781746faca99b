//! Document Metadata
//!
//! `metadata.json` carries descriptive state for the viewer: human-readable
//! names for the complication slots and a sample template per slot that
//! renders the preview text shown next to them. Only the top and bottom
//! slots carry metadata in this format.

use serde::{Deserialize, Serialize};

use crate::text_provider::TextProvider;

/// Per-document descriptive record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub complications_names: ComplicationNames,
    #[serde(default)]
    pub complication_sample_templates: ComplicationSampleTemplates,
}

/// Human-readable complication slot names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplicationNames {
    #[serde(default)]
    pub top: String,
    #[serde(default)]
    pub bottom: String,
}

/// Optional sample template per supported slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplicationSampleTemplates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<ComplicationSampleTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<ComplicationSampleTemplate>,
}

/// A complication-family template wrapping a text provider.
///
/// Same tagged-union discipline as [`TextProvider`], one level up: the
/// `class` tag selects the family shape, and an unrecognized family fails
/// the decode instead of defaulting. The format is known to use the two
/// utilitarian flat shapes; new families are additions to this tag set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ComplicationSampleTemplate {
    #[serde(rename = "CLKComplicationTemplateUtilitarianSmallFlat")]
    UtilitarianSmallFlat {
        #[serde(rename = "textProvider")]
        text_provider: TextProvider,
    },
    #[serde(rename = "CLKComplicationTemplateUtilitarianLargeFlat")]
    UtilitarianLargeFlat {
        #[serde(rename = "textProvider")]
        text_provider: TextProvider,
    },
}

impl ComplicationSampleTemplate {
    /// Render the sample string of the wrapped provider.
    pub fn sample_text(&self) -> String {
        match self {
            ComplicationSampleTemplate::UtilitarianSmallFlat { text_provider }
            | ComplicationSampleTemplate::UtilitarianLargeFlat { text_provider } => {
                text_provider.sample_text()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_delegates_sample_text() {
        let template = ComplicationSampleTemplate::UtilitarianSmallFlat {
            text_provider: TextProvider::Simple {
                text: "29 BPM".to_string(),
            },
        };
        assert_eq!(template.sample_text(), "29 BPM");
    }

    #[test]
    fn decodes_wire_metadata() {
        let json = r#"{
            "complications_names": {"top": "Date", "bottom": "Weather"},
            "complication_sample_templates": {
                "top": {
                    "class": "CLKComplicationTemplateUtilitarianLargeFlat",
                    "textProvider": {"class": "CLKSimpleTextProvider", "text": "MAR 7"}
                }
            }
        }"#;
        let metadata: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.complications_names.top, "Date");
        assert_eq!(metadata.complications_names.bottom, "Weather");
        let top = metadata.complication_sample_templates.top.as_ref().unwrap();
        assert_eq!(top.sample_text(), "MAR 7");
        assert!(metadata.complication_sample_templates.bottom.is_none());
    }

    #[test]
    fn empty_document_decodes_to_defaults() {
        let metadata: Metadata = serde_json::from_str("{}").unwrap();
        assert_eq!(metadata, Metadata::default());
    }

    #[test]
    fn absent_template_is_not_serialized() {
        let json = serde_json::to_string(&Metadata::default()).unwrap();
        assert!(!json.contains("\"top\":null"));
    }

    #[test]
    fn unknown_family_tag_is_rejected() {
        let err = serde_json::from_str::<ComplicationSampleTemplate>(
            r#"{"class": "CLKComplicationTemplateGraphicCorner", "textProvider": null}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }
}
