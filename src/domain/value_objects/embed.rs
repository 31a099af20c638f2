//! Rich message embeds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Maximum combined length of all text in an embed.
pub const MAX_EMBED_TOTAL_LENGTH: usize = 6000;

/// A rich embed attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_total_length"))]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 256, message = "must be at most 256 characters"))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 4096, message = "must be at most 4096 characters"))]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// RGB color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub footer: Option<EmbedFooter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub author: Option<EmbedAuthor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 25, message = "must contain at most 25 fields"), nested)]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmbedFooter {
    #[validate(length(max = 2048, message = "must be at most 2048 characters"))]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedMedia {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmbedAuthor {
    #[validate(length(max = 256, message = "must be at most 256 characters"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmbedField {
    #[validate(length(min = 1, max = 256, message = "must be 1-256 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 1024, message = "must be 1-1024 characters"))]
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

impl Embed {
    /// Combined character count of all text the platform limits.
    pub fn total_length(&self) -> usize {
        let len = |s: &Option<String>| s.as_deref().map_or(0, |s| s.chars().count());
        len(&self.title)
            + len(&self.description)
            + self.footer.as_ref().map_or(0, |f| f.text.chars().count())
            + self.author.as_ref().map_or(0, |a| a.name.chars().count())
            + self
                .fields
                .iter()
                .map(|f| f.name.chars().count() + f.value.chars().count())
                .sum::<usize>()
    }
}

fn validate_total_length(embed: &Embed) -> Result<(), ValidationError> {
    if embed.total_length() > MAX_EMBED_TOTAL_LENGTH {
        let mut err = ValidationError::new("embed_too_long");
        err.message = Some("embed text must be at most 6000 characters in total".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, value: &str) -> EmbedField {
        EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    #[test]
    fn test_default_embed_serializes_empty() {
        let json = serde_json::to_value(Embed::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_total_length_counts_all_text() {
        let embed = Embed {
            title: Some("abc".into()),
            fields: vec![field("de", "f")],
            ..Default::default()
        };
        assert_eq!(embed.total_length(), 6);
    }

    #[test]
    fn test_too_many_fields_fails_validation() {
        let embed = Embed {
            fields: (0..26).map(|i| field(&i.to_string(), "v")).collect(),
            ..Default::default()
        };
        assert!(embed.validate().is_err());
    }

    #[test]
    fn test_total_length_limit() {
        let embed = Embed {
            description: Some("x".repeat(4000)),
            fields: vec![field("a", &"y".repeat(1024)), field("b", &"z".repeat(1024))],
            ..Default::default()
        };
        assert!(embed.validate().is_err());
    }
}
