use serde::{Deserialize, Serialize};

/// A stored color: one document per key
///
/// This is both the MongoDB document shape and the JSON representation returned
/// by every endpoint that answers with a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Color {
    #[schema(example = "primary")]
    pub key: String,
    #[schema(example = "blue")]
    pub value: String,
}

impl Color {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Request body for POST /api/color/{key}
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ColorBody {
    #[schema(example = "blue")]
    pub value: String,
}

/// Query parameters for GET /api
#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LookupQuery {
    /// Key of the color to look up
    pub color_key: Option<String>,
    /// Response format: `text` (default) or `json`
    pub format: Option<String>,
}

/// Response format for the lookup endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFormat {
    Text,
    Json,
}

impl LookupFormat {
    /// Parse the `format` parameter; absent or empty means plain text
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw
            .filter(|f| !f.is_empty())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            None | Some("text") => Some(LookupFormat::Text),
            Some("json") => Some(LookupFormat::Json),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_format_parse() {
        assert_eq!(LookupFormat::parse(None), Some(LookupFormat::Text));
        assert_eq!(LookupFormat::parse(Some("json")), Some(LookupFormat::Json));
        assert_eq!(LookupFormat::parse(Some("JSON")), Some(LookupFormat::Json));
        assert_eq!(LookupFormat::parse(Some("text")), Some(LookupFormat::Text));
        assert_eq!(LookupFormat::parse(Some("")), Some(LookupFormat::Text));
        assert_eq!(LookupFormat::parse(Some("xml")), None);
    }

    #[test]
    fn test_color_json_shape() {
        let json = serde_json::to_value(Color::new("primary", "blue")).unwrap();
        assert_eq!(json, serde_json::json!({"key": "primary", "value": "blue"}));
    }
}
