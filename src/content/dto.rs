use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::FieldError;

pub const MAX_CONTENT_IDEA_CHARS: usize = 5000;

/// Validated body of `POST /api/generate-content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateContentRequest {
    pub language: String,
    pub content_type: String,
    pub tone: String,
    pub content_idea: String,
    pub include_image: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub content: String,
    pub image_url: Option<String>,
}

impl GenerateContentRequest {
    /// Checks every field and reports all violations at once.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(obj) = body.as_object() else {
            return Err(vec![FieldError {
                path: vec![],
                message: "Expected object".into(),
            }]);
        };

        let mut errors = Vec::new();
        let language = required_string(obj, "language", "Language is required", &mut errors);
        let content_type =
            required_string(obj, "contentType", "Content type is required", &mut errors);
        let tone = required_string(obj, "tone", "Tone is required", &mut errors);
        let content_idea =
            required_string(obj, "contentIdea", "Content idea is required", &mut errors);

        if let Some(idea) = &content_idea {
            if idea.chars().count() > MAX_CONTENT_IDEA_CHARS {
                errors.push(FieldError::new("contentIdea", "Content idea too long"));
            }
        }

        let include_image = match obj.get("includeImage") {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                errors.push(FieldError::new("includeImage", "Expected boolean"));
                false
            }
        };

        match (language, content_type, tone, content_idea) {
            (Some(language), Some(content_type), Some(tone), Some(content_idea))
                if errors.is_empty() =>
            {
                Ok(Self {
                    language,
                    content_type,
                    tone,
                    content_idea,
                    include_image,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required_string(
    obj: &Map<String, Value>,
    field: &str,
    missing: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            errors.push(FieldError::new(field, missing));
            None
        }
        Some(_) => {
            errors.push(FieldError::new(field, "Expected string"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.path[0].as_str()).collect()
    }

    #[test]
    fn accepts_valid_body_and_defaults_include_image() {
        let req = GenerateContentRequest::from_json(&json!({
            "language": "English",
            "contentType": "Social Media Post",
            "tone": "Witty",
            "contentIdea": "new eco sneaker line"
        }))
        .unwrap();
        assert_eq!(req.language, "English");
        assert_eq!(req.content_type, "Social Media Post");
        assert!(!req.include_image);
    }

    #[test]
    fn reports_every_violated_field() {
        let errors = GenerateContentRequest::from_json(&json!({
            "language": "",
            "tone": 7,
            "contentIdea": "   ",
            "includeImage": "yes"
        }))
        .unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["language", "contentType", "tone", "contentIdea", "includeImage"]
        );
        assert_eq!(errors[0].message, "Language is required");
        assert_eq!(errors[2].message, "Expected string");
    }

    #[test]
    fn content_idea_limit_is_inclusive() {
        let body = |idea: String| {
            json!({"language": "English", "contentType": "Ad Copy", "tone": "Casual", "contentIdea": idea})
        };

        assert!(GenerateContentRequest::from_json(&body("a".repeat(MAX_CONTENT_IDEA_CHARS))).is_ok());

        let errors =
            GenerateContentRequest::from_json(&body("a".repeat(MAX_CONTENT_IDEA_CHARS + 1)))
                .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("contentIdea", "Content idea too long")]);

        // counted in characters, not bytes
        assert!(GenerateContentRequest::from_json(&body("é".repeat(MAX_CONTENT_IDEA_CHARS))).is_ok());
    }

    #[test]
    fn null_include_image_is_a_field_error() {
        let errors = GenerateContentRequest::from_json(&json!({
            "language": "English",
            "contentType": "Ad Copy",
            "tone": "Casual",
            "contentIdea": "spring sale",
            "includeImage": null
        }))
        .unwrap_err();
        assert_eq!(fields(&errors), vec!["includeImage"]);
        assert_eq!(errors[0].message, "Expected boolean");
    }

    #[test]
    fn rejects_non_object_body() {
        let errors = GenerateContentRequest::from_json(&json!(["English"])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].path.is_empty());
    }

    #[test]
    fn response_serializes_null_image_url() {
        let json = serde_json::to_value(GenerateContentResponse {
            content: "copy".into(),
            image_url: None,
        })
        .unwrap();
        assert_eq!(json, json!({"content": "copy", "imageUrl": null}));
    }
}
