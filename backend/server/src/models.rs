use bank::Species;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_DIFFICULTY: i64 = 1;

/// A catalog record as served over the API. `id` is always the store-assigned key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Butterfly {
    pub id: String,
    pub common_name: String,
    pub latin_name: String,
    pub image_url: String,
    pub difficulty: i64,
}

/// Request body for create/update, and the document persisted under each id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewButterfly {
    pub common_name: String,
    pub latin_name: String,
    pub image_url: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: i64,
}

fn default_difficulty() -> i64 {
    DEFAULT_DIFFICULTY
}

impl NewButterfly {
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("commonName", &self.common_name),
            ("latinName", &self.latin_name),
            ("imageUrl", &self.image_url),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Validation(name));
            }
        }

        Ok(())
    }

    pub fn with_id(self, id: impl Into<String>) -> Butterfly {
        Butterfly {
            id: id.into(),
            common_name: self.common_name,
            latin_name: self.latin_name,
            image_url: self.image_url,
            difficulty: self.difficulty,
        }
    }
}

impl From<&Species> for NewButterfly {
    fn from(species: &Species) -> Self {
        Self {
            common_name: species.common_name.to_string(),
            latin_name: species.latin_name.to_string(),
            image_url: species.image_url.to_string(),
            difficulty: species.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_difficulty_defaults() {
        let body = json!({
            "commonName": "Monarch",
            "latinName": "Danaus plexippus",
            "imageUrl": "https://example.com/monarch.jpg"
        });

        let parsed: NewButterfly = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.difficulty, DEFAULT_DIFFICULTY);
    }

    #[test]
    fn test_missing_field_rejected() {
        let body = json!({"commonName": "Monarch", "imageUrl": "https://example.com/m.jpg"});

        assert!(serde_json::from_value::<NewButterfly>(body).is_err());
    }

    #[test]
    fn test_validate_blank() {
        let blank = NewButterfly {
            common_name: "Monarch".into(),
            latin_name: "   ".into(),
            image_url: "https://example.com/m.jpg".into(),
            difficulty: 1,
        };

        assert!(matches!(blank.validate(), Err(AppError::Validation("latinName"))));
    }

    #[test]
    fn test_camel_case_shape() {
        let butterfly = NewButterfly {
            common_name: "Viceroy".into(),
            latin_name: "Limenitis archippus".into(),
            image_url: "https://example.com/v.jpg".into(),
            difficulty: 2,
        }
        .with_id("42");

        assert_eq!(
            serde_json::to_value(&butterfly).unwrap(),
            json!({
                "id": "42",
                "commonName": "Viceroy",
                "latinName": "Limenitis archippus",
                "imageUrl": "https://example.com/v.jpg",
                "difficulty": 2
            })
        );
    }
}
