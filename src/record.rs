use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{AppError, Result};

/// One entry of the input JSON array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub color_name_en: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub color_image_url: String,
}

impl ColorRecord {
    pub fn new(color_name_en: impl Into<String>, color_image_url: impl Into<String>) -> Self {
        Self {
            color_name_en: color_name_en.into(),
            color_image_url: color_image_url.into(),
        }
    }

    /// `{id}_{name}.png`, with every space in the name turned into `_`.
    pub fn file_name(&self, id: u64) -> String {
        format!("{}_{}.png", id, self.color_name_en.replace(' ', "_"))
    }

    pub fn missing_field(&self) -> Option<&'static str> {
        if self.color_name_en.is_empty() {
            Some("color_name_en")
        } else if self.color_image_url.is_empty() {
            Some("color_image_url")
        } else {
            None
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub fn load_records(path: &Path) -> Result<Vec<ColorRecord>> {
    let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;

    serde_json::from_str(&content).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}
