use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Guest entries keyed by identifier, kept in the order they were stored.
pub type GuestCollection = IndexMap<String, GuestRecord>;

// Guestbook entry as persisted in the guests file.
//
// Stored fields are read leniently: older files may hold numbers or other
// non-string values, which are kept as their JSON text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    // Free-form text; never parsed as a number.
    #[serde(default, deserialize_with = "lenient_string")]
    pub age: String,
    // Base64 encoded image bytes, passed through untouched.
    #[serde(default, deserialize_with = "lenient_string")]
    pub photo: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// Incoming guest data where every field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GuestSubmission {
    pub id: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    pub photo: Option<String>,
}

impl GuestSubmission {
    // Identifier supplied by the caller, ignoring empty strings.
    pub fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    // Overlay the present fields onto an existing record.
    pub fn merge_into(self, record: &mut GuestRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(age) = self.age {
            record.age = age;
        }
        if let Some(photo) = self.photo {
            record.photo = photo;
        }
    }

    // Build a standalone record; absent fields become empty.
    pub fn into_record(self, id: String) -> GuestRecord {
        GuestRecord {
            id,
            name: self.name.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            photo: self.photo.unwrap_or_default(),
        }
    }
}
