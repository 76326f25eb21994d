//! Book record as stored and returned to clients.

use serde::{Deserialize, Serialize};

pub type BookId = i64;

/// One row of the `books` table. Text columns are nullable at the storage layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: BookId,
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

/// Create payload. Fields are optional here so that a missing field is a validation
/// rejection rather than a body parse failure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateBook {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
}

/// A validated create payload: all three fields present and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBook {
    pub author: String,
    pub title: String,
    pub publisher: String,
}

impl CreateBook {
    pub fn validate(self) -> Option<NewBook> {
        fn present(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.is_empty())
        }
        Some(NewBook {
            author: present(self.author)?,
            title: present(self.title)?,
            publisher: present(self.publisher)?,
        })
    }
}

impl NewBook {
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            author: Some(self.author),
            title: Some(self.title),
            publisher: Some(self.publisher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> CreateBook {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn complete_payload_validates() {
        let b = payload(r#"{"author":"A","title":"T","publisher":"P"}"#)
            .validate()
            .unwrap();
        assert_eq!(b.author, "A");
        assert_eq!(b.title, "T");
        assert_eq!(b.publisher, "P");
    }

    #[test]
    fn missing_null_or_empty_fields_are_rejected() {
        assert!(payload(r#"{"author":"A","title":"T"}"#).validate().is_none());
        assert!(payload(r#"{"author":null,"title":"T","publisher":"P"}"#).validate().is_none());
        assert!(payload(r#"{"author":"A","title":"","publisher":"P"}"#).validate().is_none());
        assert!(payload("{}").validate().is_none());
    }

    #[test]
    fn extra_fields_and_client_ids_are_ignored() {
        let b = payload(r#"{"id":99,"author":"A","title":"T","publisher":"P","isbn":"x"}"#)
            .validate()
            .unwrap();
        assert_eq!(b.into_book(1).id, 1);
    }

    #[test]
    fn book_serializes_all_columns() {
        let book = Book {
            id: 1,
            author: Some("A".into()),
            title: Some("T".into()),
            publisher: None,
        };
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            serde_json::json!({"id":1,"author":"A","title":"T","publisher":null})
        );
    }
}
