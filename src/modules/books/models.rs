use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A catalogue entry. Missing fields in a request body default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Unique identifier, also the store key
    pub id: String,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Partial update body. An `id` in the body is ignored; the path wins.
///
/// A field holding anything other than a string is skipped on its own, so
/// the rest of the patch still applies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    #[serde(default, deserialize_with = "string_or_skip")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub author: Option<String>,
}

fn string_or_skip<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }

    /// Overwrite the fields present in the patch.
    pub fn apply_to(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_fills_missing_fields_with_empty_strings() {
        let book: Book = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        assert_eq!(book, Book::new("7", "", ""));
    }

    #[test]
    fn patch_ignores_id_and_keeps_absent_fields() {
        let patch: BookPatch =
            serde_json::from_str(r#"{"id":"999","author":"Eric Blair"}"#).unwrap();
        let mut book = Book::new("1", "1984", "George Orwell");

        patch.apply_to(&mut book);
        assert_eq!(book, Book::new("1", "1984", "Eric Blair"));
    }

    #[test]
    fn null_patch_fields_are_left_alone() {
        let patch: BookPatch = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn mistyped_field_does_not_discard_the_rest() {
        let patch: BookPatch = serde_json::from_str(r#"{"title":5,"author":"X"}"#).unwrap();
        let mut book = Book::new("1", "1984", "George Orwell");

        patch.apply_to(&mut book);
        assert_eq!(book, Book::new("1", "1984", "X"));
    }

    #[test]
    fn nested_values_are_not_strings() {
        let patch: BookPatch =
            serde_json::from_str(r#"{"title":["a"],"author":{"name":"b"}}"#).unwrap();
        assert!(patch.is_empty());
    }
}
