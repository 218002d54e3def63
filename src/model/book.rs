use super::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Weak reference to `Author::id`; may dangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
}

impl Book {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            author_id: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author_id(mut self, author_id: Option<String>) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn is_by(&self, author_id: &str) -> bool {
        self.author_id.as_deref() == Some(author_id)
    }

    /// Overwrite the fields present in `edits`. The id is never touched.
    pub fn apply(&mut self, edits: BookEdits) {
        if let Some(title) = edits.title {
            self.title = title;
        }
        if let Some(author_id) = edits.author_id {
            self.author_id = author_id;
        }
    }
}

impl Record for Book {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields for a book that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewBook {
    pub title: String,
    pub author_id: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author_id: None,
        }
    }

    pub fn by(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    pub fn into_book(self, id: String) -> Book {
        Book::new(id)
            .with_title(self.title)
            .with_author_id(self.author_id)
    }
}

/// Partial update for a book.
///
/// The outer `Option` says whether a field was supplied at all; the inner one
/// carries an explicit null, which clears the field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookEdits {
    pub title: Option<Option<String>>,
    pub author_id: Option<Option<String>>,
}

impl BookEdits {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Some(title.into()));
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(Some(author_id.into()));
        self
    }

    pub fn clear_author(mut self) -> Self {
        self.author_id = Some(None);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book::new("7")
            .with_title("Leviathan")
            .with_author_id(Some("2".to_string()))
    }

    #[test]
    fn test_apply_title_only_keeps_author() {
        let mut book = sample();
        book.apply(BookEdits::default().title("Moon Palace"));
        assert_eq!(book.title.as_deref(), Some("Moon Palace"));
        assert_eq!(book.author_id.as_deref(), Some("2"));
        assert_eq!(book.id, "7");
    }

    #[test]
    fn test_apply_empty_edits_is_noop() {
        let mut book = sample();
        book.apply(BookEdits::default());
        assert_eq!(book, sample());
    }

    #[test]
    fn test_apply_explicit_null_clears_author() {
        let mut book = sample();
        book.apply(BookEdits::default().clear_author());
        assert_eq!(book.author_id, None);
        assert_eq!(book.title.as_deref(), Some("Leviathan"));
    }

    #[test]
    fn test_new_book_into_book() {
        let book = NewBook::new("The Storm").by("1").into_book("42".to_string());
        assert_eq!(book.id, "42");
        assert_eq!(book.title.as_deref(), Some("The Storm"));
        assert!(book.is_by("1"));
        assert!(!book.is_by("2"));
    }
}
