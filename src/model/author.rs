use super::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub verified: bool,
}

impl Author {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            verified: false,
        }
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite the fields present in `edits`. The id is never touched.
    pub fn apply(&mut self, edits: AuthorEdits) {
        if let Some(first_name) = edits.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = edits.last_name {
            self.last_name = last_name;
        }
        if let Some(verified) = edits.verified {
            self.verified = verified;
        }
    }
}

impl Record for Author {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub verified: bool,
}

impl NewAuthor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, verified: bool) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            verified,
        }
    }

    pub fn into_author(self, id: String) -> Author {
        Author::new(id, self.first_name, self.last_name).with_verified(self.verified)
    }
}

/// Partial update for an author. Every target field is required, so a
/// missing value always means "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorEdits {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub verified: Option<bool>,
}

impl AuthorEdits {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }
}
