use crate::error::NewsdeskError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted article row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Request-body shape for create/update; the id is assigned by storage
/// (create) or taken from the path (update).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl ArticleDraft {
    /// Enforce the non-empty invariant on all text fields.
    pub fn validate(&self) -> Result<(), NewsdeskError> {
        for (field, value) in [
            ("title", &self.title),
            ("content", &self.content),
            ("category", &self.category),
        ] {
            if value.is_empty() {
                return Err(NewsdeskError::EmptyField(field));
            }
        }
        Ok(())
    }

    pub fn into_article(self, id: i64) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str, category: &str) -> ArticleDraft {
        ArticleDraft {
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn validate_accepts_populated_draft() {
        assert!(draft("t", "c", "news").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_fields() {
        for d in [draft("", "c", "k"), draft("t", "", "k"), draft("t", "c", "")] {
            assert!(matches!(
                d.validate(),
                Err(NewsdeskError::EmptyField(_))
            ));
        }
    }

    #[test]
    fn into_article_carries_fields_and_id() {
        let article = draft("t", "c", "news").into_article(7);
        assert_eq!(
            article,
            Article {
                id: 7,
                title: "t".to_string(),
                content: "c".to_string(),
                category: "news".to_string(),
            }
        );
    }
}
