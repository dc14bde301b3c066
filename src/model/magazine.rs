use crate::core::{NewsdeskError, Result};

/// A publication that articles can appear in.
///
/// Name and category are deliberately non-unique; two magazines may share
/// either. Deleting a magazine never deletes its articles, the store
/// detaches them by clearing their magazine reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Magazine {
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
}

impl Magazine {
    /// Constructs a transient magazine, validating the fields up front.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        let magazine = Magazine {
            id: None,
            name: name.into(),
            category: category.into(),
        };
        magazine.validate()?;
        Ok(magazine)
    }

    /// Checks every field constraint without touching the store.
    pub fn validate(&self) -> Result<()> {
        let name_len = self.name.chars().count();
        if name_len < 1 || name_len > 100 {
            return Err(NewsdeskError::validation(
                "name",
                "Name must be between 1 and 100 characters",
            ));
        }
        let category_len = self.category.chars().count();
        if category_len < 1 || category_len > 50 {
            return Err(NewsdeskError::validation(
                "category",
                "Category must be between 1 and 50 characters",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_magazine() {
        let magazine = Magazine::new("Tech Insights", "Technology").unwrap();
        assert_eq!(magazine.id, None);
        assert_eq!(magazine.category, "Technology");
    }

    #[test]
    fn test_empty_name_rejected() {
        match Magazine::new("", "Technology").unwrap_err() {
            NewsdeskError::Validation { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_oversize_name_rejected() {
        assert!(Magazine::new("m".repeat(101), "Technology").is_err());
        assert!(Magazine::new("m".repeat(100), "Technology").is_ok());
    }

    #[test]
    fn test_category_bounds() {
        assert!(Magazine::new("Tech Insights", "").is_err());
        assert!(Magazine::new("Tech Insights", "c".repeat(51)).is_err());
        assert!(Magazine::new("Tech Insights", "c".repeat(50)).is_ok());
    }
}
