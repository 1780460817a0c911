//! Query-string parameters
//!
//! A missing parameter matches nothing; an empty one matches empty names.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullNameQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl FullNameQuery {
    /// Both name parts, or `None` when either is missing
    pub fn full_name(&self) -> Option<(&str, &str)> {
        Some((self.first_name.as_deref()?, self.last_name.as_deref()?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_requires_both_parts() {
        let query = FullNameQuery {
            first_name: Some("Chuck".into()),
            last_name: None,
        };
        assert_eq!(query.full_name(), None);

        let query = FullNameQuery {
            first_name: Some(String::new()),
            last_name: Some(String::new()),
        };
        assert_eq!(query.full_name(), Some(("", "")));
    }
}
