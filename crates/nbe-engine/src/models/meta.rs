use serde::Deserialize;

/// Name of the optional metadata file at root, category and example level.
pub const META_FILE: &str = "meta.yaml";

/// Root `meta.yaml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RootMeta {
    /// Explicit category order; categories not listed follow in name order.
    pub categories: Vec<String>,
}

/// Category `meta.yaml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CategoryMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Explicit example order; examples not listed follow in name order.
    pub examples: Vec<String>,
}

/// Example `meta.yaml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExampleMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Picks the metadata title unless it is missing or blank.
pub(crate) fn title_or(title: Option<String>, default: impl FnOnce() -> String) -> String {
    title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_meta_from_yaml() {
        let yaml = r#"
title: Messaging Patterns
description: |
  Core NATS messaging.
examples:
  - pub-sub
  - request-reply
"#;
        let meta: CategoryMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            meta,
            CategoryMeta {
                title: Some("Messaging Patterns".to_string()),
                description: Some("Core NATS messaging.\n".to_string()),
                examples: vec!["pub-sub".to_string(), "request-reply".to_string()],
            }
        );
    }

    #[test]
    fn missing_keys_default() {
        let meta: CategoryMeta = serde_yaml::from_str("title: Only Title").unwrap();
        assert!(meta.examples.is_empty());
        assert_eq!(meta.description, None);

        let meta: RootMeta = serde_yaml::from_str("other: 1").unwrap();
        assert_eq!(meta, RootMeta::default());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(serde_yaml::from_str::<RootMeta>("categories: 3").is_err());
        assert!(serde_yaml::from_str::<ExampleMeta>("title: [a, b]").is_err());
    }

    #[test]
    fn blank_title_falls_back() {
        assert_eq!(title_or(Some("  ".to_string()), || "Dflt".to_string()), "Dflt");
        assert_eq!(title_or(None, || "Dflt".to_string()), "Dflt");
        assert_eq!(title_or(Some("Set".to_string()), || "Dflt".to_string()), "Set");
    }
}
