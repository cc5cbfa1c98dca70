//! Identifier naming style classification.

use super::types::NamingStyle;

/// Classifiers in order; the first that accepts an identifier wins.
const CLASSIFIERS: [(NamingStyle, fn(&str) -> bool); 3] = [
    (NamingStyle::SnakeCase, is_snake_case),
    (NamingStyle::CamelCase, is_camel_case),
    (NamingStyle::PascalCase, is_pascal_case),
];

/// Classify an identifier. Anything no classifier accepts is `Other`.
pub fn classify_identifier(identifier: &str) -> NamingStyle {
    CLASSIFIERS
        .iter()
        .find(|(_, accepts)| accepts(identifier))
        .map(|(style, _)| *style)
        .unwrap_or(NamingStyle::Other)
}

fn is_snake_case(identifier: &str) -> bool {
    identifier.contains('_')
}

fn is_camel_case(identifier: &str) -> bool {
    identifier.chars().next().is_some_and(char::is_lowercase)
        && identifier.chars().any(char::is_uppercase)
}

fn is_pascal_case(identifier: &str) -> bool {
    identifier.chars().next().is_some_and(char::is_uppercase)
        && identifier.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_order() {
        assert_eq!(classify_identifier("user_name"), NamingStyle::SnakeCase);
        // Underscore wins over the camel shape.
        assert_eq!(classify_identifier("userName_v2"), NamingStyle::SnakeCase);
        assert_eq!(classify_identifier("userName"), NamingStyle::CamelCase);
        assert_eq!(classify_identifier("UserName"), NamingStyle::PascalCase);
        assert_eq!(classify_identifier("Context"), NamingStyle::PascalCase);
        assert_eq!(classify_identifier("URL"), NamingStyle::Other);
        assert_eq!(classify_identifier("topic"), NamingStyle::Other);
        assert_eq!(classify_identifier("_"), NamingStyle::SnakeCase);
    }
}
