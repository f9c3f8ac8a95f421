//! The fixed list of backend dependency choices offered to the user.

/// One selectable backend package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog order is both presentation order and install order.
pub const CATALOG: &[DependencyEntry] = &[
    DependencyEntry {
        name: "express",
        description: "Web framework for Node.js",
    },
    DependencyEntry {
        name: "mongoose",
        description: "MongoDB object modeling for Node.js",
    },
    DependencyEntry {
        name: "dotenv",
        description: "Loads environment variables from .env file",
    },
    DependencyEntry {
        name: "cors",
        description: "Provides a Connect/Express middleware for enabling Cross-Origin Request Sharing (CORS)",
    },
    DependencyEntry {
        name: "bcrypt",
        description: "Library for hashing passwords",
    },
    DependencyEntry {
        name: "jsonwebtoken",
        description: "JSON Web Token for authentication",
    },
    DependencyEntry {
        name: "nodemon",
        description: "Utility for automatically restarting the server on code changes (dev dependency)",
    },
];

/// Restores catalog order and drops duplicates and unknown names
/// from a raw selection.
pub fn normalize_selection(chosen: &[String]) -> Vec<&'static str> {
    CATALOG
        .iter()
        .map(|dep| dep.name)
        .filter(|name| chosen.iter().any(|c| c == name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        for (i, dep) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..].iter().all(|other| other.name != dep.name),
                "duplicate catalog entry: {}",
                dep.name
            );
        }
    }

    #[test]
    fn normalize_restores_catalog_order() {
        let chosen = vec!["cors".to_string(), "express".to_string()];
        assert_eq!(normalize_selection(&chosen), vec!["express", "cors"]);
    }

    #[test]
    fn normalize_drops_duplicates_and_unknowns() {
        let chosen = vec![
            "express".to_string(),
            "express".to_string(),
            "left-pad".to_string(),
        ];
        assert_eq!(normalize_selection(&chosen), vec!["express"]);
    }

    #[test]
    fn normalize_of_full_catalog_lists_every_name_once() {
        let chosen: Vec<String> = CATALOG.iter().map(|d| d.name.to_string()).collect();
        let normalized = normalize_selection(&chosen);
        let expected: Vec<&str> = CATALOG.iter().map(|d| d.name).collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn normalize_of_empty_selection_is_empty() {
        assert!(normalize_selection(&[]).is_empty());
    }
}
