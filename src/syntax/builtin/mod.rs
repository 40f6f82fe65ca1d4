//! Built-in profiles
//!
//! A profile is a named set of keyword lists and ambient type names that
//! seeds a `KeywordRegistry` before configuration-file overrides apply.

mod csharp;

use super::keywords::KeywordRegistry;

/// Keyword lists for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Space-delimited primary keywords
    pub keywords: &'static str,
    /// Space-delimited contextual keywords
    pub contextual: &'static str,
    /// Type names added to the contextual set by `autofill_contextual`
    pub ambient_types: &'static [&'static str],
}

impl Profile {
    /// A registry configured with this profile's lists
    pub fn registry(&self, autofill_contextual: bool) -> KeywordRegistry {
        let mut registry =
            KeywordRegistry::new().with_ambient_types(self.ambient_types.iter().copied());
        registry.configure(self.keywords, self.contextual, "", "", autofill_contextual);
        registry
    }
}

/// Get all built-in profiles
pub fn all_profiles() -> Vec<Profile> {
    vec![csharp::csharp_profile()]
}

/// Look up a built-in profile by name (case-insensitive)
pub fn profile(name: &str) -> Option<Profile> {
    all_profiles()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(profile("csharp").map(|p| p.name), Some("csharp"));
        assert_eq!(profile("CSharp").map(|p| p.name), Some("csharp"));
        assert!(profile("cobol").is_none());
    }

    #[test]
    fn test_profile_registry() {
        let csharp = profile("csharp").unwrap();
        let registry = csharp.registry(true);
        assert!(registry.is_primary("namespace"));
        assert!(registry.is_primary("yield"));
        assert!(registry.is_contextual("Console"));
        assert!(!registry.is_primary("Console"));

        let bare = csharp.registry(false);
        assert!(!bare.is_contextual("Console"));
    }
}
