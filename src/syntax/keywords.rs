//! Keyword registry
//!
//! Holds the word classes the style engine consults. A registry is an
//! explicit value owned by one `Restyler` (or shared read-only between
//! several); `configure` replaces all four word classes at once.

use std::collections::HashSet;

use super::rules::OperatorTable;

/// Word classes and lexical tables for one styling configuration
#[derive(Debug, Clone, Default)]
pub struct KeywordRegistry {
    primary: HashSet<String>,
    contextual: HashSet<String>,
    user: HashSet<String>,
    phrases: Vec<String>,
    /// Type names appended to the contextual set on request
    ambient_types: Vec<String>,
    operators: OperatorTable,
    import_directives: Vec<String>,
}

impl KeywordRegistry {
    /// Create an empty registry with the default operator table and
    /// `using` as the import directive
    pub fn new() -> Self {
        Self {
            import_directives: vec!["using".to_string()],
            ..Default::default()
        }
    }

    /// Builder: set the ambient type names used by `autofill_contextual`
    pub fn with_ambient_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ambient_types = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the four word classes.
    ///
    /// `primary`, `contextual` and `user` are space-delimited; `phrases`
    /// is comma-delimited. Empty strings leave the class empty.
    pub fn configure(
        &mut self,
        primary: &str,
        contextual: &str,
        user: &str,
        phrases: &str,
        autofill_contextual: bool,
    ) {
        self.primary = split_words(primary);
        self.contextual = split_words(contextual);
        self.user = split_words(user);
        if autofill_contextual {
            self.contextual.extend(self.ambient_types.iter().cloned());
        }
        self.phrases = split_phrases(phrases);

        tracing::debug!(
            primary = self.primary.len(),
            contextual = self.contextual.len(),
            user = self.user.len(),
            phrases = self.phrases.len(),
            "keyword registry configured"
        );
    }

    /// Replace the operator table
    pub fn set_operators(&mut self, operators: OperatorTable) {
        self.operators = operators;
    }

    /// Replace the words that mark an import line
    pub fn set_import_directives<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.import_directives = words.into_iter().map(Into::into).collect();
    }

    pub fn is_primary(&self, word: &str) -> bool {
        self.primary.contains(word)
    }

    pub fn is_contextual(&self, word: &str) -> bool {
        self.contextual.contains(word)
    }

    pub fn is_user(&self, word: &str) -> bool {
        self.user.contains(word)
    }

    /// Configured multi-word phrases, in configuration order
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Whether a line of text is an import line (`using System;`)
    pub fn is_import_line(&self, line: &str) -> bool {
        let line = line.trim_start();
        self.import_directives.iter().any(|word| {
            line.strip_prefix(word.as_str())
                .is_some_and(|rest| !rest.starts_with(super::rules::is_word_char))
        })
    }
}

fn split_words(text: &str) -> HashSet<String> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_phrases(text: &str) -> Vec<String> {
    let mut phrases: Vec<String> = Vec::new();
    for phrase in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !phrases.iter().any(|p| p == phrase) {
            phrases.push(phrase.to_string());
        }
    }
    phrases
}
