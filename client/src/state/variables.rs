//! Workflow variables and `{{name}}` interpolation.

#[cfg(test)]
#[path = "variables_test.rs"]
mod variables_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariableError {
    #[error("variable name is empty")]
    EmptyName,
    #[error("invalid variable name {0:?}: use letters, digits, and underscores, not starting with a digit")]
    InvalidName(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariablesState {
    pub vars: BTreeMap<String, String>,
}

impl VariablesState {
    /// Set `name` to `value` after validating the name.
    ///
    /// # Errors
    ///
    /// Returns [`VariableError`] when the trimmed name is empty or contains
    /// anything other than ASCII alphanumerics and underscores, or starts
    /// with a digit.
    pub fn try_with_var(&self, name: &str, value: &str) -> Result<Self, VariableError> {
        let name = validate_name(name)?;
        let mut vars = self.vars.clone();
        vars.insert(name.to_owned(), value.to_owned());
        Ok(Self { vars })
    }

    #[must_use]
    pub fn without_var(&self, name: &str) -> Self {
        let mut vars = self.vars.clone();
        vars.remove(name.trim());
        Self { vars }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Replace every `{{name}}` with its value. Unknown names and unclosed
    /// braces are left as written.
    #[must_use]
    pub fn interpolate(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };
            let name = after[..end].trim();
            match self.vars.get(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// Trimmed `name` if it is a valid variable name.
///
/// # Errors
///
/// [`VariableError`] for an empty or malformed name.
pub fn validate_name(name: &str) -> Result<&str, VariableError> {
    let name = name.trim();
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(VariableError::EmptyName);
    };
    let valid_first = first.is_ascii_alphabetic() || first == '_';
    if !valid_first || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(VariableError::InvalidName(name.to_owned()));
    }
    Ok(name)
}
