//! Builder for form-urlencoded request fields.
//!
//! The panel accepts request parameters as `application/x-www-form-urlencoded` bodies; this
//! helper collects optional values into ordered key/value pairs.

use std::fmt::Display;

/// Ordered form fields sent as a request body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(&'static str, String)>,
}

impl FormFields {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Borrow the collected key/value pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Returns true if no fields have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
