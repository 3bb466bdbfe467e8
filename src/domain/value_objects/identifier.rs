//! Identifier Value Objects
//!
//! An [`Identifier`] is an opaque token naming one declared API element
//! (a path resource, a method binding, or an integration). Nothing about its
//! contents is interpreted; only string equality matters.
//!
//! An [`IdentifierSet`] is the ordered list of identifiers fed into the
//! trigger calculator. Order is part of the fingerprint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque token for one declared API element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Terraform reference to the `id` attribute of a resource,
    /// e.g. `${aws_api_gateway_method.Get.id}`.
    ///
    /// A stable placeholder handle for elements declared without one. It is
    /// not the token string a synthesizer substitutes at synth time, so a
    /// trigger computed over these handles differs from one recorded by a
    /// stack that hashed its synth tokens.
    pub fn terraform_ref(resource_type: &str, name: &str) -> Self {
        Self(format!("${{{}.{}.id}}", resource_type, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered sequence of identifiers, one per tracked API element
///
/// Duplicates are kept; the set is a sequence, not a mathematical set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierSet(Vec<Identifier>);

impl IdentifierSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, id: impl Into<Identifier>) {
        self.0.push(id.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.0
    }
}

impl<I: Into<Identifier>> FromIterator<I> for IdentifierSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a IdentifierSet {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for IdentifierSet {
    type Item = Identifier;
    type IntoIter = std::vec::IntoIter<Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Identifier>> for IdentifierSet {
    fn from(ids: Vec<Identifier>) -> Self {
        Self(ids)
    }
}
