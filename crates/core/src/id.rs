//! Strongly-typed identifiers used across the domain.
//!
//! Article and customer ids are opaque, caller-supplied labels; the newtypes
//! only keep them from being mixed up.

use serde::{Deserialize, Serialize};

/// Identifier of an article.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

/// Identifier of a customer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

macro_rules! impl_str_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_str_newtype!(ArticleId);
impl_str_newtype!(CustomerId);
