//! HTTP Method enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// HTTP methods accepted in a collection request.
///
/// A token is accepted only in its canonical uppercase form or fully
/// lowercase (`GET`, `get`); mixed case such as `Get` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
    /// WebDAV COPY method
    Copy,
    /// HTTP HEAD method
    Head,
    /// HTTP OPTIONS method
    Options,
    /// HTTP LINK method
    Link,
    /// HTTP UNLINK method
    Unlink,
    /// Cache PURGE method
    Purge,
    /// WebDAV LOCK method
    Lock,
    /// WebDAV UNLOCK method
    Unlock,
    /// WebDAV PROPFIND method
    Propfind,
}

impl HttpMethod {
    /// Returns all accepted HTTP methods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Get,
            Self::Post,
            Self::Put,
            Self::Patch,
            Self::Delete,
            Self::Copy,
            Self::Head,
            Self::Options,
            Self::Link,
            Self::Unlink,
            Self::Purge,
            Self::Lock,
            Self::Unlock,
            Self::Propfind,
        ]
    }

    /// Returns the canonical (uppercase) token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Copy => "COPY",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Link => "LINK",
            Self::Unlink => "UNLINK",
            Self::Purge => "PURGE",
            Self::Lock => "LOCK",
            Self::Unlock => "UNLOCK",
            Self::Propfind => "PROPFIND",
        }
    }

    /// Returns the lowercase token.
    #[must_use]
    pub const fn as_lower_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Copy => "copy",
            Self::Head => "head",
            Self::Options => "options",
            Self::Link => "link",
            Self::Unlink => "unlink",
            Self::Purge => "purge",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Propfind => "propfind",
        }
    }

    /// Looks up a method by its exact uppercase or lowercase token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|m| token == m.as_str() || token == m.as_lower_str())
    }

    /// Returns whether `token` names an accepted method.
    ///
    /// Absent and empty tokens are never valid.
    #[must_use]
    pub fn is_valid_token(token: Option<&str>) -> bool {
        token.and_then(Self::from_token).is_some()
    }

    /// Resolves a request's method, falling back to GET when the token
    /// is absent or not accepted.
    #[must_use]
    pub fn resolve(token: Option<&str>) -> Self {
        token.and_then(Self::from_token).unwrap_or_default()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::from_token(s).ok_or_else(|| DomainError::UnsupportedMethod(s.to_string()))
    }
}
