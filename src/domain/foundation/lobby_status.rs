//! Opaque lobby state carried on behalf of the lobby collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lobby state of an event.
///
/// The set of valid codes belongs to the lobby collaborator. This crate only
/// reads and writes the value; it never branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobbyStatus(String);

impl LobbyStatus {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the raw code as stored.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LobbyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LobbyStatus {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
