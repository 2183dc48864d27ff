//! Player identity: a renameable display name bound to a fixed mark.

use super::Token;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A seat at the table.
///
/// The token is fixed when the player is created. The name can be changed
/// any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    /// Creates a player with the given name and mark.
    #[instrument(skip(name), fields(player_name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, token: Token) -> Self {
        Self {
            name: name.as_ref().to_string(),
            token,
        }
    }

    /// Returns the current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    ///
    /// No validation is performed; an empty name is accepted.
    #[instrument(skip(self, new_name), fields(token = %self.token, new_name = %new_name.as_ref()))]
    pub fn set_name(&mut self, new_name: impl AsRef<str>) {
        self.name = new_name.as_ref().to_string();
    }

    /// Returns the mark assigned at construction.
    pub fn token(&self) -> Token {
        self.token
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}
