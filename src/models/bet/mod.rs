// Bet module
// A stake two participants put on keeping a habit

use serde::{Deserialize, Serialize};

/// Bet participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            profile_pic_url: None,
        }
    }
}

/// Lifecycle of a bet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetStatus {
    /// Created, waiting for the opponent
    #[default]
    PendingAcceptance,
    Active,
    Completed,
    Disputed,
}

impl BetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BetStatus::PendingAcceptance => "pending_acceptance",
            BetStatus::Active => "active",
            BetStatus::Completed => "completed",
            BetStatus::Disputed => "disputed",
        }
    }

    /// Whether the bet can still change state.
    pub fn is_open(&self) -> bool {
        matches!(self, BetStatus::PendingAcceptance | BetStatus::Active)
    }
}

/// A habit bet between a creator and an opponent.
///
/// Proof images are opaque URI strings, kept in upload order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitBet {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub stake: String,
    pub creator: User,
    pub opponent: User,
    #[serde(default)]
    pub status: BetStatus,
    #[serde(default)]
    pub proof_images: Vec<String>,
}

impl HabitBet {
    /// New bet waiting for the opponent to accept.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        stake: impl Into<String>,
        creator: User,
        opponent: User,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            stake: stake.into(),
            creator,
            opponent,
            status: BetStatus::default(),
            proof_images: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the bet
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Bet id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Bet title cannot be empty".to_string());
        }

        if self.stake.trim().is_empty() {
            return Err("Bet stake cannot be empty".to_string());
        }

        if self.creator.id == self.opponent.id {
            return Err("Bet creator and opponent must differ".to_string());
        }

        Ok(())
    }
}
