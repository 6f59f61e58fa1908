//! Habit bet lifecycle.
//! Accepting, settling and collecting proof for a single bet.

use thiserror::Error;

use crate::models::bet::{BetStatus, HabitBet};

/// Rejected bet operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BetError {
    #[error("invalid bet: {0}")]
    Validation(String),

    #[error("cannot move bet from {} to {}", from.as_str(), to.as_str())]
    InvalidTransition { from: BetStatus, to: BetStatus },
}

pub type Result<T> = std::result::Result<T, BetError>;

/// Holds the bet currently on screen and applies transitions to it.
#[derive(Debug, Clone)]
pub struct BetService {
    bet: HabitBet,
}

impl BetService {
    pub fn new(bet: HabitBet) -> Result<Self> {
        bet.validate().map_err(BetError::Validation)?;
        Ok(Self { bet })
    }

    pub fn bet(&self) -> &HabitBet {
        &self.bet
    }

    pub fn into_bet(self) -> HabitBet {
        self.bet
    }

    /// Opponent accepts: pending bets become active.
    pub fn accept(&mut self) -> Result<()> {
        self.transition(BetStatus::PendingAcceptance, BetStatus::Active)
    }

    /// Settle an active bet.
    pub fn complete(&mut self) -> Result<()> {
        self.transition(BetStatus::Active, BetStatus::Completed)
    }

    /// Contest an active bet.
    pub fn dispute(&mut self) -> Result<()> {
        self.transition(BetStatus::Active, BetStatus::Disputed)
    }

    /// Append a proof image. A missing URI (picker cancelled) is ignored.
    ///
    /// Returns whether an image was added.
    pub fn submit_proof(&mut self, uri: Option<String>) -> bool {
        match uri {
            Some(uri) => {
                log::info!("Proof {} added to bet {}", uri, self.bet.id);
                self.bet.proof_images.push(uri);
                true
            }
            None => {
                log::debug!("No proof image picked for bet {}", self.bet.id);
                false
            }
        }
    }

    fn transition(&mut self, from: BetStatus, to: BetStatus) -> Result<()> {
        if self.bet.status != from {
            log::warn!(
                "Bet {} is {}, cannot become {}",
                self.bet.id,
                self.bet.status.as_str(),
                to.as_str()
            );
            return Err(BetError::InvalidTransition {
                from: self.bet.status,
                to,
            });
        }

        self.bet.status = to;
        log::debug!("Bet {} is now {}", self.bet.id, to.as_str());
        Ok(())
    }
}
