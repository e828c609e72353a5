use async_trait::async_trait;

use crate::error::Result;
use crate::sessions::{GameSession, LeaderboardEntry, NameSubmission, SessionId};

#[async_trait]
pub trait SessionDb: Send + Sync {
    /// Creates a new anonymous session playing the given photo and returns
    /// it, including the generated id the client uses to address it.
    async fn create(&mut self, photo_name: String) -> Result<GameSession>;

    /// Loads one session
    ///
    /// # Errors
    ///
    /// This call fails if the session does not exist.
    ///
    async fn session(&self, session: SessionId) -> Result<GameSession>;

    /// Stamps the elapsed time onto the session and returns it. Repeated
    /// calls overwrite the value with a fresh computation while the session
    /// is anonymous; once it is named the stored value is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// This call fails if the session does not exist.
    ///
    async fn record_completion(&mut self, session: SessionId) -> Result<i64>;

    /// Promotes an anonymous session to a named leaderboard entry, at most
    /// once. If no completion was recorded before, the elapsed time is
    /// stamped now, so a named session always carries a finalized time.
    ///
    /// # Errors
    ///
    /// This call fails if the session does not exist, is already named, or
    /// if the submitted name is invalid.
    ///
    async fn submit_name(&mut self, session: SessionId, submission: NameSubmission) -> Result<()>;

    /// The named sessions playing the given photo, fastest first. Ties keep
    /// session insertion order.
    async fn leaderboard(&self, photo_name: &str) -> Result<Vec<LeaderboardEntry>>;
}
