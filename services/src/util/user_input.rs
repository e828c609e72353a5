use crate::error::Result;

/// Input that crosses the trust boundary, e.g. seed-file photo definitions
/// or submitted leaderboard names. Stores only accept the [`Validated`]
/// wrapper where the checks must have run.
pub trait UserInput: Clone {
    /// Validates user input and returns itself
    ///
    /// # Errors
    ///
    /// Fails if the user input is invalid
    ///
    fn validate(&self) -> Result<()>;

    /// Validates user input and returns itself
    ///
    /// # Errors
    ///
    /// Fails if the user input is invalid
    ///
    fn validated(self) -> Result<Validated<Self>>
    where
        Self: Sized,
    {
        self.validate().map(|()| Validated { user_input: self })
    }
}

#[derive(Debug, Clone)]
pub struct Validated<T: UserInput + Clone> {
    pub user_input: T,
}
