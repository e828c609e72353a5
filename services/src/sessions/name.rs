use serde::{Deserialize, Serialize};

use crate::error::{self, FieldError, Result};
use crate::util::user_input::UserInput;

pub const MAX_NAME_LENGTH: usize = 32;

/// The body of a leaderboard submission. The constraint set (1–32
/// characters, ASCII alphanumerics only) doubles as the sanitizer: nothing
/// that needs escaping for storage or display can pass validation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NameSubmission {
    pub name: String,
}

impl UserInput for NameSubmission {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        let length = self.name.chars().count();
        if !(1..=MAX_NAME_LENGTH).contains(&length) {
            errors.push(FieldError::new(
                "name",
                "Name should be between 1-32 characters.",
            ));
        }

        if !self.name.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push(FieldError::new(
                "name",
                "Name should not contain any special characters.",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            error::NameValidation { errors }.fail()
        }
    }
}
