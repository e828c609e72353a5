mod hashmap_sessiondb;
mod name;
mod session;
mod sessiondb;

pub use hashmap_sessiondb::HashMapSessionDb;
pub use name::{NameSubmission, MAX_NAME_LENGTH};
pub use session::{GameSession, LeaderboardEntry, SessionId};
pub use sessiondb::SessionDb;
