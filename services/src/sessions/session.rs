use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use photohunt_datatypes::identifier;

identifier!(SessionId);

/// A single player's attempt at one photo. Sessions start anonymous; a
/// successful leaderboard submission names them exactly once. They are never
/// deleted, the named ones are the leaderboard history.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: SessionId,
    pub is_anonymous: bool,
    pub name: Option<String>,
    pub start_time: DateTime<Utc>,
    /// Elapsed play time in milliseconds. Unset until a completion is
    /// recorded; frozen once the session is named.
    pub time: Option<i64>,
    /// Name of the photo this session plays, fixed at creation.
    pub photo: String,
}

impl GameSession {
    /// Milliseconds elapsed between the session start and `now`.
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.start_time).num_milliseconds()
    }
}

/// One row of a photo's leaderboard.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use photohunt_datatypes::util::Identifier;

    #[test]
    fn elapsed_time_is_in_milliseconds() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let session = GameSession {
            id: SessionId::new(),
            is_anonymous: true,
            name: None,
            start_time: start,
            time: None,
            photo: "wheres-waldo".to_string(),
        };

        let now = start + chrono::Duration::milliseconds(73_500);

        assert_eq!(session.elapsed_at(now), 73_500);
    }

    #[test]
    fn serializes_in_the_wire_format() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let session = GameSession {
            id: SessionId(uuid::Uuid::from_u128(0x1234)),
            is_anonymous: true,
            name: None,
            start_time: start,
            time: None,
            photo: "wheres-waldo".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000001234",
                "isAnonymous": true,
                "name": null,
                "startTime": "2024-05-01T12:00:00Z",
                "time": null,
                "photo": "wheres-waldo",
            })
        );
    }
}
