use async_trait::async_trait;
use chrono::Utc;
use snafu::ensure;
use std::collections::HashMap;

use photohunt_datatypes::util::Identifier;

use crate::error::{self, Error, Result};
use crate::sessions::sessiondb::SessionDb;
use crate::sessions::{GameSession, LeaderboardEntry, NameSubmission, SessionId};
use crate::util::user_input::UserInput;

#[derive(Default)]
pub struct HashMapSessionDb {
    sessions: HashMap<SessionId, GameSession>,
    // HashMap iteration order is arbitrary, leaderboard ties are broken by
    // insertion order
    insertion_order: Vec<SessionId>,
}

#[async_trait]
impl SessionDb for HashMapSessionDb {
    async fn create(&mut self, photo_name: String) -> Result<GameSession> {
        let session = GameSession {
            id: SessionId::new(),
            is_anonymous: true,
            name: None,
            start_time: Utc::now(),
            time: None,
            photo: photo_name,
        };

        self.insertion_order.push(session.id);
        self.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn session(&self, session: SessionId) -> Result<GameSession> {
        self.sessions
            .get(&session)
            .cloned()
            .ok_or(Error::SessionNotFound)
    }

    async fn record_completion(&mut self, session: SessionId) -> Result<i64> {
        let session = self
            .sessions
            .get_mut(&session)
            .ok_or(Error::SessionNotFound)?;

        // the time of a named session is frozen
        if !session.is_anonymous {
            if let Some(time) = session.time {
                return Ok(time);
            }
        }

        let time = session.elapsed_at(Utc::now());
        session.time = Some(time);
        Ok(time)
    }

    async fn submit_name(&mut self, session: SessionId, submission: NameSubmission) -> Result<()> {
        let session = self
            .sessions
            .get_mut(&session)
            .ok_or(Error::SessionNotFound)?;

        ensure!(session.is_anonymous, error::AlreadyRegistered);

        submission.validate()?;

        // a session can never be promoted without a finalized time
        if session.time.is_none() {
            session.time = Some(session.elapsed_at(Utc::now()));
        }

        session.name = Some(submission.name);
        session.is_anonymous = false;
        Ok(())
    }

    async fn leaderboard(&self, photo_name: &str) -> Result<Vec<LeaderboardEntry>> {
        let mut entries: Vec<LeaderboardEntry> = self
            .insertion_order
            .iter()
            .filter_map(|id| self.sessions.get(id))
            .filter(|session| !session.is_anonymous && session.photo == photo_name)
            .filter_map(|session| match (&session.name, session.time) {
                (Some(name), Some(time)) => Some(LeaderboardEntry {
                    name: name.clone(),
                    time,
                }),
                _ => None,
            })
            .collect();

        // stable sort, ties keep insertion order
        entries.sort_by_key(|entry| entry.time);
        Ok(entries)
    }
}
