use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct SessionState {
    request_count: u32,
    pub unlock_input: String,
}

impl SessionState {
    pub const fn request_count(&self) -> u32 {
        self.request_count
    }

    pub(super) const fn record_request(&mut self) {
        self.request_count = self.request_count.saturating_add(1);
    }
}

struct SessionEntry {
    state: Arc<tokio::sync::Mutex<SessionState>>,
    last_used: Instant,
}

/// Sessions keyed by Telegram user id. Nothing here outlives the process.
pub struct SessionStore {
    idle_timeout: Duration,
    sessions: Mutex<HashMap<i64, SessionEntry>>,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self { idle_timeout, sessions: Mutex::new(HashMap::new()) }
    }

    pub fn session(&self, user_id: i64) -> Arc<tokio::sync::Mutex<SessionState>> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().unwrap();

        let before = sessions.len();
        sessions.retain(|id, entry| {
            *id == user_id || now.duration_since(entry.last_used) <= self.idle_timeout
        });
        let expired = before - sessions.len();
        if expired > 0 {
            log::debug!("ended {expired} idle session(s)");
        }

        if let Some(entry) = sessions.get_mut(&user_id) {
            if now.duration_since(entry.last_used) <= self.idle_timeout {
                entry.last_used = now;
                return entry.state.clone();
            }
            log::debug!("session of {user_id} expired");
        }

        let state = Arc::new(tokio::sync::Mutex::new(SessionState::default()));
        sessions.insert(user_id, SessionEntry { state: state.clone(), last_used: now });
        state
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}
