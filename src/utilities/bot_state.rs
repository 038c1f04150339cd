use std::sync::Mutex;
use std::time::Duration;

use reqwest::{Client, redirect};

use super::cache::UserCache;
use super::config::Config;
use crate::headlines::gate::RequestGate;
use crate::headlines::generation::GeminiGenerator;
use crate::headlines::session::SessionStore;

#[derive(Clone, Copy)]
pub enum BotStatus {
    Running,
    WaitingToClose,
    Closing,
    Closed,
}

pub struct BotState {
    pub status: Mutex<BotStatus>,
    pub config: Config,
    pub users: Mutex<UserCache>,
    pub sessions: SessionStore,
    pub gate: RequestGate<GeminiGenerator>,
}

impl BotState {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let mut http_client = Client::builder();

        if let Some(user_agent) = &config.user_agent {
            http_client = http_client.user_agent(user_agent);
        }

        let http_client = http_client
            .redirect(redirect::Policy::none())
            .timeout(Duration::from_secs(300))
            .build()?;

        let gate = RequestGate::new(
            GeminiGenerator::new(
                http_client,
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
            ),
            config.unlock_code.clone(),
        );

        Ok(Self {
            status: Mutex::new(BotStatus::Closed),
            users: Mutex::new(UserCache::default()),
            sessions: SessionStore::new(config.session_idle_timeout),
            gate,
            config,
        })
    }
}
