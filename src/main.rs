use bot::Bot;
use utilities::bot_state::BotState;
use utilities::config::Config;
use utilities::logchamp;

mod apis;
mod bot;
mod commands;
mod headlines;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("failed to load .env: {err}");
            return;
        }
    }

    if let Err(err) = logchamp::init() {
        eprintln!("failed to initialize logging: {err}");
        return;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    if config.gemini_api_key.is_none() {
        log::warn!("GEMINI_API_KEY is not set, every generation will fail");
    }
    if config.unlock_code.is_none() {
        log::info!("UNLOCK_CODE is not set, unlocking is disabled");
    }
    log::info!(
        "using {} with a free limit of {} request(s) per session",
        config.gemini_model,
        headlines::FREE_LIMIT
    );

    let state = match BotState::new(config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("failed to create the HTTP client: {err}");
            return;
        }
    };

    let mut bot = Bot::new(state);

    bot.add_command(commands::start::Start);
    bot.add_command(commands::headlines::Headlines);
    bot.add_command(commands::unlock::Unlock);
    bot.add_command(commands::quota::Quota);

    bot.run().await;
}
