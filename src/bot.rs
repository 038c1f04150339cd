use std::future::Future;
use std::sync::Arc;

use tdlib::enums::{
    AuthorizationState, BotCommands, ConnectionState, MessageSender, OptionValue, Update,
};
use tdlib::functions;
use tdlib::types::{
    BotCommand, MessageSenderUser, OptionValueInteger, OptionValueString, UpdateAuthorizationState,
    UpdateConnectionState, UpdateNewMessage, UpdateOption, UpdateUser,
};
use tokio::signal;
use tokio::task::JoinHandle;

use crate::commands::CommandTrait;
use crate::utilities::bot_state::{BotState, BotStatus};
use crate::utilities::cache::CompactUser;
use crate::utilities::command_context::CommandContext;
use crate::utilities::command_manager::CommandManager;
use crate::utilities::parsed_command::ParsedCommand;
use crate::utilities::{command_dispatcher, telegram_utils};

pub type TdError = tdlib::types::Error;
pub type TdResult<T> = Result<T, TdError>;

pub struct Bot {
    client_id: i32,
    my_id: Option<i64>,
    state: Arc<BotState>,
    command_manager: CommandManager,
    tasks: Vec<JoinHandle<()>>,
}

impl Bot {
    pub fn new(state: BotState) -> Self {
        Self {
            client_id: tdlib::create_client(),
            my_id: None,
            state: Arc::new(state),
            command_manager: CommandManager::default(),
            tasks: Vec::new(),
        }
    }

    pub async fn run(&mut self) {
        self.set_status(BotStatus::Running);
        let client_id = self.client_id;
        self.run_task(async move {
            if let Err(err) = functions::set_log_verbosity_level(1, client_id).await {
                log::warn!("failed to set TDLib log verbosity: {}", err.message);
            }
        });

        // not tracked in `tasks`, shutdown waits on everything else
        let state = self.state.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                log::warn!("Ctrl+C received");
                *state.status.lock().unwrap() = BotStatus::WaitingToClose;
            }
        });

        let mut last_task_count = 0;
        loop {
            if let Some((update, _)) = tdlib::receive() {
                self.on_update(update);
            }
            self.tasks.retain(|t| !t.is_finished());
            let status = *self.state.status.lock().unwrap();
            match status {
                BotStatus::WaitingToClose => {
                    if self.tasks.is_empty() {
                        self.close();
                    } else {
                        let task_count = self.tasks.len();
                        if task_count != last_task_count {
                            log::info!("waiting for {task_count} task(s) to finish…");
                            last_task_count = task_count;
                        }
                    }
                }
                BotStatus::Closed => break,
                BotStatus::Running | BotStatus::Closing => (),
            }

            tokio::task::yield_now().await;
        }

        log::info!("closed with {} active session(s)", self.state.sessions.active_sessions());
    }

    fn set_status(&self, status: BotStatus) {
        *self.state.status.lock().unwrap() = status;
    }

    fn close(&mut self) {
        self.set_status(BotStatus::Closing);
        let client_id = self.client_id;
        self.run_task(async move {
            if let Err(err) = functions::close(client_id).await {
                log::error!("failed to close TDLib: {}", err.message);
            }
        });
    }

    fn run_task<T: Future<Output = ()> + Send + 'static>(&mut self, future: T) {
        self.tasks.push(tokio::spawn(future));
    }

    fn on_update(&mut self, update: Update) {
        match update {
            Update::AuthorizationState(update) => self.on_authorization_state(update),
            Update::NewMessage(update) => self.on_new_message(update),
            Update::User(update) => self.on_user(update),
            Update::Option(update) => self.on_option(update),
            Update::ConnectionState(update) => self.on_connection_state(&update),
            _ => (),
        }
    }

    fn on_authorization_state(&mut self, update: UpdateAuthorizationState) {
        let authorization_state = update.authorization_state;
        log::info!("authorization: {authorization_state:?}");
        match authorization_state {
            AuthorizationState::WaitTdlibParameters => {
                let client_id = self.client_id;
                let state = self.state.clone();
                self.run_task(async move {
                    let telegram = &state.config.telegram;
                    if let Err(err) = functions::set_tdlib_parameters(
                        false,
                        ".data".into(),
                        String::new(),
                        telegram.db_encryption_key.clone(),
                        true,
                        true,
                        false,
                        false,
                        telegram.api_id,
                        telegram.api_hash.clone(),
                        "en".into(),
                        env!("CARGO_PKG_NAME").into(),
                        String::new(),
                        env!("CARGO_PKG_VERSION").into(),
                        client_id,
                    )
                    .await
                    {
                        log::error!("failed to set TDLib parameters: {}", err.message);
                        *state.status.lock().unwrap() = BotStatus::WaitingToClose;
                    }
                });
            }
            AuthorizationState::WaitPhoneNumber => {
                let client_id = self.client_id;
                let state = self.state.clone();
                self.run_task(async move {
                    if let Err(err) = functions::check_authentication_bot_token(
                        state.config.telegram.token.clone(),
                        client_id,
                    )
                    .await
                    {
                        log::error!("bot token rejected: {}", err.message);
                        *state.status.lock().unwrap() = BotStatus::WaitingToClose;
                    }
                });
            }
            AuthorizationState::Closed => self.set_status(BotStatus::Closed),
            _ => (),
        }
    }

    fn on_ready(&mut self) {
        let client_id = self.client_id;
        let commands = self.command_manager.public_command_list();
        self.run_task(async move {
            if let Err(err) = Self::sync_commands(commands, client_id).await {
                log::error!("failed to sync commands: {}", err.message);
            }
        });
    }

    fn on_new_message(&mut self, update: UpdateNewMessage) {
        let MessageSender::User(MessageSenderUser { user_id }) = update.message.sender_id else {
            return; // ignore messages not sent by users
        };
        let Some(user) = self.state.users.lock().unwrap().get(user_id) else {
            return; // ignore users not in cache
        };
        if !user.is_regular() {
            return; // ignore bots
        }
        let Some(text) = telegram_utils::get_message_text(&update.message.content) else {
            return; // ignore messages without text
        };
        let Some(parsed_command) = ParsedCommand::parse(text) else {
            return; // ignore messages without commands
        };
        if let Some(bot_username) = &parsed_command.bot_username {
            let my_username = self.get_me().and_then(|me| me.username);
            if Some(bot_username.to_ascii_lowercase())
                != my_username.map(|username| username.to_ascii_lowercase())
            {
                return; // ignore commands sent to other bots
            }
        }
        let Some(command) = self.command_manager.get_command(&parsed_command.name) else {
            return; // ignore nonexistent commands
        };

        self.run_task(command_dispatcher::dispatch_command(
            command,
            parsed_command.arguments,
            CommandContext {
                client_id: self.client_id,
                user,
                message: update.message,
                bot_state: self.state.clone(),
            },
        ));
    }

    fn on_user(&self, update: UpdateUser) {
        if Some(update.user.id) == self.my_id {
            let user = CompactUser::from(update.user.clone());
            log::info!("running as {user}");
        }

        self.state.users.lock().unwrap().update(update);
    }

    fn on_option(&mut self, update: UpdateOption) {
        match update.name.as_ref() {
            "my_id" => {
                if let OptionValue::Integer(OptionValueInteger { value }) = update.value {
                    self.my_id = Some(value);
                }
            }
            "version" => {
                if let OptionValue::String(OptionValueString { value }) = update.value {
                    log::info!("running on TDLib {value}");
                }
            }
            _ => (),
        }
    }

    fn on_connection_state(&mut self, update: &UpdateConnectionState) {
        log::info!("connection: {:?}", update.state);

        if let ConnectionState::Ready = update.state {
            self.on_ready();
        }
    }

    pub fn get_me(&self) -> Option<CompactUser> {
        self.state.users.lock().unwrap().get(self.my_id?)
    }

    pub fn add_command(&mut self, command: impl CommandTrait + Send + Sync + 'static) {
        self.command_manager.add_command(Box::new(command));
    }

    pub async fn sync_commands(commands: Vec<BotCommand>, client_id: i32) -> TdResult<()> {
        let BotCommands::BotCommands(bot_commands) =
            functions::get_commands(None, String::new(), client_id).await?;

        if commands == bot_commands.commands {
            log::info!("commands already synced");
            return Ok(());
        }

        let commands_len = commands.len();
        functions::set_commands(None, String::new(), commands, client_id).await?;
        log::info!("synced {commands_len} commands");

        Ok(())
    }
}
