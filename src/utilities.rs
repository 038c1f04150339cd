pub mod bot_state;
pub mod cache;
pub mod command_context;
pub mod command_dispatcher;
pub mod command_manager;
pub mod config;
pub mod convert_argument;
pub mod logchamp;
pub mod parsed_command;
pub mod telegram_utils;
