//! Gateway event handling and the framework-wide error handler.

use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

use crate::utils::voice_tracker;
use crate::{Data, Error};

/// Sent when a command fails for any reason other than being unknown.
pub const GENERIC_ERROR_REPLY: &str = "⚠️ An error occurred. Please try again later.";

/// Reply for a prefixed message that names no known command.
pub fn unknown_command_reply(content: &str, prefix: &str) -> String {
    format!(
        "❌ Unknown command: `{}`. Use `{}h` for help.",
        content, prefix
    )
}

pub async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!(
                "Logged in as {} ({} guilds)",
                data_about_bot.user.name,
                data_about_bot.guilds.len()
            );
        }
        serenity::FullEvent::VoiceStateUpdate { old, new } => {
            voice_tracker::track_voice_state(&data.store, data.clock.as_ref(), old.as_ref(), new)?;
        }
        _ => {}
    }
    Ok(())
}

pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::UnknownCommand {
            ctx, msg, prefix, ..
        } => {
            warn!("Unknown command from {}: {}", msg.author.name, msg.content);
            let reply = unknown_command_reply(&msg.content, prefix);
            if let Err(e) = msg.channel_id.say(ctx, reply).await {
                error!("Unable to send unknown command reply: {}", e);
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            if let Err(e) = ctx.say(GENERIC_ERROR_REPLY).await {
                error!("Unable to send error reply: {}", e);
            }
            error!("Error in command `{}`: {}", ctx.command().name, error);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!("Error handling {} event: {}", event.snake_case_name(), error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
