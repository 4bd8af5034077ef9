use poise::serenity_prelude::Mentionable;
use std::fmt::Display;
use tracing::{debug, info};

use super::*;

/// Show your voice time in this server
#[poise::command(prefix_command, rename = "s", guild_only, category = "General")]
pub async fn stats(ctx: Context<'_>) -> CommandResult {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };
    let author = ctx.author();
    debug!("Stats request received from user {} in guild {}", author.name, guild_id);

    let data = ctx.data();
    let seconds = data.store.voice_time(author.id, guild_id, data.clock.now())?;

    info!("User {} has {}s of voice time in guild {}", author.name, seconds, guild_id);
    ctx.say(stats_reply(author.mention(), seconds)).await?;
    Ok(())
}

/// Renders seconds as `{h}h {m}m {s}s`. Hours are not wrapped into days.
pub fn format_voice_time(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

pub fn stats_reply(mention: impl Display, total_seconds: i64) -> String {
    format!(
        "⏱️ {}, you've spent **{}** in voice channels on this server.",
        mention,
        format_voice_time(total_seconds)
    )
}
