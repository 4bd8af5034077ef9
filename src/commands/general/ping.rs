use poise::serenity_prelude as serenity;
use std::time::Duration;
use tracing::debug;

use super::*;

pub const PONG: &str = "Pong! 🏓";

/// Check if the bot is online
#[poise::command(prefix_command, category = "General")]
pub async fn ping(ctx: Context<'_>) -> CommandResult {
    if let Some(latency) = get_shard_latency(&ctx).await {
        debug!("Gateway latency: {} ms", latency.as_millis());
    }

    ctx.say(PONG).await?;

    Ok(())
}

async fn get_shard_latency(ctx: &Context<'_>) -> Option<Duration> {
    let shard_manager = ctx.framework().shard_manager().clone();
    let runners = shard_manager.runners.lock().await;

    // Latency is only known once the runner for this shard has heartbeated.
    let runner = runners.get(&serenity::ShardId(ctx.serenity_context().shard_id.0))?;

    runner.latency
}
