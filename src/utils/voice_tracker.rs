//! Turns voice state updates into session bookkeeping.
//!
//! A user entering a voice channel opens a session, leaving closes it and adds
//! the elapsed seconds to their total. Moving between channels of the same guild
//! keeps the original session open, so time continues to accrue from the first join.

use chrono::{DateTime, Utc};
use serenity::model::id::{ChannelId, GuildId, UserId};
use serenity::model::voice::VoiceState;
use tracing::{debug, info};

use super::clock::Clock;
use super::database::{StoreResult, VoiceStore};

/// The change a voice state update represents for a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    Joined(ChannelId),
    Left(ChannelId),
    Moved { from: ChannelId, to: ChannelId },
    /// Same channel (mute, deafen, stream...) or still not in a channel.
    Unchanged,
}

/// Classifies a before/after channel pair.
pub fn classify(before: Option<ChannelId>, after: Option<ChannelId>) -> VoiceTransition {
    match (before, after) {
        (None, Some(channel)) => VoiceTransition::Joined(channel),
        (Some(channel), None) => VoiceTransition::Left(channel),
        (Some(from), Some(to)) if from != to => VoiceTransition::Moved { from, to },
        _ => VoiceTransition::Unchanged,
    }
}

/// Applies a transition for `user_id` in `guild_id` at `now`.
/// Only joins and leaves write to the store.
pub fn apply_transition(
    store: &VoiceStore,
    user_id: UserId,
    guild_id: GuildId,
    transition: VoiceTransition,
    now: DateTime<Utc>,
) -> StoreResult<()> {
    match transition {
        VoiceTransition::Joined(channel) => {
            info!("User {} joined voice channel {} in guild {}", user_id, channel, guild_id);
            store.record_join(user_id, guild_id, now)
        }
        VoiceTransition::Left(channel) => {
            match store.record_leave(user_id, guild_id, now)? {
                Some(seconds) => info!(
                    "User {} left voice channel {} in guild {} after {}s",
                    user_id, channel, guild_id, seconds
                ),
                None => debug!(
                    "User {} left voice channel {} in guild {} with no open session",
                    user_id, channel, guild_id
                ),
            }
            Ok(())
        }
        VoiceTransition::Moved { from, to } => {
            debug!(
                "User {} moved from {} to {} in guild {}, session left open",
                user_id, from, to, guild_id
            );
            Ok(())
        }
        VoiceTransition::Unchanged => Ok(()),
    }
}

/// Handles a gateway voice state update. Updates outside a guild are ignored.
pub fn track_voice_state(
    store: &VoiceStore,
    clock: &dyn Clock,
    old: Option<&VoiceState>,
    new: &VoiceState,
) -> StoreResult<VoiceTransition> {
    let Some(guild_id) = new.guild_id.or_else(|| old.and_then(|state| state.guild_id)) else {
        return Ok(VoiceTransition::Unchanged);
    };

    let transition = classify(old.and_then(|state| state.channel_id), new.channel_id);
    apply_transition(store, new.user_id, guild_id, transition, clock.now())?;
    Ok(transition)
}
