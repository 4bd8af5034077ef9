//! This module aggregates all the command modules for the bot.

/// General purpose commands (ping, help, voice stats).
pub mod general;

use crate::{Data, Error};
use general::{help::help, ping::ping, stats::stats};

/// Every command the framework registers.
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![ping(), help(), stats()]
}
