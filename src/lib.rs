//! Dex: a Discord bot that tracks how long members spend in voice channels.

use poise::serenity_prelude as serenity;
use tracing::{debug, info};

pub mod commands;
pub mod config;
pub mod events;
pub mod utils;

use config::Config;
use utils::clock::{Clock, SystemClock};
use utils::database::VoiceStore;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// User data, accessible in every command invocation and event.
pub struct Data {
    pub store: VoiceStore,
    pub clock: Box<dyn Clock>,
    pub prefix: String,
}

pub fn build_framework(data: Data) -> poise::Framework<Data, Error> {
    let prefix = data.prefix.clone();

    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(events::on_error(error)),
            pre_command: |ctx| {
                Box::pin(async move {
                    debug!(
                        "Executing command {} for {}",
                        ctx.command().qualified_name,
                        ctx.author().name
                    );
                })
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| Box::pin(async move { Ok(data) }))
        .build()
}

/// Opens the store, connects to the gateway and runs until the client stops.
pub async fn run(config: Config) -> Result<(), Error> {
    let store = VoiceStore::open(&config.database_path)?;
    info!(
        "Opened voice activity database at {}",
        config.database_path.display()
    );

    let data = Data {
        store,
        clock: Box::new(SystemClock),
        prefix: config.prefix.clone(),
    };

    let mut client = serenity::ClientBuilder::new(&config.token, Config::intents())
        .framework(build_framework(data))
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
            shard_manager.shutdown_all().await;
        }
    });

    client.start().await.map_err(Into::into)
}
