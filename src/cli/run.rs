//! CLI entry logic
//!
//! Loads configuration, initializes logging, builds the client and prints the
//! shaped JSON result of one subcommand to stdout.

use anyhow::Context;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::args::{Cli, Commands, PlayerCommand, ThumbnailCommand, VideoCommand};
use crate::{
    Credentials, JwPlayerApi, JwPlayerApiGeneric, Result, Settings, Transport,
    config::{ConfigLoader, default_config_path},
    shaping::Shaped,
    types::{BatchContent, ThumbnailOptions, UploadFile},
    utils::version,
};

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings(&cli)?;
    init_logging(cli.verbose || settings.logging.verbose, &settings.logging.level);
    debug!("jwplatform v{}", version::get_version());

    let credentials = credentials(&cli)?;
    let api = JwPlayerApi::new(credentials, settings)?;

    let output = execute(&api, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Dispatch one subcommand against the client and return its JSON result
pub async fn execute<T: Transport>(api: &JwPlayerApiGeneric<T>, command: Commands) -> Result<Value> {
    match command {
        Commands::Videos(command) => execute_video(api, command).await,
        Commands::Thumbnails(command) => execute_thumbnail(api, command).await,
        Commands::Players(command) => execute_player(api, command).await,
    }
}

async fn execute_video<T: Transport>(
    api: &JwPlayerApiGeneric<T>,
    command: VideoCommand,
) -> Result<Value> {
    match command {
        VideoCommand::List(fields) => api
            .list_videos(fields.to_optional_params().as_ref())
            .await
            .map(entities),
        VideoCommand::Show { key } => api.get_video(&key).await.map(Value::Object),
        VideoCommand::Create { url, fields } => api
            .create_video_from_url(&url, fields.to_optional_params().as_ref())
            .await
            .map(Value::Object),
        VideoCommand::Upload { file, fields } => {
            let file = UploadFile::from_path(&file).await?;
            api.upload_video(file, fields.to_optional_params().as_ref())
                .await
                .map(Value::Object)
        }
        VideoCommand::Update { key, fields } => api
            .update_video(&key, &fields.to_params())
            .await
            .map(Value::Object),
        VideoCommand::Delete { key } => Ok(serde_json::to_value(api.delete_video(&key).await?)?),
        VideoCommand::Batch { file } => {
            let items = BatchContent::load_all(&file).await?;
            api.batch_create_videos(&items).await.map(entities)
        }
    }
}

async fn execute_thumbnail<T: Transport>(
    api: &JwPlayerApiGeneric<T>,
    command: ThumbnailCommand,
) -> Result<Value> {
    match command {
        ThumbnailCommand::Frame { key, position } => {
            let options = ThumbnailOptions { position };
            api.modify_thumbnail_frame(&key, &options).await
        }
        ThumbnailCommand::Upload { key, image } => {
            let image = UploadFile::from_path(&image).await?;
            api.upload_thumbnail(&key, image).await
        }
    }
}

async fn execute_player<T: Transport>(
    api: &JwPlayerApiGeneric<T>,
    command: PlayerCommand,
) -> Result<Value> {
    match command {
        PlayerCommand::List(fields) => api
            .list_players(fields.to_optional_params().as_ref())
            .await
            .map(entities),
        PlayerCommand::Show { key } => api.get_player(&key).await.map(Value::Object),
        PlayerCommand::Create(fields) => api
            .create_player(&fields.to_params())
            .await
            .map(Value::Object),
        PlayerCommand::Update { key, fields } => api
            .update_player(&key, &fields.to_params())
            .await
            .map(Value::Object),
        PlayerCommand::Delete { key } => Ok(serde_json::to_value(api.delete_player(&key).await?)?),
    }
}

fn entities(items: Vec<Shaped>) -> Value {
    Value::Array(items.into_iter().map(Value::Object).collect())
}

/// Explicit `--config`, else the default path when that file exists
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let path = cli
        .config
        .clone()
        .or_else(|| default_config_path().filter(|path| path.exists()));
    ConfigLoader::new()
        .load(path.as_deref())
        .context("failed to load configuration")
}

fn credentials(cli: &Cli) -> anyhow::Result<Credentials> {
    let api_key = cli
        .api_key
        .as_deref()
        .context("missing API key: pass --api-key or set JWPLATFORM_API_KEY")?;
    let api_secret = cli
        .api_secret
        .as_deref()
        .context("missing API secret: pass --api-secret or set JWPLATFORM_API_SECRET")?;
    Ok(Credentials::new(api_key, api_secret)?)
}

/// Log to stderr; `RUST_LOG` wins over the configured level
fn init_logging(verbose: bool, level: &str) {
    let default_level = if verbose { "debug" } else { level };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
