use clap::Parser;
use std::process::ExitCode;
use tempo_run::cli::{Cli, Command, GenerateArgs};
use tempo_run::config::Config;
use tempo_run::models::PACE_OPTIONS;
use tempo_run::services;
use tempo_run::state::Session;
use tempo_run::utils::error_handling::create_runtime;
use tempo_run::SpotifyClient;

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "tempo-run";

fn main() -> ExitCode {
    // .env is optional; real environment variables win
    let dotenv_result = dotenvy::dotenv();

    // Set RUST_LOG=debug for verbose output, RUST_LOG=info for normal logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_module("hyper", log::LevelFilter::Warn)
        .init();

    log::debug!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);
    if let Err(e) = dotenv_result {
        log::debug!("[Main] No .env file loaded: {}", e);
    }

    let cli = Cli::parse();

    let rt = match create_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("[Main] {}", e);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[Main] {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Paces => {
            for (index, pace) in PACE_OPTIONS.iter().enumerate() {
                println!("{}. {}", index + 1, pace.label());
            }
            Ok(())
        }
        Command::TopArtists { page } => {
            let session = cli.config.session();
            let client = connect(&session, &cli.config)?;

            let candidates = services::top_artist_seeds(&client).await?;
            if candidates.is_empty() {
                println!("Couldn't find any top artists. Try generating from your saved tracks instead.");
                return Ok(());
            }
            for seed in session.selection.seed_candidates(&candidates, page) {
                println!("{}:{}", seed.id, seed.name);
            }
            Ok(())
        }
        Command::Generate(args) => generate(&cli.config, args).await,
    }
}

fn connect(session: &Session, config: &Config) -> Result<SpotifyClient, Box<dyn std::error::Error>> {
    if config.token().is_none() {
        return Err("no access token: set SPOTIFY_ACCESS_TOKEN or pass --access-token".into());
    }
    Ok(session
        .client(&config.api_base_url)?
        .with_timeout(config.request_timeout())?)
}

async fn generate(config: &Config, args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = config.session();
    let client = connect(&session, config)?;

    let selection = &mut session.selection;
    selection.playlist_type = args.playlist_type();
    if let Some(pace) = args.pace_option() {
        selection.choose_pace(pace);
    } else if let Some(min_tempo) = args.min_tempo {
        selection.min_tempo = min_tempo;
    }
    for seed in args.seeds.iter().cloned() {
        selection.add_seed(seed);
    }

    let tracks = services::generate_tracks(
        &client,
        selection.playlist_type,
        selection.seeds(),
        selection.min_tempo,
    )
    .await?;

    let playlist = if args.create && !tracks.is_empty() {
        Some(services::create_playlist(&client, &tracks.uris()).await?)
    } else {
        None
    };

    if args.json {
        let output = serde_json::json!({ "tracks": tracks, "playlist": playlist });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if tracks.is_empty() {
        println!("Sorry. No tracks could be found. Please try again with different options.");
    } else {
        for line in tracks.display_lines() {
            println!("{}", line);
        }
        if let Some(playlist) = &playlist {
            println!("\nListen to playlist: {}", playlist.external_url());
        }
    }

    session.reset();
    Ok(())
}
