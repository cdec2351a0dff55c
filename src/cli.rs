// Command-line arguments for the tempo-run binary
use crate::config::Config;
use crate::models::{PaceOption, PlaylistType, Seed, PACE_OPTIONS};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tempo-run", version, about = "Build a running playlist from Spotify tracks that match your pace")]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the pace options and the tempo each one asks for
    Paces,

    /// List your top artists, usable as --seed values
    TopArtists {
        /// Page of 15 artists to show (wraps around)
        #[arg(long, default_value_t = 0)]
        page: usize,
    },

    /// Pick tracks and optionally create the playlist
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct GenerateArgs {
    /// Use recommendations seeded from artists instead of your saved tracks
    #[arg(long)]
    pub discover: bool,

    /// Artist seed as ID or ID:NAME (up to 5 are used)
    #[arg(long = "seed", value_name = "ID[:NAME]", value_parser = parse_seed)]
    pub seeds: Vec<Seed>,

    /// Minimum tempo in BPM
    #[arg(long, conflicts_with = "pace")]
    pub min_tempo: Option<f64>,

    /// Pace option number from `tempo-run paces`
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub pace: Option<u8>,

    /// Create the playlist after listing the tracks
    #[arg(long)]
    pub create: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn playlist_type(&self) -> PlaylistType {
        if self.discover {
            PlaylistType::Discover
        } else {
            PlaylistType::MyTracks
        }
    }

    pub fn pace_option(&self) -> Option<&'static PaceOption> {
        self.pace
            .and_then(|number| PACE_OPTIONS.get(usize::from(number).checked_sub(1)?))
    }
}

/// `ID` or `ID:NAME`; the name defaults to the id
pub fn parse_seed(value: &str) -> Result<Seed, String> {
    let (id, name) = match value.split_once(':') {
        Some((id, name)) => (id.trim(), name.trim()),
        None => (value.trim(), value.trim()),
    };
    if id.is_empty() {
        return Err("seed id must not be empty".to_string());
    }
    let name = if name.is_empty() { id } else { name };
    Ok(Seed::artist(id, name))
}
