//! Postergen - event poster generation CLI.

mod adapters;
mod cassette;
mod cli;
mod compose;
mod config;
mod context;
mod error;
mod output;
mod ports;
mod query;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::compose::{Compositor, EventFields};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::PosterError;
use crate::output::{resolve_output_path, save_poster};
use crate::ports::SearchRequest;
use crate::query::{select_photo, variant_plan, SearchAttempt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), PosterError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(PosterError::Config)?;

    // Resolve fields and validate arguments
    let event_name = cli.resolve_name().map_err(PosterError::InvalidArgument)?;
    cli.validate().map_err(PosterError::InvalidArgument)?;

    let fields = EventFields {
        time: cli.time.clone(),
        date: cli.date.clone(),
        event_name,
        place: cli.place.clone(),
        address: cli.address.clone(),
    };

    // Fonts and the optional logo load here; per-request composition never
    // touches the filesystem.
    let compositor = Compositor::new(&config.style, config.footer.as_ref())?;

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("POSTERGEN_REPLAY").ok();
    let is_recording = std::env::var("POSTERGEN_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if cli.verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        if cli.verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(&config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    // Generate one poster per planned variant; a failed variant is skipped
    // and only an entirely empty run is an error.
    let plan = variant_plan(&fields, cli.keywords.as_deref(), cli.page, cli.count);
    let mut saved = 0u32;
    let mut last_query = String::new();

    for (i, attempt) in plan.iter().enumerate() {
        let variant = i as u32 + 1;
        last_query.clone_from(&attempt.query);

        if cli.verbose {
            eprintln!("Variant {variant}: searching '{}' (page {})", attempt.query, attempt.page);
        }

        match generate_variant(&cli, &config, &ctx, &compositor, &fields, attempt, variant).await {
            Ok(path) => {
                saved += 1;
                eprintln!("Saved: {}", path.display());
            }
            Err(e) => {
                eprintln!("Warning: variant {variant} failed: {e}");
            }
        }
    }

    if saved == 0 {
        return Err(PosterError::NoPhotos { query: last_query });
    }
    if saved < cli.count {
        eprintln!("Warning: generated {saved} of {} requested posters.", cli.count);
    }

    // Finish recording if active
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}

/// Search, fetch, compose, and save a single poster variant.
async fn generate_variant(
    cli: &Cli,
    config: &Config,
    ctx: &ServiceContext,
    compositor: &Compositor,
    fields: &EventFields,
    attempt: &SearchAttempt,
    variant: u32,
) -> Result<PathBuf, PosterError> {
    let request = SearchRequest {
        query: attempt.query.clone(),
        page: attempt.page,
        per_page: config.search.per_page,
        orientation: config.search.orientation.clone(),
    };
    let photos = ctx.source.search(&request).await?;

    let photo = select_photo(&photos, attempt.page, config.search.per_page)
        .ok_or_else(|| PosterError::NoPhotos { query: attempt.query.clone() })?;

    if cli.verbose {
        eprintln!("Fetching {}x{} photo: {}", photo.width, photo.height, photo.url);
    }
    let background = ctx.source.fetch(&photo.url).await?;

    let png = compositor.compose(&background.data, fields)?;

    let path = resolve_output_path(cli.output.as_deref(), fields, variant, cli.count);
    save_poster(&png, &path)?;
    Ok(path)
}
