//! City Zoom CLI.
//!
//! Kodiert und dekodiert Annotations-Fragmente, zeigt den Zustand einer
//! Seiten-URL und spielt Aktions-Skripte gegen einen Headless-Host ab.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use city_zoom::replay::{parse_script, run_script};
use city_zoom::{
    decode_fragment, encode_fragment, AnnotationSet, HeadlessSession, LatLng, MapSlot, Polyline,
    ViewerOptions,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "city-zoom")]
#[command(about = "Zwei synchronisierte Karten mit URL-kodierten Freihand-Annotationen")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pfad zur Options-Datei (Standard: city_zoom.toml neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug-Ausgaben aktivieren
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Linien ins Fragment-Format kodieren
    Encode {
        /// Punkte der linken Karte: "lat,lng;lat,lng;…"
        #[arg(long)]
        line1: Option<String>,

        /// Punkte der rechten Karte: "lat,lng;lat,lng;…"
        #[arg(long)]
        line2: Option<String>,
    },

    /// Fragment (alle Formate) dekodieren und als JSON ausgeben
    Decode {
        /// Fragment-Text ohne führendes `#`
        fragment: String,
    },

    /// Seiten-URL laden und Ansicht samt Linien als JSON ausgeben
    View {
        /// Vollständige Seiten-URL
        url: String,
    },

    /// Aktions-Skript abspielen und alle Effekte als JSON-Zeilen ausgeben
    Replay {
        /// Skript-Datei (eine Aktion pro Zeile)
        script: PathBuf,
    },

    /// Aktuelle Optionen als TOML in die Options-Datei schreiben
    WriteConfig {
        /// Vorhandene Datei überschreiben
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config_path = cli.config.unwrap_or_else(ViewerOptions::config_path);
    let options = ViewerOptions::load_from_file(&config_path);

    match cli.command {
        Commands::Encode { line1, line2 } => encode(line1.as_deref(), line2.as_deref()),
        Commands::Decode { fragment } => decode(&fragment),
        Commands::View { url } => view(options, &url),
        Commands::Replay { script } => replay(options, &script),
        Commands::WriteConfig { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Options-Datei existiert bereits: {} (--force zum Überschreiben)",
                    config_path.display()
                );
            }
            options.save_to_file(&config_path)
        }
    }
}

fn encode(line1: Option<&str>, line2: Option<&str>) -> Result<()> {
    let annotations = AnnotationSet::from_lines(
        line1.map(parse_points).transpose()?.flatten(),
        line2.map(parse_points).transpose()?.flatten(),
    );
    match encode_fragment(&annotations) {
        Some(fragment) => println!("{fragment}"),
        None => log::warn!("Keine Linie mit mindestens zwei Punkten: leeres Fragment"),
    }
    Ok(())
}

/// Parst `lat,lng;lat,lng;…`; weniger als zwei Punkte ergeben keine Linie.
fn parse_points(raw: &str) -> Result<Option<Polyline>> {
    let points = raw
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (lat, lng) = pair
                .split_once(',')
                .with_context(|| format!("Punkt ohne Komma: {pair}"))?;
            let point = LatLng::new(
                lat.trim()
                    .parse()
                    .with_context(|| format!("Ungültige Breite: {lat}"))?,
                lng.trim()
                    .parse()
                    .with_context(|| format!("Ungültige Länge: {lng}"))?,
            );
            if !point.is_finite() {
                bail!("Koordinaten müssen endlich sein: {pair}");
            }
            Ok(point)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Polyline::new(points))
}

fn decode(fragment: &str) -> Result<()> {
    let decoded = decode_fragment(fragment);
    if decoded.is_rejected(fragment) {
        bail!("Fragment in keinem bekannten Format lesbar");
    }
    let report = json!({
        "format": decoded.format.map(|format| format.to_string()),
        "line1": decoded.annotations.line1,
        "line2": decoded.annotations.line2,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn view(options: ViewerOptions, url: &str) -> Result<()> {
    let mut session = HeadlessSession::with_options(options);
    session.load(url)?;

    let state = &session.state;
    let maps: Vec<_> = MapSlot::ALL
        .iter()
        .map(|&slot| {
            let map = state.view.map(slot);
            json!({
                "slot": slot.id(),
                "center": map.center,
                "zoom": map.zoom,
                "line": state.annotations.lines.get(slot),
            })
        })
        .collect();
    let report = json!({
        "url": session.host.url,
        "query": state.view.params().to_query_string(),
        "maps": maps,
        "notifications": session.host.notifications,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn replay(options: ViewerOptions, path: &std::path::Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
    let steps = parse_script(&text)?;

    let mut session = HeadlessSession::with_options(options);
    let outcomes = run_script(&mut session, &steps)?;

    for outcome in &outcomes {
        for effect in &outcome.effects {
            let mut value = serde_json::to_value(effect)?;
            if let Some(fields) = value.as_object_mut() {
                fields.insert("line".to_string(), json!(outcome.line));
            }
            println!("{value}");
        }
    }

    log::info!(
        "{} Schritte abgespielt, {} Commands ausgeführt, URL: {}",
        steps.len(),
        session.state.command_log.len(),
        session.host.url
    );
    Ok(())
}
