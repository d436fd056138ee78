//! Parser für Replay-Skripte: eine Aktion pro Zeile, Kommentarzeilen beginnen mit `#`.

use anyhow::{anyhow, bail, Context, Result};
use glam::DVec2;

use crate::core::{LatLng, MapSlot};

/// Punkt in einem Skript: geografisch oder in Container-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptPoint {
    Geo(LatLng),
    /// Wird beim Abspielen mit der aktuellen Ansicht der Karte umgerechnet
    Pixel(DVec2),
}

/// Eine Aktion des Skripts.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Load(String),
    Resize { slot: MapSlot, size: DVec2 },
    Draw(MapSlot),
    Click { slot: MapSlot, point: ScriptPoint },
    DoubleClick(MapSlot),
    Move { slot: MapSlot, point: ScriptPoint },
    Leave(MapSlot),
    Escape,
    Clear(MapSlot),
    Zoom { slot: MapSlot, zoom: i32 },
    Pan { slot: MapSlot, center: LatLng },
    Search { slot: MapSlot, location: LatLng },
    /// Fragment von außen ändern (Adresszeile, Zurück-Button)
    Hash(String),
    Copy,
    /// Zwischenablage erlauben oder verweigern
    Clipboard { denied: bool },
    Wait(u64),
}

/// Aktion mit Zeilennummer (ab 1).
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: ScriptStep,
}

/// Parst ein komplettes Skript.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let step = parse_line(content).with_context(|| format!("Zeile {line}: `{content}`"))?;
        steps.push(ScriptLine { line, step });
    }
    Ok(steps)
}

fn parse_line(content: &str) -> Result<ScriptStep> {
    let (keyword, rest) = match content.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (content, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let step = match keyword {
        "load" => ScriptStep::Load(single(&args, "URL")?.to_string()),
        "resize" => {
            expect_len(&args, 3, "<slot> <breite> <höhe>")?;
            ScriptStep::Resize {
                slot: parse_slot(args[0])?,
                size: DVec2::new(parse_num(args[1])?, parse_num(args[2])?),
            }
        }
        "draw" => ScriptStep::Draw(parse_slot(single(&args, "<slot>")?)?),
        "click" => {
            let (slot, point) = parse_slot_point(&args)?;
            ScriptStep::Click { slot, point }
        }
        "dblclick" => ScriptStep::DoubleClick(parse_slot(single(&args, "<slot>")?)?),
        "move" => {
            let (slot, point) = parse_slot_point(&args)?;
            ScriptStep::Move { slot, point }
        }
        "leave" => ScriptStep::Leave(parse_slot(single(&args, "<slot>")?)?),
        "escape" => {
            expect_len(&args, 0, "")?;
            ScriptStep::Escape
        }
        "clear" => ScriptStep::Clear(parse_slot(single(&args, "<slot>")?)?),
        "zoom" => {
            expect_len(&args, 2, "<slot> <zoom>")?;
            ScriptStep::Zoom {
                slot: parse_slot(args[0])?,
                zoom: args[1]
                    .parse()
                    .with_context(|| format!("Ungültiger Zoom: {}", args[1]))?,
            }
        }
        "pan" => {
            let (slot, center) = parse_slot_geo(&args)?;
            ScriptStep::Pan { slot, center }
        }
        "search" => {
            let (slot, location) = parse_slot_geo(&args)?;
            ScriptStep::Search { slot, location }
        }
        "hash" => ScriptStep::Hash(rest.to_string()),
        "copy" => {
            expect_len(&args, 0, "")?;
            ScriptStep::Copy
        }
        "clipboard" => match single(&args, "allow|deny")? {
            "allow" => ScriptStep::Clipboard { denied: false },
            "deny" => ScriptStep::Clipboard { denied: true },
            other => bail!("Erwartet allow oder deny, gefunden: {other}"),
        },
        "wait" => {
            let ms = single(&args, "<ms>")?;
            ScriptStep::Wait(
                ms.parse()
                    .with_context(|| format!("Ungültige Wartezeit: {ms}"))?,
            )
        }
        other => bail!("Unbekannte Aktion: {other}"),
    };
    Ok(step)
}

fn expect_len(args: &[&str], len: usize, usage: &str) -> Result<()> {
    if args.len() != len {
        bail!("Erwartet {len} Argument(e) {usage}, gefunden {}", args.len());
    }
    Ok(())
}

fn single<'a>(args: &[&'a str], usage: &str) -> Result<&'a str> {
    expect_len(args, 1, usage)?;
    Ok(args[0])
}

fn parse_slot(raw: &str) -> Result<MapSlot> {
    raw.parse::<u8>()
        .ok()
        .and_then(MapSlot::from_id)
        .ok_or_else(|| anyhow!("Ungültige Karte: {raw} (erwartet 1 oder 2)"))
}

fn parse_num(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .parse()
        .with_context(|| format!("Ungültige Zahl: {raw}"))?;
    if !value.is_finite() {
        bail!("Zahl muss endlich sein: {raw}");
    }
    Ok(value)
}

fn parse_slot_geo(args: &[&str]) -> Result<(MapSlot, LatLng)> {
    expect_len(args, 3, "<slot> <lat> <lng>")?;
    let slot = parse_slot(args[0])?;
    Ok((slot, LatLng::new(parse_num(args[1])?, parse_num(args[2])?)))
}

/// `<slot> <lat> <lng>` oder `<slot> px <x> <y>`.
fn parse_slot_point(args: &[&str]) -> Result<(MapSlot, ScriptPoint)> {
    match args {
        [slot, "px", x, y] => Ok((
            parse_slot(slot)?,
            ScriptPoint::Pixel(DVec2::new(parse_num(x)?, parse_num(y)?)),
        )),
        _ => {
            let (slot, point) = parse_slot_geo(args)?;
            Ok((slot, ScriptPoint::Geo(point)))
        }
    }
}
