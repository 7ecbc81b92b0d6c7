// Preset catalog: named, immutable bundles of rendering options

use crate::options::OptionValue;
use thiserror::Error;

/// Every registered preset name, in catalog order.
const PRESET_NAMES: [&str; 3] = ["paper", "presentation", "presentation_large"];

/// Preset applied by `StyleContext::init`.
pub const DEFAULT_PRESET: &str = "presentation";

/// A named, immutable bundle of rendering-option values.
///
/// Built by the catalog at lookup time; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    name: &'static str,
    options: Vec<(&'static str, OptionValue)>,
}

impl Preset {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn options(&self) -> &[(&'static str, OptionValue)] {
        &self.options
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

/// The one domain error: a preset name absent from the catalog.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown preset '{requested}', available: {}", .available.join(", "))]
pub struct UnknownPreset {
    pub requested: String,
    pub available: Vec<&'static str>,
}

/// All registered preset names, in stable catalog order.
pub fn names() -> &'static [&'static str] {
    &PRESET_NAMES
}

/// Look up a preset by name.
pub fn get(name: &str) -> Result<Preset, UnknownPreset> {
    match name {
        "paper" => Ok(paper()),
        "presentation" => Ok(presentation()),
        "presentation_large" => Ok(presentation_large()),
        _ => Err(UnknownPreset {
            requested: name.to_string(),
            available: PRESET_NAMES.to_vec(),
        }),
    }
}

pub(crate) fn default_preset() -> Preset {
    presentation()
}

/// Compact sizes for print, high output resolution.
fn paper() -> Preset {
    Preset {
        name: "paper",
        options: vec![
            ("font.size", 10.0.into()),
            ("axes.labelsize", 11.0.into()),
            ("axes.titlesize", 12.0.into()),
            ("legend.fontsize", 10.0.into()),
            ("figure.figsize", [10.0, 5.625].into()), // 16:9
            ("figure.dpi", 150.0.into()),
            ("savefig.dpi", 600.0.into()),
            ("axes.linewidth", 1.5.into()),
            ("lines.linewidth", 1.5.into()),
        ],
    }
}

/// Readable from the back of a room.
fn presentation() -> Preset {
    Preset {
        name: "presentation",
        options: vec![
            ("font.size", 14.0.into()),
            ("axes.labelsize", 16.0.into()),
            ("axes.titlesize", 18.0.into()),
            ("legend.fontsize", 12.0.into()),
            ("figure.figsize", [10.0, 5.625].into()), // 16:9
            ("figure.dpi", 100.0.into()),
            ("savefig.dpi", 300.0.into()),
            ("axes.linewidth", 2.25.into()),
            ("lines.linewidth", 3.0.into()),
        ],
    }
}

fn presentation_large() -> Preset {
    Preset {
        name: "presentation_large",
        options: vec![
            ("font.size", 20.0.into()),
            ("axes.labelsize", 24.0.into()),
            ("axes.titlesize", 28.0.into()),
            ("legend.fontsize", 18.0.into()),
            ("figure.figsize", [10.0, 5.625].into()), // 16:9
            ("figure.dpi", 100.0.into()),
            ("savefig.dpi", 300.0.into()),
            ("axes.linewidth", 3.0.into()),
            ("lines.linewidth", 4.0.into()),
        ],
    }
}
