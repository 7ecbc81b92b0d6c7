// Style application: preset lookup, override merge, common-settings overlay

use crate::mathtext::MathFontConstants;
use crate::options::{OptionTable, Overrides};
use crate::presets::{self, Preset, UnknownPreset};

/// Owns the option table and math constants a renderer consults.
///
/// There is no process-wide instance: create one context per logical
/// rendering thread and pass it by reference. `new` gives bare factory
/// defaults; `init` additionally applies the default preset, which is what
/// host applications normally want at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleContext {
    pub(crate) options: OptionTable,
    pub(crate) math: MathFontConstants,
}

impl StyleContext {
    /// Context with factory defaults and no preset applied.
    pub fn new() -> Self {
        StyleContext {
            options: OptionTable::factory_defaults(),
            math: MathFontConstants::default(),
        }
    }

    /// Context with the default preset already applied.
    pub fn init() -> Self {
        let mut ctx = Self::new();
        ctx.apply_preset(&presets::default_preset(), &Overrides::new());
        ctx
    }

    /// Apply a named preset with caller overrides layered on top.
    ///
    /// Overrides win over preset values. The common-settings overlay runs
    /// last and wins over both for the keys it controls, so those keys
    /// cannot be customized through `overrides`. Math rendering is tuned
    /// unconditionally. Fails before any mutation when `name` is not in
    /// the catalog.
    pub fn apply_style(&mut self, name: &str, overrides: &Overrides) -> Result<(), UnknownPreset> {
        let preset = presets::get(name)?;
        self.apply_preset(&preset, overrides);
        Ok(())
    }

    /// Apply an already-resolved preset. Infallible.
    pub fn apply_preset(&mut self, preset: &Preset, overrides: &Overrides) {
        for (key, value) in preset.options() {
            self.options.set(*key, value.clone());
        }
        for (key, value) in overrides.iter() {
            self.options.set(key.clone(), value.clone());
        }
        self.apply_common_settings();
        self.math.optimize();
    }

    /// Fixed overlay applied after every preset, independent of preset
    /// identity. Idempotent.
    fn apply_common_settings(&mut self) {
        let table = &mut self.options;

        table.set("font.family", "sans-serif");
        table.set(
            "font.sans-serif",
            vec![
                "Arial".to_string(),
                "DejaVu Sans".to_string(),
                "Liberation Sans".to_string(),
            ],
        );

        table.set("axes.spines.top", true);
        table.set("axes.spines.right", true);

        table.set("xtick.direction", "in");
        table.set("ytick.direction", "in");
        table.set("xtick.top", true);
        table.set("ytick.right", true);

        table.set("xtick.major.size", 7.0);
        table.set("ytick.major.size", 7.0);
        table.set("xtick.minor.size", 4.0);
        table.set("ytick.minor.size", 4.0);
        table.set("xtick.major.width", 1.5);
        table.set("ytick.major.width", 1.5);
        table.set("xtick.minor.width", 1.0);
        table.set("ytick.minor.width", 1.0);

        table.set("grid.alpha", 0.3);
        table.set("savefig.bbox", "tight");
        table.set("savefig.transparent", true);
        table.set("figure.facecolor", "none");
        table.set("axes.facecolor", "none");
    }

    /// Overwrite the figure size, in inches. Values are not validated.
    pub fn set_figsize(&mut self, width: f64, height: f64) {
        self.options.set("figure.figsize", [width, height]);
    }

    /// Re-run the math layout tuning on demand.
    pub fn optimize_math_rendering(&mut self) {
        self.math.optimize();
    }

    /// Restore both tables to the engine's factory defaults, bypassing the
    /// preset catalog. The catalog itself is unaffected.
    pub fn reset(&mut self) {
        self.options = OptionTable::factory_defaults();
        self.math = MathFontConstants::default();
    }

    pub fn options(&self) -> &OptionTable {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionTable {
        &mut self.options
    }

    pub fn math(&self) -> &MathFontConstants {
        &self.math
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new()
    }
}
