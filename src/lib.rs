// Library exports for plotstyle

pub mod data;
pub mod mathtext;
pub mod options;
pub mod parser;
pub mod presets;
pub mod render;
pub mod scope;
pub mod style;

pub use mathtext::{FontBasis, MathFontConstants};
pub use options::{OptionTable, OptionValue, Overrides};
pub use presets::names as list_presets;
pub use presets::{Preset, UnknownPreset, DEFAULT_PRESET};
pub use scope::StyleScope;
pub use style::StyleContext;
