//! Layout constants for the formula typesetting subsystem.
//!
//! The engine keeps one active set of font-metric constants; formula layout
//! reads spacing and offset fields from it. A basis is selected first, then
//! individual fields may be overwritten. All values are fractions of the
//! current font size.

/// Named font-metric constant sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontBasis {
    DejaVuSans,
    ComputerModern,
}

/// The active numeric constants consulted by formula layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathFontConstants {
    pub basis: FontBasis,
    /// Space after a scripted element.
    pub script_space: f64,
    /// General inter-element spacing.
    pub delta: f64,
    /// Superscript baseline offset.
    pub sup1: f64,
    /// Subscript baseline offset, unscripted case.
    pub sub1: f64,
    /// Subscript baseline offset when a superscript is present.
    pub sub2: f64,
    /// Drop applied to subscripts on tall nuclei.
    pub subdrop: f64,
    /// Extra space after slanted glyphs.
    pub delta_slanted: f64,
    /// Extra space around integral signs.
    pub delta_integral: f64,
}

impl MathFontConstants {
    /// Built-in constants for a basis.
    pub fn for_basis(basis: FontBasis) -> Self {
        match basis {
            FontBasis::DejaVuSans => MathFontConstants {
                basis,
                script_space: 0.05,
                delta: 0.025,
                sup1: 0.7,
                sub1: 0.3,
                sub2: 0.5,
                subdrop: 0.4,
                delta_slanted: 0.2,
                delta_integral: 0.1,
            },
            FontBasis::ComputerModern => MathFontConstants {
                basis,
                script_space: 0.075,
                delta: 0.075,
                sup1: 0.45,
                sub1: 0.2,
                sub2: 0.3,
                subdrop: 0.2,
                delta_slanted: 0.3,
                delta_integral: 0.3,
            },
        }
    }

    /// Tighten spacing and lower superscripts for denser formula output.
    ///
    /// Selects the Computer Modern basis, then overrides three fields; the
    /// remaining constants keep their basis defaults.
    pub fn optimize(&mut self) {
        *self = MathFontConstants::for_basis(FontBasis::ComputerModern);
        self.script_space = 0.01;
        self.delta = 0.01; // basis default: 0.075
        self.sup1 = 0.3; // basis default: 0.45
    }
}

impl Default for MathFontConstants {
    fn default() -> Self {
        MathFontConstants::for_basis(FontBasis::DejaVuSans)
    }
}
