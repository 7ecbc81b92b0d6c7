// Scoped style sessions: snapshot on entry, restore on every exit path

use crate::mathtext::MathFontConstants;
use crate::options::{OptionTable, Overrides};
use crate::presets::UnknownPreset;
use crate::style::StyleContext;
use anyhow::Result;
use std::ops::{Deref, DerefMut};

/// Full copy of a context's mutable state, taken at session entry.
#[derive(Debug, Clone)]
struct StyleSnapshot {
    options: OptionTable,
    math: MathFontConstants,
}

/// Guard holding a temporarily-applied style.
///
/// Derefs to the underlying [`StyleContext`] so drawing code reads options
/// through the guard. The snapshot is restored when the guard drops, which
/// covers normal scope exit, early return, `?` propagation, and unwinding.
pub struct StyleScope<'a> {
    ctx: &'a mut StyleContext,
    snapshot: Option<StyleSnapshot>,
}

impl StyleContext {
    /// Apply a preset for the lifetime of the returned guard.
    ///
    /// The snapshot covers the whole option table and the math constants,
    /// not just the keys the preset touches, so changes the caller makes to
    /// unrelated options inside the scope are rolled back too. Scopes nest:
    /// each restores relative to the immediately enclosing state.
    pub fn scoped_style(
        &mut self,
        name: &str,
        overrides: &Overrides,
    ) -> Result<StyleScope<'_>, UnknownPreset> {
        let snapshot = StyleSnapshot {
            options: self.options.clone(),
            math: self.math,
        };
        self.apply_style(name, overrides)?;
        Ok(StyleScope {
            ctx: self,
            snapshot: Some(snapshot),
        })
    }

    /// Run `body` with a preset temporarily applied.
    ///
    /// State is restored before this returns whether `body` succeeds or
    /// fails; a failure from `body` resurfaces after restoration.
    pub fn with_style<T>(
        &mut self,
        name: &str,
        overrides: &Overrides,
        body: impl FnOnce(&mut StyleContext) -> Result<T>,
    ) -> Result<T> {
        let mut scope = self.scoped_style(name, overrides)?;
        body(&mut scope)
    }
}

impl Deref for StyleScope<'_> {
    type Target = StyleContext;

    fn deref(&self) -> &StyleContext {
        self.ctx
    }
}

impl DerefMut for StyleScope<'_> {
    fn deref_mut(&mut self) -> &mut StyleContext {
        self.ctx
    }
}

impl Drop for StyleScope<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.ctx.options = snapshot.options;
            self.ctx.math = snapshot.math;
        }
    }
}
