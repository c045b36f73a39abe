//! Caller-owned studio state
//!
//! The engine functions are stateless. A front end that wants "current
//! palette", "dark twin" and a status line keeps a [`StudioSession`] and
//! calls into it on every user action; each action returns a fresh
//! [`SessionView`] to render.
//!
//! # Usage
//!
//! ```rust
//! use palette_engine::{StudioConfig, StudioSession, ThemeMode};
//!
//! let mut session = StudioSession::new(StudioConfig::default()).unwrap();
//! let view = session.set_mode(ThemeMode::Dark);
//! assert_eq!(view.palette.len(), 5);
//! assert_eq!(view.status, "Switched to Dark Mode");
//! ```

use crate::analysis::{analyze_palette, PaletteReport};
use crate::config::{StudioConfig, WcagTarget};
use crate::error::{EngineError, Result};
use crate::palette::Palette;
use crate::scheme::{default_custom_palette, generate, SchemeKind};
use crate::source::{vary_color, BaseColorSource};
use crate::variant::{derive_variant, ThemeMode};
use color_science::{is_valid_hex, Color, VisionDeficiency, FALLBACK_BASE};

const READY: &str = "Ready";

/// Everything a front end renders after an action
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    /// Mode the palette is shown in
    pub mode: ThemeMode,
    /// Palette for the mode, before enforcement
    pub palette: Palette,
    /// Per-slot contrast report for `palette`
    pub report: PaletteReport,
    /// Final colors: enforced when enabled, then run through the vision preview
    pub preview: Palette,
    /// One-line status message
    pub status: String,
}

/// Palette state owned by a caller
#[derive(Debug, Clone, PartialEq)]
pub struct StudioSession {
    config: StudioConfig,
    light_palette: Palette,
    status: String,
}

impl StudioSession {
    /// Create a session and generate its first palette
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid or asks for a degenerate
    /// scheme.
    pub fn new(config: StudioConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self {
            config,
            light_palette: Palette::default(),
            status: READY.to_string(),
        };
        session.rebuild()?;
        Ok(session)
    }

    /// Current configuration
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Palette as generated, before any variant
    pub fn light_palette(&self) -> &Palette {
        &self.light_palette
    }

    /// Latest status message
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Palette for the active mode
    pub fn current_palette(&self) -> Palette {
        if self.config.mode.is_dark() && self.config.auto_adjust_dark {
            derive_variant(&self.light_palette, ThemeMode::Dark)
        } else {
            self.light_palette.clone()
        }
    }

    /// Snapshot for rendering
    pub fn view(&self) -> SessionView {
        let palette = self.current_palette();
        let report = analyze_palette(&palette, &self.config.analysis_options());
        let preview = report.adjusted_palette().simulate(self.config.vision);

        SessionView {
            mode: self.config.mode,
            palette,
            report,
            preview,
            status: self.status.clone(),
        }
    }

    /// Rebuild the light palette from the configuration
    ///
    /// On error the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DegenerateRequest`] when the count is too
    /// small for the scheme.
    pub fn regenerate(&mut self) -> Result<SessionView> {
        self.update(|_| {})
    }

    /// Apply `change`, then rebuild; a failed rebuild restores the prior state
    fn update(&mut self, change: impl FnOnce(&mut Self)) -> Result<SessionView> {
        let snapshot = self.clone();
        change(self);
        match self.rebuild() {
            Ok(view) => Ok(view),
            Err(err) => {
                tracing::debug!("Keeping previous session state: {}", err);
                *self = snapshot;
                Err(err)
            }
        }
    }

    fn rebuild(&mut self) -> Result<SessionView> {
        let mut status = READY.to_string();

        if self.config.scheme == SchemeKind::Custom {
            if self.light_palette.is_empty() {
                self.light_palette = default_custom_palette();
            }
            self.config.count = self.light_palette.len();
            self.status = status;
            return Ok(self.view());
        }

        if !is_valid_hex(&self.config.base_color) {
            tracing::warn!(
                "Invalid base color {:?}, resetting to {}",
                self.config.base_color,
                FALLBACK_BASE
            );
            self.config.base_color = FALLBACK_BASE.to_hex();
            status = "Invalid hex color! Using default color.".to_string();
        }

        let scheme = generate(&self.config.base_color, self.config.scheme, self.config.count)?;
        if let Some(count) = scheme.fixed_count() {
            self.config.count = count;
        }
        if let Some(notice) = scheme.notice() {
            status = notice;
        }

        tracing::debug!(
            "Regenerated {} palette from {} with {} colors",
            self.config.scheme,
            self.config.base_color,
            scheme.palette.len()
        );

        self.light_palette = scheme.palette;
        self.status = status;
        Ok(self.view())
    }

    /// Change the base color and regenerate
    ///
    /// # Errors
    ///
    /// See [`StudioSession::regenerate`].
    pub fn set_base_color(&mut self, hex: &str) -> Result<SessionView> {
        let hex = hex.trim().to_string();
        self.update(|s| s.config.base_color = hex)
    }

    /// Change the scheme and regenerate
    ///
    /// Switching to Custom keeps the colors currently shown.
    ///
    /// # Errors
    ///
    /// See [`StudioSession::regenerate`].
    pub fn set_scheme(&mut self, scheme: SchemeKind) -> Result<SessionView> {
        self.update(|s| s.config.scheme = scheme)
    }

    /// Change the requested count and regenerate
    ///
    /// # Errors
    ///
    /// See [`StudioSession::regenerate`].
    pub fn set_count(&mut self, count: usize) -> Result<SessionView> {
        if count == 0 {
            return Err(EngineError::InvalidConfig("count must be at least 1".to_string()));
        }
        self.update(|s| s.config.count = count)
    }

    /// Show caller-supplied colors as a Custom palette
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] for an empty palette.
    pub fn load_custom(&mut self, palette: Palette) -> Result<SessionView> {
        if palette.is_empty() {
            return Err(EngineError::InvalidConfig("custom palette is empty".to_string()));
        }
        self.update(|s| {
            if let Some(first) = palette.get(0) {
                s.config.base_color = first.to_hex();
            }
            s.config.scheme = SchemeKind::Custom;
            s.light_palette = palette;
        })
    }

    /// Switch between light and dark mode
    pub fn set_mode(&mut self, mode: ThemeMode) -> SessionView {
        self.config.mode = mode;
        self.status = format!("Switched to {}", mode);
        self.view()
    }

    /// Change the vision preview
    pub fn set_vision(&mut self, vision: VisionDeficiency) -> SessionView {
        self.config.vision = vision;
        self.status = match vision {
            VisionDeficiency::None => READY.to_string(),
            other => format!("Previewing palette as seen with {}", other),
        };
        self.view()
    }

    /// Change the contrast tier
    pub fn set_wcag_target(&mut self, target: WcagTarget) -> SessionView {
        self.config.wcag_target = target;
        self.view()
    }

    /// Turn compliance enforcement on or off
    pub fn set_enforce_compliance(&mut self, enforce: bool) -> SessionView {
        self.config.enforce_compliance = enforce;
        self.view()
    }

    /// Pick a random base color and regenerate
    ///
    /// # Errors
    ///
    /// See [`StudioSession::regenerate`].
    pub fn randomize_base(&mut self, source: &mut dyn BaseColorSource) -> Result<SessionView> {
        let base = source.random_color().to_hex();
        self.update(|s| s.config.base_color = base)
    }

    /// Nudge the base color slightly so a new palette is visibly different
    ///
    /// An unreadable base is varied from black.
    ///
    /// # Errors
    ///
    /// See [`StudioSession::regenerate`].
    pub fn vary_base(&mut self, source: &mut dyn BaseColorSource) -> Result<SessionView> {
        let old = self.config.base_color.clone();
        let varied = vary_color(Color::from_hex_lossy(&old), source);

        self.update(|s| s.config.base_color = varied.to_hex())?;
        self.status = format!(
            "New palette generated! Base color slightly varied from {} to {}",
            old, varied
        );
        Ok(self.view())
    }
}
