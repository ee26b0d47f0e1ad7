//! Runtime options read once from the page query string.
//!
//! `?animations=false&search_debounce_ms=150` overrides the defaults; a
//! malformed query keeps the defaults and logs a warning.

use anyhow::Context;
use contracts::shared::projector::{AnimationSpec, Easing};
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub search_debounce_ms: u32,
    pub animations: bool,
    pub frame_ms: u32,
    pub counter_duration_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            animations: true,
            frame_ms: 16,
            counter_duration_ms: 1200,
        }
    }
}

impl DashboardConfig {
    pub fn from_query(query: &str) -> anyhow::Result<Self> {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_qs::from_str(query)
            .with_context(|| format!("invalid dashboard options in query '{}'", query))?;
        Ok(config.sanitized())
    }

    /// Reads `window.location.search`; falls back to defaults on any error.
    pub fn load() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match Self::from_query(&search) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.frame_ms = self.frame_ms.max(1);
        self
    }

    /// Counter animation for stat cards. Disabled animations collapse to a
    /// single frame that already shows the target.
    pub fn counter_spec(&self) -> AnimationSpec {
        let duration = if self.animations {
            self.counter_duration_ms
        } else {
            0
        };
        AnimationSpec::new(duration, Easing::EaseOutCubic).with_frame(self.frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_query("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.search_debounce_ms, 300);
        assert!(config.animations);
    }

    #[test]
    fn test_partial_query() {
        let config = DashboardConfig::from_query("?animations=false&frame_ms=0").unwrap();
        assert!(!config.animations);
        assert_eq!(config.frame_ms, 1);
        assert_eq!(config.counter_duration_ms, 1200);
        assert_eq!(config.counter_spec().duration_ms, 0);
    }

    #[test]
    fn test_invalid_query() {
        assert!(DashboardConfig::from_query("search_debounce_ms=soon").is_err());
    }
}
