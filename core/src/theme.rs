use crate::error::Result;
use alloc::string::String;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Dark => "dark",
            Light => "light",
        }
    }

    /// Resolve a stored preference. Nothing stored, or an empty string, means
    /// dark; anything else that is not exactly `"dark"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// Resolve the value currently applied on the document root. Only an
    /// explicit `"dark"` counts as dark.
    pub fn from_applied(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Dark => Light,
            Light => Dark,
        }
    }

    pub const fn icon(self) -> &'static str {
        use Theme::*;
        match self {
            Dark => "🌙",
            Light => "☀️",
        }
    }

    /// Outline class swap for the toggle button, as `(from, to)`.
    pub const fn button_classes(self) -> (&'static str, &'static str) {
        use Theme::*;
        match self {
            Dark => ("btn-outline-dark", "btn-outline-light"),
            Light => ("btn-outline-light", "btn-outline-dark"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

/// String key/value store surviving page loads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Whatever displays the theme: the document root and the toggle affordance.
pub trait ThemeSurface {
    fn render(&mut self, theme: Theme) -> Result<()>;
}

/// Owns the current theme. Rendering and persistence are injected, so the
/// controller is the only place the theme value lives.
pub struct ThemeController<S, V> {
    current: Theme,
    key: String,
    store: S,
    surface: V,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    /// Reads the stored preference and applies it. Failing to apply is
    /// logged; the controller still holds the resolved theme.
    pub fn load(store: S, surface: V, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = store.get(&key);
        let current = Theme::from_stored(stored.as_deref());
        log::debug!("stored theme {:?} resolved to {}", stored, current.scheme());
        let mut controller = Self {
            current,
            key,
            store,
            surface,
        };
        if let Err(err) = controller.set(current) {
            log::error!("failed to apply theme: {}", err);
        }
        controller
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// Renders first, then persists. A failed render keeps the previous
    /// theme; a failed write leaves the rendered theme in place.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.surface.render(theme)?;
        self.current = theme;
        self.store.set(&self.key, theme.scheme())
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }

    /// Brings the controller in line with a theme applied outside of it, e.g.
    /// the root attribute read back from the document.
    pub fn sync(&mut self, applied: Theme) {
        self.current = applied;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnhancerError;
    use alloc::collections::BTreeMap;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct MemoryStore {
        items: BTreeMap<String, String>,
        writes: usize,
        read_only: bool,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let mut store = Self::default();
            store.items.insert(key.to_string(), value.to_string());
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if self.read_only {
                return Err(EnhancerError::Browser("QuotaExceededError".to_string()));
            }
            self.writes += 1;
            self.items.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder {
        rendered: Vec<Theme>,
        detached: bool,
    }

    impl ThemeSurface for Recorder {
        fn render(&mut self, theme: Theme) -> Result<()> {
            if self.detached {
                return Err(EnhancerError::Browser("InvalidCharacterError".to_string()));
            }
            self.rendered.push(theme);
            Ok(())
        }
    }

    fn stored(controller: &ThemeController<MemoryStore, Recorder>) -> Option<String> {
        controller.store().get("theme")
    }

    #[test]
    fn empty_store_defaults_to_dark_and_persists_it() {
        let controller = ThemeController::load(MemoryStore::default(), Recorder::default(), "theme");

        assert_eq!(controller.get(), Theme::Dark);
        assert_eq!(controller.surface().rendered, [Theme::Dark]);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
    }

    #[test]
    fn empty_stored_value_falls_back_to_dark() {
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);

        let store = MemoryStore::with("theme", "");
        let controller = ThemeController::load(store, Recorder::default(), "theme");

        assert_eq!(controller.get(), Theme::Dark);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
    }

    #[test]
    fn failed_render_keeps_previous_theme() {
        let mut controller =
            ThemeController::load(MemoryStore::default(), Recorder::default(), "theme");
        controller.surface.detached = true;

        assert!(matches!(controller.toggle(), Err(EnhancerError::Browser(_))));
        assert_eq!(controller.get(), Theme::Dark);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
    }

    #[test]
    fn stored_light_is_applied() {
        let store = MemoryStore::with("theme", "light");
        let controller = ThemeController::load(store, Recorder::default(), "theme");

        assert_eq!(controller.get(), Theme::Light);
        assert_eq!(controller.surface().rendered, [Theme::Light]);
    }

    #[test]
    fn unknown_stored_value_renders_light() {
        let store = MemoryStore::with("theme", "solarized");
        let controller = ThemeController::load(store, Recorder::default(), "theme");

        assert_eq!(controller.get(), Theme::Light);
        assert_eq!(stored(&controller).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_scenario_round_trips() {
        let mut controller = ThemeController::load(MemoryStore::default(), Recorder::default(), "theme");

        assert_eq!(controller.toggle().unwrap(), Theme::Light);
        assert_eq!(stored(&controller).as_deref(), Some("light"));

        assert_eq!(controller.toggle().unwrap(), Theme::Dark);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
        assert_eq!(controller.surface().rendered, [Theme::Dark, Theme::Light, Theme::Dark]);
        assert_eq!(controller.store().writes, 3);
    }

    #[test]
    fn toggle_follows_synced_theme() {
        let mut controller = ThemeController::load(MemoryStore::default(), Recorder::default(), "theme");
        controller.sync(Theme::Light);

        assert_eq!(controller.toggle().unwrap(), Theme::Dark);
    }

    #[test]
    fn failed_write_keeps_rendered_theme() {
        let store = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };

        let mut controller = ThemeController::load(store, Recorder::default(), "theme");

        assert_eq!(controller.get(), Theme::Dark);
        assert_eq!(controller.surface().rendered, [Theme::Dark]);
        assert_eq!(stored(&controller), None);

        assert!(matches!(controller.toggle(), Err(EnhancerError::Browser(_))));
        assert_eq!(controller.get(), Theme::Light);
        assert_eq!(controller.surface().rendered, [Theme::Dark, Theme::Light]);
    }

    #[test]
    fn applied_attribute_without_dark_counts_as_light() {
        assert_eq!(Theme::from_applied(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_applied(Some("light")), Theme::Light);
        assert_eq!(Theme::from_applied(None).toggled(), Theme::Dark);
    }

    #[test]
    fn affordance_table() {
        assert_eq!(Theme::Dark.icon(), "🌙");
        assert_eq!(Theme::Light.icon(), "☀️");
        assert_eq!(Theme::Dark.button_classes(), ("btn-outline-dark", "btn-outline-light"));
        assert_eq!(Theme::Light.button_classes(), ("btn-outline-light", "btn-outline-dark"));
    }
}
