use crate::utils::*;
use enhancer_core as enhancer;
use enhancer::{EnhancerError, PageConfig, PreferenceStore, Theme, ThemeController, ThemeSurface};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

pub(crate) type PageTheme = ThemeController<LocalStore, DomTheme>;

/// Plain strings in `localStorage`, not JSON.
///
/// Blocked cookies or a sandboxed frame leave the page without storage; reads
/// then find nothing and writes fail without throwing.
pub(crate) struct LocalStore(Option<web_sys::Storage>);

impl LocalStore {
    pub(crate) fn open() -> Self {
        Self(gloo::utils::window().local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> enhancer::Result<()> {
        let storage = self
            .0
            .as_ref()
            .ok_or_else(|| EnhancerError::Browser("localStorage is unavailable".into()))?;
        storage.set_item(key, value).map_err(js_error)
    }
}

pub(crate) struct ThemeControls {
    toggle: Element,
    icon: Element,
}

impl ThemeControls {
    fn find(config: &PageConfig) -> enhancer::Result<Self> {
        Ok(Self {
            toggle: element_by_id(&config.theme_toggle_id)?,
            icon: element_by_id(&config.theme_icon_id)?,
        })
    }
}

/// The document root attribute plus, when the page has them, the toggle
/// button and its icon.
pub(crate) struct DomTheme {
    root: Element,
    attribute: String,
    controls: Option<ThemeControls>,
}

impl DomTheme {
    /// Theme currently applied on the root, which is what a toggle flips.
    pub(crate) fn applied(&self) -> Theme {
        Theme::from_applied(self.root.get_attribute(&self.attribute).as_deref())
    }
}

impl ThemeSurface for DomTheme {
    fn render(&mut self, theme: Theme) -> enhancer::Result<()> {
        let scheme = theme.scheme();
        log::debug!("theme-scheme: {}", scheme);
        self.root
            .set_attribute(&self.attribute, scheme)
            .map_err(js_error)?;

        if let Some(controls) = &self.controls {
            let (from, to) = theme.button_classes();
            controls
                .toggle
                .class_list()
                .replace(from, to)
                .map_err(js_error)?;
            controls.icon.set_text_content(Some(theme.icon()));
        }
        Ok(())
    }
}

/// Applies the stored theme and wires the toggle button.
///
/// The toggle and its icon are both required for the button to work. When one
/// is missing the theme is still applied to the root and persisted.
pub(crate) fn init_theme(config: &PageConfig) -> Rc<RefCell<PageTheme>> {
    init_theme_with(config, LocalStore::open())
}

fn init_theme_with(config: &PageConfig, store: LocalStore) -> Rc<RefCell<PageTheme>> {
    let controls = match ThemeControls::find(config) {
        Ok(controls) => Some(controls),
        Err(err) => {
            log::warn!("theme toggle disabled: {}", err);
            None
        }
    };
    let toggle = controls.as_ref().map(|controls| controls.toggle.clone());

    let surface = DomTheme {
        root: gloo::utils::document_element(),
        attribute: config.theme_attribute.clone(),
        controls,
    };
    let theme = Rc::new(RefCell::new(ThemeController::load(
        store,
        surface,
        config.theme_storage_key.clone(),
    )));

    if let Some(toggle) = toggle {
        let theme = theme.clone();
        EventListener::new(&toggle, "click", move |_| {
            let mut theme = theme.borrow_mut();
            let applied = theme.surface().applied();
            theme.sync(applied);
            match theme.toggle() {
                Ok(next) => log::info!("theme switched to {}", next.scheme()),
                Err(err) => log::error!("failed to switch theme: {}", err),
            }
        })
        .forget();
    }

    theme
}
