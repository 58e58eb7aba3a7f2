use clap::Parser;
use enhancer_core::PageConfig;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use wasm_bindgen::prelude::*;

mod copy;
mod highlight;
mod theme;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    /// Flags come from the location hash, e.g. `#-vv`. Pages also use the hash
    /// for plain anchors, which fall back to the defaults.
    fn from_location() -> (Self, Option<clap::Error>) {
        let location_hash = window()
            .location()
            .hash()
            .unwrap_or_else(|_| "".to_string());
        match Self::try_parse_from(location_hash.split(['#', '&'])) {
            Ok(args) => (args, None),
            Err(err) => (
                Self {
                    verbose: Default::default(),
                },
                Some(err),
            ),
        }
    }
}

/// Reads the optional JSON overrides embedded in the page.
fn load_config() -> PageConfig {
    let Some(element) = document().get_element_by_id(PageConfig::ELEMENT_ID) else {
        return PageConfig::default();
    };
    let json = element.text_content().unwrap_or_default();
    PageConfig::from_json(&json).unwrap_or_else(|err| {
        log::error!("ignoring #{}: {}", PageConfig::ELEMENT_ID, err);
        PageConfig::default()
    })
}

/// Runs the three page behaviors. None depends on another, so a failure in
/// one is logged and the rest still run.
fn enhance_page(config: &PageConfig) {
    match highlight::highlight_code_blocks(config) {
        Ok(count) => log::debug!("highlight pass done ({} blocks)", count),
        Err(err) => log::error!("highlight pass failed: {}", err),
    }

    let theme = theme::init_theme(config);
    log::debug!("theme ready: {}", theme.borrow().get().scheme());

    match copy::bind_copy_buttons(config) {
        Ok(count) => log::debug!("{} copy buttons bound", count),
        Err(err) => log::error!("copy buttons not bound: {}", err),
    }
}

fn when_document_ready(callback: impl FnOnce() + 'static) {
    let document = document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| callback()).forget();
    } else {
        callback();
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let (args, arg_error) = Args::from_location();
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = arg_error {
        log::debug!("location hash is not a flag list: {}", err);
    }

    when_document_ready(|| {
        let config = load_config();
        log::debug!("page config: {:?}", config);
        enhance_page(&config);
        log::info!("Page enhanced");
    });
}
