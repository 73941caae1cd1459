use std::rc::Rc;

use prestige_frontend::analytics;
use prestige_frontend::config::SiteConfig;
use prestige_frontend::dispatcher::Dispatcher;
use prestige_frontend::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid site configuration, not mounting: {}", e);
            return;
        }
    };

    let reporter = analytics::reporter_for(&config.analytics);
    log::info!("Mounting {} landing page", config.variant);

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        dispatcher: Dispatcher::new(reporter),
    })
    .render();
}
