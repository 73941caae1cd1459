pub mod actions;
pub mod analytics;
pub mod components;
pub mod config;
pub mod dispatcher;
pub mod pages;
pub mod state;

use std::rc::Rc;

use yew::prelude::*;

use crate::actions::{Bindings, Command};
use crate::config::SiteConfig;
use crate::dispatcher::{Dispatcher, Outcome};
use crate::pages::landing::Landing;
use crate::state::ViewState;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
    pub dispatcher: Dispatcher,
}

/// Root component. Owns the view state and is the only place commands are
/// dispatched from.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let view_state = use_mut_ref(ViewState::default);
    let force_update = use_force_update();
    let bindings = use_memo(|config| Bindings::new(config), props.config.clone());

    let on_command = {
        let dispatcher = props.dispatcher.clone();
        let view_state = view_state.clone();
        Callback::from(move |command: Command| {
            let outcome = dispatcher.dispatch(&mut view_state.borrow_mut(), &command);
            if outcome == Outcome::EntryGranted {
                force_update.force_update();
            }
        })
    };

    let overlay_visible = view_state.borrow().overlay_visible();

    html! {
        <Landing
            config={props.config.clone()}
            bindings={bindings}
            overlay_visible={overlay_visible}
            on_command={on_command}
        />
    }
}
