use std::fmt;
use std::rc::Rc;

use crate::actions::Command;
use crate::analytics::{self, EventReporter, StandardEvent};
use crate::state::ViewState;

/// What the page should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The browser follows the link on its own; nothing left to do here.
    FollowLink(String),
    /// The overlay was just dismissed and the page must re-render.
    EntryGranted,
    Unchanged,
}

/// Single interpreter for every command the page emits.
#[derive(Clone)]
pub struct Dispatcher {
    reporter: Rc<dyn EventReporter>,
}

impl Dispatcher {
    pub fn new(reporter: Rc<dyn EventReporter>) -> Self {
        Self { reporter }
    }

    pub fn dispatch(&self, state: &mut ViewState, command: &Command) -> Outcome {
        log::debug!("dispatching {:?}", command);
        match command {
            Command::Navigate(url) => Outcome::FollowLink(url.clone()),
            Command::ReportThenNavigate(event, url) => {
                analytics::report(self.reporter.as_ref(), event);
                Outcome::FollowLink(url.clone())
            }
            Command::DismissOverlay => {
                if !state.overlay_visible() {
                    return Outcome::Unchanged;
                }
                self.reporter.report_standard(StandardEvent::Lead);
                state.grant_entry();
                log::info!("entry granted");
                Outcome::EntryGranted
            }
        }
    }
}

impl PartialEq for Dispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.reporter, &other.reporter)
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
