//! What every actionable element on the page does, as plain data.

use crate::analytics::{CustomEvent, InteractionEvent, StandardEvent};
use crate::config::{ChannelKey, DestinationRegistry, PolicyKind, PolicyLinkRegistry, SiteConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    CatalogCard,
    ConciergeWhatsApp,
    ConciergeTelegram,
    ConciergeInstagram,
    ConciergeArchive,
    StickyWhatsApp,
    RequestEntry,
    PolicyLink(PolicyKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open an outbound destination without reporting anything.
    Navigate(String),
    /// Report once, then let the browser follow the link.
    ReportThenNavigate(InteractionEvent, String),
    /// Report `Lead` and close the welcome overlay.
    DismissOverlay,
}

impl Command {
    /// Link target for anchor elements.
    pub fn href(&self) -> Option<&str> {
        match self {
            Command::Navigate(url) | Command::ReportThenNavigate(_, url) => Some(url.as_str()),
            Command::DismissOverlay => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn event(&self) -> Option<InteractionEvent> {
        match self {
            Command::Navigate(_) => None,
            Command::ReportThenNavigate(event, _) => Some(event.clone()),
            Command::DismissOverlay => Some(StandardEvent::Lead.into()),
        }
    }
}

/// Resolves elements against the loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings {
    destinations: DestinationRegistry,
    policies: Option<PolicyLinkRegistry>,
}

impl Bindings {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            destinations: config.destinations.clone(),
            policies: config.visible_policies().cloned(),
        }
    }

    /// `None` only for policy links when the page has no policy table.
    pub fn command(&self, element: Element) -> Option<Command> {
        let command = match element {
            Element::CatalogCard | Element::ConciergeArchive => {
                self.tracked(ChannelKey::Catalog, StandardEvent::ViewContent)
            }
            Element::ConciergeWhatsApp | Element::StickyWhatsApp => {
                self.tracked(ChannelKey::WhatsApp, StandardEvent::Contact)
            }
            Element::ConciergeTelegram => {
                Command::Navigate(self.destinations.url(ChannelKey::Telegram).to_string())
            }
            Element::ConciergeInstagram => {
                self.tracked(ChannelKey::Instagram, CustomEvent::instagram_click())
            }
            Element::RequestEntry => Command::DismissOverlay,
            Element::PolicyLink(kind) => {
                let url = self.policies.as_ref()?.url(kind);
                Command::ReportThenNavigate(
                    CustomEvent::policy_view(kind).into(),
                    url.to_string(),
                )
            }
        };
        Some(command)
    }

    fn tracked(&self, key: ChannelKey, event: impl Into<InteractionEvent>) -> Command {
        Command::ReportThenNavigate(event.into(), self.destinations.url(key).to_string())
    }
}
