//! Best-effort interaction tracking.
//!
//! Reporting never returns anything to the caller: tracking must not be able
//! to block or alter the action that triggered it.

mod agent;

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::config::{AnalyticsSettings, PolicyKind};

pub use agent::{AgentError, AgentMethod, AgentReporter, AnalyticsAgent, PixelAgent};

/// Events the collector recognises for its built-in optimisation.
///
/// The set is closed, so reporting anything else is a compile error:
///
/// ```compile_fail
/// use prestige_frontend::analytics::StandardEvent;
/// let _ = StandardEvent::Purchase;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardEvent {
    Contact,
    ViewContent,
    Lead,
}

impl StandardEvent {
    pub fn name(self) -> &'static str {
        match self {
            StandardEvent::Contact => "Contact",
            StandardEvent::ViewContent => "ViewContent",
            StandardEvent::Lead => "Lead",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("custom event name must not be empty")]
    EmptyName,
}

/// Free-form event reported through the custom channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomEvent(String);

impl CustomEvent {
    pub fn new(name: impl Into<String>) -> Result<Self, EventError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn instagram_click() -> Self {
        Self("InstagramClick".to_string())
    }

    pub fn policy_view(kind: PolicyKind) -> Self {
        Self(format!("PolicyView_{}", kind.label()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    Standard(StandardEvent),
    Custom(CustomEvent),
}

impl InteractionEvent {
    #[cfg(test)]
    pub(crate) fn name(&self) -> &str {
        match self {
            InteractionEvent::Standard(event) => event.name(),
            InteractionEvent::Custom(event) => event.name(),
        }
    }
}

impl From<StandardEvent> for InteractionEvent {
    fn from(event: StandardEvent) -> Self {
        InteractionEvent::Standard(event)
    }
}

impl From<CustomEvent> for InteractionEvent {
    fn from(event: CustomEvent) -> Self {
        InteractionEvent::Custom(event)
    }
}

/// Sink for interaction events. Implementations must never panic and never
/// block on delivery.
#[cfg_attr(test, mockall::automock)]
pub trait EventReporter {
    fn report_standard(&self, event: StandardEvent);
    fn report_custom(&self, event: &CustomEvent);
}

/// Reporter used when no collector is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl EventReporter for NoopReporter {
    fn report_standard(&self, _event: StandardEvent) {}
    fn report_custom(&self, _event: &CustomEvent) {}
}

pub fn report(reporter: &dyn EventReporter, event: &InteractionEvent) {
    match event {
        InteractionEvent::Standard(event) => reporter.report_standard(*event),
        InteractionEvent::Custom(event) => reporter.report_custom(event),
    }
}

/// Picks the browser pixel when analytics is enabled, the no-op otherwise.
pub fn reporter_for(settings: &AnalyticsSettings) -> Rc<dyn EventReporter> {
    if settings.enabled {
        log::info!("analytics reporting through window.{}", settings.global_name);
        Rc::new(AgentReporter::new(PixelAgent::new(&settings.global_name)))
    } else {
        log::info!("analytics disabled, events are dropped");
        Rc::new(NoopReporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn standard_event_names() {
        assert_eq!(StandardEvent::Contact.name(), "Contact");
        assert_eq!(StandardEvent::ViewContent.name(), "ViewContent");
        assert_eq!(StandardEvent::Lead.name(), "Lead");
    }

    #[test]
    fn custom_event_rejects_blank_names() {
        assert_eq!(CustomEvent::new(""), Err(EventError::EmptyName));
        assert_eq!(CustomEvent::new("   "), Err(EventError::EmptyName));
        assert_eq!(CustomEvent::new("Scroll75").unwrap().name(), "Scroll75");
    }

    #[test]
    fn policy_view_names_use_the_label() {
        assert_eq!(CustomEvent::policy_view(PolicyKind::Privacy).name(), "PolicyView_Privacy");
        assert_eq!(CustomEvent::policy_view(PolicyKind::Refund).name(), "PolicyView_Refund");
        assert_eq!(CustomEvent::instagram_click().to_string(), "InstagramClick");
    }

    #[test]
    fn report_routes_by_kind() {
        let mut reporter = MockEventReporter::new();
        reporter
            .expect_report_standard()
            .with(eq(StandardEvent::ViewContent))
            .times(1)
            .return_const(());
        reporter
            .expect_report_custom()
            .withf(|event| event.name() == "InstagramClick")
            .times(1)
            .return_const(());

        report(&reporter, &StandardEvent::ViewContent.into());
        report(&reporter, &CustomEvent::instagram_click().into());
    }

    #[test]
    fn noop_reporter_accepts_everything() {
        let reporter = NoopReporter;
        reporter.report_standard(StandardEvent::Lead);
        reporter.report_custom(&CustomEvent::instagram_click());
    }

    #[test]
    fn disabled_settings_select_the_noop_reporter() {
        let settings = AnalyticsSettings {
            enabled: false,
            global_name: String::new(),
        };
        let reporter = reporter_for(&settings);
        reporter.report_standard(StandardEvent::Contact);
    }
}
