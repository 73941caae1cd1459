use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

use super::{CustomEvent, EventReporter, StandardEvent};

/// First argument handed to the agent function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMethod {
    Track,
    TrackCustom,
}

impl AgentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentMethod::Track => "track",
            AgentMethod::TrackCustom => "trackCustom",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("analytics agent `{0}` is not available")]
    Absent(String),
    #[error("analytics agent threw: {0}")]
    Threw(String),
}

/// A callable analytics agent, e.g. a tracking pixel.
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsAgent {
    fn invoke(&self, method: AgentMethod, event_name: &str) -> Result<(), AgentError>;
}

/// Forwards events to an agent and swallows every failure.
pub struct AgentReporter<A> {
    agent: A,
}

impl<A: AnalyticsAgent> AgentReporter<A> {
    pub fn new(agent: A) -> Self {
        Self { agent }
    }
}

impl<A: AnalyticsAgent> EventReporter for AgentReporter<A> {
    fn report_standard(&self, event: StandardEvent) {
        let _ = self.agent.invoke(AgentMethod::Track, event.name());
    }

    fn report_custom(&self, event: &CustomEvent) {
        let _ = self.agent.invoke(AgentMethod::TrackCustom, event.name());
    }
}

/// Agent backed by a global function on `window` (`fbq` for the Meta pixel).
///
/// The global is resolved on every call because the tracking snippet may load
/// after the app mounts, or never.
#[derive(Debug, Clone)]
pub struct PixelAgent {
    global_name: String,
}

impl PixelAgent {
    pub fn new(global_name: &str) -> Self {
        Self {
            global_name: global_name.to_string(),
        }
    }

    fn resolve(&self) -> Option<Function> {
        let window = web_sys::window()?;
        let handle = Reflect::get(&window, &JsValue::from_str(&self.global_name)).ok()?;
        handle.dyn_into::<Function>().ok()
    }
}

impl AnalyticsAgent for PixelAgent {
    fn invoke(&self, method: AgentMethod, event_name: &str) -> Result<(), AgentError> {
        let agent = self
            .resolve()
            .ok_or_else(|| AgentError::Absent(self.global_name.clone()))?;
        agent
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(method.as_str()),
                &JsValue::from_str(event_name),
            )
            .map(|_| ())
            .map_err(|err| AgentError::Threw(format!("{:?}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_events_use_track() {
        let mut agent = MockAnalyticsAgent::new();
        agent
            .expect_invoke()
            .withf(|method, name| *method == AgentMethod::Track && name == "ViewContent")
            .times(1)
            .returning(|_, _| Ok(()));

        AgentReporter::new(agent).report_standard(StandardEvent::ViewContent);
    }

    #[test]
    fn custom_events_use_track_custom() {
        let mut agent = MockAnalyticsAgent::new();
        agent
            .expect_invoke()
            .withf(|method, name| *method == AgentMethod::TrackCustom && name == "PolicyView_Terms")
            .times(1)
            .returning(|_, _| Ok(()));

        AgentReporter::new(agent)
            .report_custom(&CustomEvent::policy_view(crate::config::PolicyKind::Terms));
    }

    #[test]
    fn absent_agent_is_swallowed() {
        let mut agent = MockAnalyticsAgent::new();
        agent
            .expect_invoke()
            .times(2)
            .returning(|_, _| Err(AgentError::Absent("fbq".into())));

        let reporter = AgentReporter::new(agent);
        reporter.report_standard(StandardEvent::Lead);
        reporter.report_custom(&CustomEvent::instagram_click());
    }

    #[test]
    fn throwing_agent_is_swallowed() {
        let mut agent = MockAnalyticsAgent::new();
        agent
            .expect_invoke()
            .times(1)
            .returning(|_, _| Err(AgentError::Threw("TypeError: fbq is broken".into())));

        AgentReporter::new(agent).report_custom(&CustomEvent::instagram_click());
    }

    #[test]
    fn method_strings() {
        assert_eq!(AgentMethod::Track.as_str(), "track");
        assert_eq!(AgentMethod::TrackCustom.as_str(), "trackCustom");
    }
}
