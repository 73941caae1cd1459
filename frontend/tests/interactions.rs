use std::rc::Rc;

use mockall::mock;
use prestige_frontend::actions::{Bindings, Command, Element};
use prestige_frontend::analytics::{
    AgentError, AgentMethod, AgentReporter, AnalyticsAgent, CustomEvent, EventReporter,
    NoopReporter, StandardEvent,
};
use prestige_frontend::config::{ChannelKey, SiteConfig};
use prestige_frontend::dispatcher::{Dispatcher, Outcome};
use prestige_frontend::state::{EntryGate, ViewState};

mock! {
    Agent {}
    impl AnalyticsAgent for Agent {
        fn invoke(&self, method: AgentMethod, event_name: &str) -> Result<(), AgentError>;
    }
}

mock! {
    Reporter {}
    impl EventReporter for Reporter {
        fn report_standard(&self, event: StandardEvent);
        fn report_custom(&self, event: &CustomEvent);
    }
}

struct Page {
    config: SiteConfig,
    bindings: Bindings,
    dispatcher: Dispatcher,
    state: ViewState,
}

impl Page {
    fn with_reporter(reporter: Rc<dyn EventReporter>) -> Self {
        let config = SiteConfig::load().expect("compiled config is valid");
        let bindings = Bindings::new(&config);
        Self {
            config,
            bindings,
            dispatcher: Dispatcher::new(reporter),
            state: ViewState::default(),
        }
    }

    fn with_agent(agent: MockAgent) -> Self {
        Self::with_reporter(Rc::new(AgentReporter::new(agent)))
    }

    fn activate(&mut self, element: Element) -> Outcome {
        let command = self.bindings.command(element).expect("element is bound");
        self.dispatcher.dispatch(&mut self.state, &command)
    }
}

#[test]
fn sticky_whatsapp_tracks_contact_and_opens_whatsapp() {
    let mut agent = MockAgent::new();
    agent
        .expect_invoke()
        .withf(|method, name| *method == AgentMethod::Track && name == "Contact")
        .times(1)
        .returning(|_, _| Ok(()));

    let mut page = Page::with_agent(agent);
    let outcome = page.activate(Element::StickyWhatsApp);

    let whatsapp = page.config.destinations.url(ChannelKey::WhatsApp).to_string();
    assert_eq!(outcome, Outcome::FollowLink(whatsapp));
}

#[test]
fn instagram_tracks_only_the_custom_event() {
    let mut agent = MockAgent::new();
    agent
        .expect_invoke()
        .withf(|method, name| *method == AgentMethod::TrackCustom && name == "InstagramClick")
        .times(1)
        .returning(|_, _| Ok(()));
    agent
        .expect_invoke()
        .withf(|method, _| *method == AgentMethod::Track)
        .never();

    let mut page = Page::with_agent(agent);
    page.activate(Element::ConciergeInstagram);
}

#[test]
fn throwing_agent_does_not_affect_navigation() {
    let mut agent = MockAgent::new();
    agent
        .expect_invoke()
        .times(1)
        .returning(|_, _| Err(AgentError::Threw("ReferenceError".into())));

    let mut page = Page::with_agent(agent);
    let outcome = page.activate(Element::ConciergeInstagram);

    let instagram = page.config.destinations.url(ChannelKey::Instagram).to_string();
    assert_eq!(outcome, Outcome::FollowLink(instagram));
    assert!(page.state.overlay_visible());
}

#[test]
fn request_entry_tracks_lead_once_and_never_reopens() {
    let mut agent = MockAgent::new();
    agent
        .expect_invoke()
        .withf(|method, name| *method == AgentMethod::Track && name == "Lead")
        .times(1)
        .returning(|_, _| Ok(()));
    agent
        .expect_invoke()
        .withf(|_, name| name == "Contact")
        .times(1)
        .returning(|_, _| Ok(()));

    let mut page = Page::with_agent(agent);
    assert_eq!(page.state.gate(), EntryGate::Gated);

    assert_eq!(page.activate(Element::RequestEntry), Outcome::EntryGranted);
    assert_eq!(page.state.gate(), EntryGate::Granted);

    assert_eq!(page.activate(Element::RequestEntry), Outcome::Unchanged);
    page.activate(Element::ConciergeWhatsApp);
    assert_eq!(page.state.gate(), EntryGate::Granted);
    assert!(!page.state.overlay_visible());
}

#[test]
fn absent_agent_changes_nothing() {
    let mut agent = MockAgent::new();
    agent
        .expect_invoke()
        .returning(|_, _| Err(AgentError::Absent("fbq".into())));

    let mut page = Page::with_agent(agent);
    for element in [
        Element::CatalogCard,
        Element::ConciergeWhatsApp,
        Element::ConciergeArchive,
    ] {
        assert!(matches!(page.activate(element), Outcome::FollowLink(_)));
    }
    assert_eq!(page.state, ViewState::default());

    assert_eq!(page.activate(Element::RequestEntry), Outcome::EntryGranted);
}

#[test]
fn noop_reporter_still_grants_entry() {
    let mut page = Page::with_reporter(Rc::new(NoopReporter));
    assert_eq!(page.activate(Element::RequestEntry), Outcome::EntryGranted);
    assert_eq!(page.state.gate(), EntryGate::Granted);
}

#[test]
fn telegram_reports_nothing() {
    let mut reporter = MockReporter::new();
    reporter.expect_report_standard().never();
    reporter.expect_report_custom().never();

    let mut page = Page::with_reporter(Rc::new(reporter));
    let outcome = page.activate(Element::ConciergeTelegram);
    assert_eq!(
        outcome,
        Outcome::FollowLink(page.config.destinations.url(ChannelKey::Telegram).to_string())
    );
}

#[test]
fn catalog_entry_points_report_view_content() {
    let mut reporter = MockReporter::new();
    reporter
        .expect_report_standard()
        .withf(|event| *event == StandardEvent::ViewContent)
        .times(2)
        .return_const(());
    reporter.expect_report_custom().never();

    let mut page = Page::with_reporter(Rc::new(reporter));
    let catalog = page.config.destinations.url(ChannelKey::Catalog).to_string();
    assert_eq!(page.activate(Element::CatalogCard), Outcome::FollowLink(catalog.clone()));
    assert_eq!(page.activate(Element::ConciergeArchive), Outcome::FollowLink(catalog));
}

#[test]
fn policy_links_report_their_view_and_open_the_document() {
    use prestige_frontend::config::{PolicyKind, RegistryKey};

    let mut reporter = MockReporter::new();
    reporter.expect_report_standard().never();
    reporter
        .expect_report_custom()
        .withf(|event| event.name().starts_with("PolicyView_"))
        .times(PolicyKind::ALL.len())
        .return_const(());

    let mut page = Page::with_reporter(Rc::new(reporter));
    for kind in PolicyKind::ALL {
        let expected = page.config.policies.as_ref().unwrap().url(*kind).to_string();
        assert_eq!(
            page.activate(Element::PolicyLink(*kind)),
            Outcome::FollowLink(expected)
        );
    }
}

#[test]
fn dismiss_command_is_the_only_state_change() {
    let mut page = Page::with_reporter(Rc::new(NoopReporter));
    let command = Command::Navigate("https://goolata.com".into());
    page.dispatcher.dispatch(&mut page.state, &command);
    assert!(page.state.overlay_visible());
}
