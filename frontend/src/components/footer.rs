use yew::prelude::*;

use crate::actions::Command;
use crate::components::OutboundLink;
use crate::config::{ContactIdentity, PolicyKind};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub contact: Option<ContactIdentity>,
    #[prop_or_default]
    pub policy_links: Vec<(PolicyKind, Command)>,
    pub on_command: Callback<Command>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let contact = props.contact.as_ref().map(|contact| {
        html! {
            <div class="footer-contact flex flex-col items-center gap-1 mb-6">
                <a
                    href={contact.mailto_href()}
                    class="text-[11px] text-stone-500 tracking-widest underline underline-offset-4"
                >
                    <i class="fas fa-envelope mr-2"></i>
                    { contact.email().to_string() }
                </a>
                <span class="text-[10px] text-stone-400 tracking-widest">
                    <i class="fas fa-location-dot mr-2"></i>
                    { contact.location().to_string() }
                </span>
            </div>
        }
    });

    let policies = (!props.policy_links.is_empty()).then(|| {
        html! {
            <nav class="footer-policies flex flex-wrap justify-center gap-x-4 gap-y-2 mb-6">
                { for props.policy_links.iter().map(|(kind, command)| html! {
                    <OutboundLink
                        command={command.clone()}
                        on_command={props.on_command.clone()}
                        class="text-[10px] uppercase tracking-[0.3em] text-stone-400 hover:text-nobel-gold"
                    >
                        { kind.label() }
                    </OutboundLink>
                }) }
            </nav>
        }
    });

    html! {
        <footer class="px-8 pb-36 pt-12 text-center bg-stone-50">
            <p class="text-[9px] text-stone-300 leading-relaxed uppercase tracking-[0.4em] mb-4">
                {"International Supply • Artisan Network"}
            </p>
            { contact.unwrap_or_default() }
            { policies.unwrap_or_default() }
            <div class="flex flex-col items-center gap-1">
                <span class="text-[10px] font-serif italic text-stone-400 tracking-widest">
                    {"EST. 2014 • PRIVATE ARCHIVE ACCESS"}
                </span>
            </div>
        </footer>
    }
}
