pub mod catalog_card;
pub mod contact_bar;
pub mod footer;
pub mod social_button;
pub mod welcome_overlay;

use yew::prelude::*;

use crate::actions::Command;

/// Click handler that hands `command` to the dispatcher.
///
/// The default action is left alone so anchors still navigate after the
/// report went out.
pub fn emit_on_click(on_command: &Callback<Command>, command: &Command) -> Callback<MouseEvent> {
    let on_command = on_command.clone();
    let command = command.clone();
    Callback::from(move |_: MouseEvent| on_command.emit(command.clone()))
}

#[derive(Properties, PartialEq)]
pub struct OutboundLinkProps {
    pub command: Command,
    pub on_command: Callback<Command>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor to an external destination, opened in a new context without
/// leaking the referrer or opener.
#[function_component(OutboundLink)]
pub fn outbound_link(props: &OutboundLinkProps) -> Html {
    let href = props.command.href().unwrap_or_default().to_string();
    let onclick = emit_on_click(&props.on_command, &props.command);

    html! {
        <a
            href={href}
            target="_blank"
            rel="noopener noreferrer"
            class={props.class.clone()}
            onclick={onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
