use yew::prelude::*;

use crate::actions::Command;
use crate::components::OutboundLink;

#[derive(Properties, PartialEq)]
pub struct SocialButtonProps {
    pub icon: &'static str,
    pub label: &'static str,
    /// Background classes for the round badge.
    pub color: &'static str,
    pub command: Command,
    pub on_command: Callback<Command>,
}

#[function_component(SocialButton)]
pub fn social_button(props: &SocialButtonProps) -> Html {
    html! {
        <OutboundLink
            command={props.command.clone()}
            on_command={props.on_command.clone()}
            class="social-button flex flex-col items-center gap-2 group"
        >
            <div class={classes!(
                "w-14", "h-14", "rounded-full", "flex", "items-center", "justify-center",
                "text-white", "shadow-xl", "transition-all", "duration-300",
                props.color
            )}>
                <i class={props.icon}></i>
            </div>
            <span class="text-[10px] font-bold text-stone-500 uppercase tracking-widest">
                { props.label }
            </span>
        </OutboundLink>
    }
}
