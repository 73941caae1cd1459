use yew::prelude::*;

use crate::actions::Command;
use crate::components::OutboundLink;

#[derive(Properties, PartialEq)]
pub struct ContactBarProps {
    pub command: Command,
    pub on_command: Callback<Command>,
}

/// WhatsApp call-to-action pinned to the bottom of the viewport.
#[function_component(ContactBar)]
pub fn contact_bar(props: &ContactBarProps) -> Html {
    html! {
        <div class="contact-bar fixed bottom-0 left-0 right-0 p-4 bg-gradient-to-t from-white via-white/90 to-transparent z-50 flex justify-center">
            <OutboundLink
                command={props.command.clone()}
                on_command={props.on_command.clone()}
                class="w-full max-w-sm bg-[#25D366] text-white flex items-center justify-between pl-8 pr-3 py-4 rounded-full"
            >
                <div class="flex flex-col">
                    <span class="text-[9px] font-black tracking-[0.2em] uppercase opacity-70 mb-0.5">
                        {"Real-time Service"}
                    </span>
                    <span class="text-sm font-bold tracking-wider">{"WhatsApp 咨询/获取目录"}</span>
                </div>
                <div class="bg-white/20 p-2 rounded-full">
                    <i class="fab fa-whatsapp text-2xl"></i>
                </div>
            </OutboundLink>
        </div>
    }
}
