use yew::prelude::*;

use crate::actions::Command;
use crate::components::emit_on_click;

#[derive(Properties, PartialEq)]
pub struct WelcomeOverlayProps {
    pub visible: bool,
    pub command: Command,
    pub on_command: Callback<Command>,
}

/// Modal gate shown until the visitor requests entry.
#[function_component(WelcomeOverlay)]
pub fn welcome_overlay(props: &WelcomeOverlayProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let onclick = emit_on_click(&props.on_command, &props.command);

    html! {
        <div class="welcome-overlay fixed inset-0 bg-stone-950/90 backdrop-blur-xl z-[100] flex items-center justify-center p-8">
            <div class="bg-white rounded-[3.5rem] p-12 shadow-2xl w-full max-w-xs text-center relative">
                <div class="w-20 h-20 bg-stone-50 rounded-full flex items-center justify-center mx-auto mb-8 border border-stone-100">
                    <i class="fas fa-lock text-nobel-gold text-3xl"></i>
                </div>
                <h4 class="font-serif text-3xl mb-4 text-stone-800 italic tracking-tight">{"Atelier Entry"}</h4>
                <p class="text-[10px] text-stone-400 leading-relaxed mb-12 tracking-[0.2em] uppercase font-bold px-4">
                    {"Request access to the most comprehensive"}<br/>{"luxury archive in the industry"}
                </p>
                <button
                    type="button"
                    onclick={onclick}
                    class="w-full bg-stone-900 text-white text-[11px] font-black uppercase tracking-[0.4em] py-5 rounded-2xl flex items-center justify-center gap-2"
                >
                    <i class="fas fa-arrow-pointer"></i>
                    <span>{"Request Entry"}</span>
                </button>
            </div>
        </div>
    }
}
