use yew::prelude::*;

use crate::actions::Command;
use crate::components::OutboundLink;

#[derive(Properties, PartialEq)]
pub struct CatalogCardProps {
    pub command: Command,
    pub on_command: Callback<Command>,
}

#[function_component(CatalogCard)]
pub fn catalog_card(props: &CatalogCardProps) -> Html {
    html! {
        <section class="px-4 py-2">
            <OutboundLink
                command={props.command.clone()}
                on_command={props.on_command.clone()}
                class="catalog-card block relative w-full rounded-[2.5rem] overflow-hidden bg-stone-950 border border-stone-800"
            >
                <div class="absolute inset-0 opacity-40 blur-md scale-110">
                    <img
                        src="https://images.unsplash.com/photo-1441986300917-64674bd600d8?auto=format&fit=crop&q=65&w=640"
                        class="w-full h-full object-cover"
                        alt=""
                        loading="lazy"
                        decoding="async"
                    />
                </div>
                <div class="relative p-10 flex flex-col items-center text-center">
                    <div class="mb-6 w-16 h-16 rounded-full border border-nobel-gold/30 flex items-center justify-center animate-pulse">
                        <i class="fas fa-book-open text-nobel-gold text-2xl"></i>
                    </div>
                    <h2 class="text-white font-serif text-3xl tracking-wide mb-2 italic">
                        {"50,000+ "}
                        <span class="text-xs uppercase tracking-[0.3em] block mt-2 text-stone-500 font-sans font-bold">
                            {"Live Inventory"}
                        </span>
                    </h2>
                    <div class="h-[1px] w-16 bg-nobel-gold/40 my-6"></div>
                    <p class="text-stone-400 text-[11px] leading-relaxed max-w-[260px] mb-8 uppercase tracking-[0.1em] font-medium">
                        {"Bags, Watches, Footwear & Accessories. Updated in real-time."}
                    </p>
                    <div class="flex items-center gap-3 bg-white text-stone-950 px-10 py-4 rounded-full text-[11px] font-black uppercase tracking-[0.2em]">
                        <span>{"进入私密目录"}</span>
                        <i class="fas fa-chevron-right"></i>
                    </div>
                </div>
            </OutboundLink>
        </section>
    }
}
