use std::rc::Rc;

use yew::prelude::*;

use crate::actions::{Bindings, Command, Element};
use crate::components::catalog_card::CatalogCard;
use crate::components::contact_bar::ContactBar;
use crate::components::footer::Footer;
use crate::components::social_button::SocialButton;
use crate::components::welcome_overlay::WelcomeOverlay;
use crate::config::{PolicyKind, RegistryKey, SiteConfig};

const TRUST_BADGES: &[(&str, &str)] = &[
    ("fas fa-layer-group", "Global Stock"),
    ("fas fa-shield-halved", "Bespoke Precision"),
    ("fas fa-circle-check", "Full QC Path"),
];

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    (
        "fas fa-gem",
        "Premium Raw Goods",
        "Utilizing top-grain hide and precision-weighted metals.",
    ),
    (
        "fas fa-globe",
        "Secure Global Flow",
        "Optimized logistics for discreet, priority worldwide arrival.",
    ),
];

struct ConciergeEntry {
    element: Element,
    icon: &'static str,
    label: &'static str,
    color: &'static str,
}

const CONCIERGE: &[ConciergeEntry] = &[
    ConciergeEntry {
        element: Element::ConciergeWhatsApp,
        icon: "fab fa-whatsapp text-2xl",
        label: "WhatsApp",
        color: "bg-[#25D366]",
    },
    ConciergeEntry {
        element: Element::ConciergeTelegram,
        icon: "fab fa-telegram text-2xl",
        label: "Telegram",
        color: "bg-[#0088cc]",
    },
    ConciergeEntry {
        element: Element::ConciergeInstagram,
        icon: "fab fa-instagram text-2xl",
        label: "Insta",
        color: "bg-gradient-to-tr from-[#f09433] via-[#dc2743] to-[#bc1888]",
    },
    ConciergeEntry {
        element: Element::ConciergeArchive,
        icon: "fas fa-arrow-up-right-from-square text-2xl",
        label: "Archive",
        color: "bg-stone-800",
    },
];

/// Policy links in display order, bound to their commands.
pub(crate) fn policy_links(bindings: &Bindings) -> Vec<(PolicyKind, Command)> {
    PolicyKind::ALL
        .iter()
        .filter_map(|kind| {
            bindings
                .command(Element::PolicyLink(*kind))
                .map(|command| (*kind, command))
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<SiteConfig>,
    pub bindings: Rc<Bindings>,
    pub overlay_visible: bool,
    pub on_command: Callback<Command>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let bound = |element: Element| props.bindings.command(element);
    let on_command = props.on_command.clone();

    let catalog = bound(Element::CatalogCard)
        .map(|command| html! { <CatalogCard command={command} on_command={on_command.clone()} /> })
        .unwrap_or_default();

    let concierge = CONCIERGE.iter().filter_map(|entry| {
        bound(entry.element).map(|command| {
            html! {
                <SocialButton
                    icon={entry.icon}
                    label={entry.label}
                    color={entry.color}
                    command={command}
                    on_command={on_command.clone()}
                />
            }
        })
    });

    let contact_bar = bound(Element::StickyWhatsApp)
        .map(|command| html! { <ContactBar command={command} on_command={on_command.clone()} /> })
        .unwrap_or_default();


    html! {
        <div class="landing-page min-h-screen bg-[#FDFCFB] text-stone-900 font-sans flex justify-center">
            <div class="w-full max-w-md bg-white relative shadow-2xl flex flex-col min-h-screen border-x border-stone-100 overflow-hidden">
                <header class="py-10 px-6 flex flex-col items-center border-b border-stone-50">
                    <div class="text-center">
                        <h1 class="text-2xl font-serif font-bold tracking-[0.6em] text-stone-800 uppercase">{"PRESTIGE"}</h1>
                        <div class="flex items-center gap-2 mt-2 justify-center">
                            <span class="h-[1px] w-4 bg-nobel-gold"></span>
                            <p class="text-nobel-gold text-[9px] tracking-[0.4em] uppercase font-bold italic">{"Global Supply Archive"}</p>
                            <span class="h-[1px] w-4 bg-nobel-gold"></span>
                        </div>
                    </div>
                </header>

                <section class="trust-badges px-6 py-4 flex justify-around bg-stone-50/50">
                    { for TRUST_BADGES.iter().map(|(icon, label)| html! {
                        <div class="flex flex-col items-center gap-1">
                            <i class={classes!(*icon, "text-nobel-gold", "text-sm")}></i>
                            <span class="text-[8px] font-bold text-stone-400 uppercase tracking-widest">{ *label }</span>
                        </div>
                    }) }
                </section>

                <section class="showcase px-4 py-6">
                    <div class="relative aspect-[4/5] rounded-[2rem] overflow-hidden shadow-2xl bg-stone-100 border border-stone-100">
                        <img
                            src="https://images.unsplash.com/photo-1441984904996-e0b6ba687e04?auto=format&fit=crop&q=70&w=720"
                            alt="Curated Collection"
                            loading="lazy"
                            class="w-full h-full object-cover brightness-[0.85] contrast-[1.05]"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/90 via-black/20 to-transparent"></div>
                        <div class="absolute bottom-8 left-8 right-8">
                            <div class="flex items-center gap-2 mb-3">
                                <span class="h-[1px] w-6 bg-nobel-gold"></span>
                                <span class="text-nobel-gold text-[10px] font-black uppercase tracking-[0.3em]">{"Season Archive 2024"}</span>
                            </div>
                            <p class="text-white font-serif text-2xl italic tracking-tight leading-tight">
                                {"An exhaustive collection of artisan-grade masterpieces."}
                            </p>
                            <p class="text-stone-400 text-[10px] mt-4 uppercase tracking-[0.15em] font-medium leading-relaxed">
                                {"Source directly from the world's most sophisticated leather workshops."}
                            </p>
                        </div>
                    </div>
                </section>

                { catalog }

                <section class="concierge px-8 py-12 bg-stone-50 border-y border-stone-100">
                    <h2 class="text-[10px] tracking-[0.5em] uppercase text-stone-400 font-black text-center mb-10 italic">{"Personal Concierge"}</h2>
                    <div class="grid grid-cols-4 gap-4">
                        { for concierge }
                    </div>
                </section>

                <section class="highlights px-8 py-14 space-y-12">
                    <div class="text-center">
                        <h3 class="font-serif text-2xl text-stone-800 mb-4 italic">{"Supply Chain Excellence"}</h3>
                        <p class="text-stone-500 text-[13px] leading-relaxed italic">
                            {"Access the same raw materials and hardware used in historical boutique production, reconstructed with fidelity."}
                        </p>
                    </div>
                    <div class="space-y-8">
                        { for HIGHLIGHTS.iter().map(|(icon, title, body)| html! {
                            <div class="flex gap-5 items-start">
                                <div class="bg-stone-50 p-3 rounded-2xl text-nobel-gold border border-stone-100">
                                    <i class={classes!(*icon, "text-2xl")}></i>
                                </div>
                                <div>
                                    <h4 class="text-xs font-bold uppercase tracking-widest text-stone-800">{ *title }</h4>
                                    <p class="text-[11px] text-stone-400 mt-1 italic">{ *body }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <Footer
                    contact={props.config.visible_contact().cloned()}
                    policy_links={policy_links(&props.bindings)}
                    on_command={on_command.clone()}
                />

                { contact_bar }

                <WelcomeOverlay
                    visible={props.overlay_visible}
                    command={Command::DismissOverlay}
                    on_command={on_command.clone()}
                />
            </div>
        </div>
    }
}
