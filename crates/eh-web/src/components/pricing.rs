use leptos::prelude::*;
use shared::{BillingPeriod, PricingEntry, get_pricing};

use crate::components::ShimmerButton;

const TOGGLE_ACTIVE: &str = "bg-[#D4AF37]/15 text-[#F6E27A] shadow-sm";
const TOGGLE_IDLE: &str = "text-white/70 hover:text-white";

/// Segmented control over the three billing periods
#[component]
pub fn PricingToggle(value: ReadSignal<BillingPeriod>, on_change: WriteSignal<BillingPeriod>) -> impl IntoView {
    view! {
        <div class="inline-flex rounded-2xl border border-white/10 bg-white/[0.04] p-1 backdrop-blur">
            {BillingPeriod::ALL.into_iter().map(|period| {
                let class = move || {
                    let state = if value.get() == period { TOGGLE_ACTIVE } else { TOGGLE_IDLE };
                    format!("rounded-xl px-4 py-2 text-sm transition {state}")
                };

                view! {
                    <button
                        type="button"
                        class=class
                        on:click=move |_| {
                            log::debug!("Billing period selected: {period}");
                            on_change.set(period);
                        }
                    >
                        <span class="inline-flex items-center gap-2">
                            <span>{period.label()}</span>
                            {period.badge().map(|badge| view! {
                                <span class="rounded-full border border-[#D4AF37]/25 bg-[#D4AF37]/10 px-2 py-0.5 text-[10px] font-semibold text-[#F6E27A]">
                                    {badge}
                                </span>
                            })}
                        </span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Pricing entry tracking the toggle selection
fn selected_pricing(billing: ReadSignal<BillingPeriod>) -> Signal<&'static PricingEntry> {
    Signal::derive(move || get_pricing(billing.get()))
}

/// Membership card showing the price for the selected billing period
#[component]
pub fn PricingCard(
    billing: ReadSignal<BillingPeriod>,
    #[prop(into)] cta_href: String,
    #[prop(into)] cta_label: String,
    channel_name: &'static str,
) -> impl IntoView {
    let pricing = selected_pricing(billing);

    view! {
        <div class="relative group w-full max-w-2xl overflow-hidden rounded-[32px] border border-[#D4AF37]/25 bg-white/[0.05] p-10 backdrop-blur-xl transition-all duration-700 hover:scale-[1.02] hover:border-[#D4AF37]/50 animate-[borderBreath_5.5s_ease-in-out_infinite]">
            <div class="pointer-events-none absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-700">
                <div class="absolute -left-32 -top-32 h-96 w-96 rounded-full bg-[#D4AF37]/20 blur-3xl animate-[floaty_6s_ease-in-out_infinite]" />
                <div class="absolute -right-32 -bottom-32 h-96 w-96 rounded-full bg-[#B8860B]/20 blur-3xl animate-[floaty_8s_ease-in-out_infinite]" />
            </div>

            <div class="relative text-center">
                <div class="inline-flex items-center gap-2 rounded-full border border-[#D4AF37]/30 bg-[#D4AF37]/10 px-4 py-1 text-xs font-semibold text-[#F6E27A]">
                    "Elite Access Membership"
                </div>

                <div class="mt-6 text-xs tracking-widest uppercase text-white/50">"Billing"</div>
                <div class="mt-2 text-sm font-semibold text-white/85">{move || billing.get().label()}</div>

                <div class="mt-6 text-6xl font-semibold tracking-tight">
                    <span class="bg-gradient-to-r from-[#F6E27A] via-[#D4AF37] to-[#B8860B] bg-clip-text text-transparent">
                        {move || pricing.get().price}
                    </span>
                </div>
                <div class="mt-2 text-xs text-white/60">{move || pricing.get().note}</div>

                {move || pricing.get().savings.map(|savings| view! {
                    <div class="mt-4 inline-flex items-center rounded-full border border-[#D4AF37]/30 bg-[#D4AF37]/10 px-4 py-1 text-xs font-semibold text-[#F6E27A] animate-pulse">
                        {savings}
                    </div>
                })}

                <div class="mt-8">
                    <ShimmerButton href=cta_href class="w-full" attention=true>
                        {cta_label}
                    </ShimmerButton>
                    <div class="mt-3 text-[11px] text-white/55">
                        "Private access. Confirmed individually via " {channel_name} "."
                    </div>
                </div>
            </div>
        </div>
    }
}
