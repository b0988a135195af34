use leptos::prelude::*;
use shared::SiteConfig;
use shared::content::{FAQ, FEATURE_CARDS, ONBOARDING_STEPS, cta_label, with_channel};

use crate::components::{
    Backdrop, Card, ChannelIcon, EpgMock, PricingCard, PricingToggle, Reveal, Section, SectionTitle, ShimmerButton,
};

/// Call-to-action target and label, derived from the site config
fn trial_cta(site: &SiteConfig) -> (String, String) {
    (site.trial_link(), cta_label(site.channel.name()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-b from-black via-[#07070A] to-[#000000] text-white">
            <Backdrop />

            <main class="relative z-10">
                <Hero />
                <Features />
                <Pricing />
                <Faq />
                <Footer />
            </main>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let channel_name = site.channel.name();
    let (link, cta) = trial_cta(&site);
    let manual_message = site.manual_message().map(str::to_string);

    view! {
        <section class="mx-auto max-w-6xl px-4 pt-10 pb-10 sm:px-6 sm:pt-14 sm:pb-12">
            <div class="grid items-center gap-10 lg:grid-cols-2">
                <div>
                    <h1 class="text-4xl font-semibold tracking-tight leading-tight text-white sm:text-5xl">
                        "Elite Access."
                        <span class="block bg-gradient-to-r from-[#F6E27A] via-[#D4AF37] to-[#B8860B] bg-clip-text text-transparent leading-tight pb-1">
                            "For Viewers Who Expect More."
                        </span>
                    </h1>

                    <p class="mt-4 max-w-xl text-base leading-relaxed text-white/70 sm:text-lg">
                        {site.brand_name}
                        " delivers a polished, dependable subscription. Consistent, clean, and built to work across your favourite devices."
                    </p>

                    <div class="mt-7 flex flex-col gap-3 sm:flex-row sm:items-center">
                        <ShimmerButton href=link attention=true>{cta}</ShimmerButton>
                        <a
                            href="#pricing"
                            class="inline-flex items-center justify-center rounded-2xl border border-white/10 bg-white/[0.04] px-6 py-3 text-sm font-semibold text-white/85 backdrop-blur transition hover:bg-white/[0.06]"
                        >
                            "View membership"
                        </a>
                    </div>

                    {manual_message.map(|message| view! {
                        <p class="mt-3 max-w-xl text-sm text-white/60">
                            "When the chat opens, send us: "
                            <span class="italic text-white/85">{message}</span>
                        </p>
                    })}

                    <div class="mt-6 inline-flex items-center gap-3 rounded-full border border-white/10 bg-black/40 px-5 py-2 text-sm text-white/75 backdrop-blur">
                        <span class="font-semibold text-white/90">"1,200+ Members"</span>
                        <span class="h-4 w-px bg-white/15" />
                        <span class="text-[#F6E27A] text-base leading-none">"★★★★★"</span>
                        <span class="h-4 w-px bg-white/15" />
                        <span>"Activated in Minutes"</span>
                    </div>
                </div>

                <div class="relative overflow-hidden rounded-3xl border border-white/10 bg-white/[0.04] shadow-2xl shadow-black/60 backdrop-blur">
                    <div class="absolute inset-0 opacity-80">
                        <div class="absolute -left-24 -top-24 h-64 w-64 rounded-full bg-[#D4AF37]/15 blur-3xl" />
                        <div class="absolute -bottom-24 -right-24 h-64 w-64 rounded-full bg-[#B8860B]/15 blur-3xl" />
                        <div class="absolute left-1/2 top-1/2 h-56 w-56 -translate-x-1/2 -translate-y-1/2 rounded-full bg-[#5078FF]/10 blur-3xl" />
                    </div>

                    // Watermark
                    {site.logo.map(|logo| view! {
                        <img
                            src=logo
                            alt=""
                            aria-hidden="true"
                            class="pointer-events-none absolute right-4 bottom-4 z-10 w-20 select-none opacity-[0.08]"
                        />
                    })}

                    <div class="relative p-6">
                        <EpgMock channel_name=channel_name />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let channel_name = site.channel.name();
    let (link, cta) = trial_cta(&site);

    view! {
        <Section id="features">
            <Reveal>
                <SectionTitle
                    title="Elite Access, Made Simple."
                    subtitle="Global live access. A vast on demand library. Seamless performance, delivered without compromise."
                />
            </Reveal>

            <div class="mt-12 grid gap-8 md:grid-cols-3">
                {FEATURE_CARDS.iter().map(|card| view! {
                    <Reveal delay=card.delay_ms>
                        <Card class="bg-white/[0.05] p-8 transition hover:border-[#D4AF37]/40 hover:bg-white/[0.08]">
                            <h3 class="text-2xl font-semibold mb-4">{card.heading}</h3>
                            <p class="text-white/70 leading-relaxed text-sm mb-4">{with_channel(card.body, channel_name)}</p>
                            <div class="text-[#F6E27A] text-sm font-medium">{card.footer}</div>
                        </Card>
                    </Reveal>
                }).collect_view()}
            </div>

            <Reveal delay=400 class="mt-16 text-center">
                <div class="text-white/70 mb-6 text-sm tracking-wide">
                    "Limited access is available. Start with a private 24-hour trial while spaces remain."
                </div>
                <ShimmerButton href=link attention=true>{cta}</ShimmerButton>
            </Reveal>
        </Section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let channel_name = site.channel.name();
    let (link, cta) = trial_cta(&site);

    // Transient selection, starts at the configured default on every load
    let (billing, set_billing) = signal(site.default_billing);

    view! {
        <Section id="pricing">
            <Reveal>
                <SectionTitle
                    kicker="Membership"
                    title="One Plan. Full Access."
                    subtitle="Choose your billing. Everything is included. Request private trial access to begin."
                />
            </Reveal>

            <Reveal delay=70 class="mt-10">
                <Card class="bg-white/[0.035] p-6">
                    <div class="grid gap-3 sm:grid-cols-3">
                        {ONBOARDING_STEPS.iter().enumerate().map(|(i, step)| view! {
                            <div class="flex items-center gap-3">
                                <div class="grid h-9 w-9 place-items-center rounded-2xl border border-[#D4AF37]/25 bg-[#D4AF37]/10 text-xs font-semibold text-[#F6E27A]">
                                    {i + 1}
                                </div>
                                <div class="text-sm font-semibold text-white/85">{with_channel(step, channel_name)}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </Card>
            </Reveal>

            <Reveal delay=80 class="mt-8 flex justify-center">
                <PricingToggle value=billing on_change=set_billing />
            </Reveal>

            <div class="mt-14 flex justify-center">
                <Reveal delay=140>
                    <PricingCard billing=billing cta_href=link cta_label=cta channel_name=channel_name />
                </Reveal>
            </div>
        </Section>
    }
}

#[component]
fn Faq() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let channel_name = site.channel.name();
    let (link, cta) = trial_cta(&site);

    view! {
        <Section id="faq">
            <SectionTitle
                kicker="FAQ"
                title="Questions, answered"
                subtitle=format!("If you don't see what you need, message us on {channel_name} and we'll help quickly.")
            />

            <div class="grid gap-4 lg:grid-cols-2">
                {FAQ.iter().map(|item| {
                    let answer = item.answer_for(&site.channel);
                    view! {
                        <Card class="bg-white/[0.04] p-7">
                            <div class="text-base font-semibold text-white">{item.question}</div>
                            <div class="mt-2 text-sm leading-relaxed text-white/70">{answer}</div>
                        </Card>
                    }
                }).collect_view()}
            </div>

            <div class="mt-10 flex justify-center">
                <ShimmerButton href=link class="px-7 py-3" attention=true>{cta}</ShimmerButton>
            </div>
        </Section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let channel_name = site.channel.name();
    let channel_kind = site.channel.kind();
    let (link, cta) = trial_cta(&site);

    view! {
        <footer class="mx-auto max-w-6xl px-4 pb-14 sm:px-6 sm:pb-20">
            <Card class="bg-white/[0.03] p-6">
                <div class="flex flex-col items-start justify-between gap-4 sm:flex-row sm:items-center">
                    <div>
                        <div class="text-sm font-semibold text-white/90">{site.brand_name}</div>
                        <div class="mt-1 text-xs text-white/60">
                            "Premium viewing. Seamless experience. Direct support via " {channel_name} "."
                        </div>
                    </div>
                    <a
                        href=link
                        target="_blank"
                        rel="noreferrer"
                        class="inline-flex items-center gap-2 rounded-2xl border border-white/10 bg-black/40 px-5 py-2 text-sm font-semibold text-[#F6E27A] transition hover:bg-black/55"
                    >
                        <ChannelIcon kind=channel_kind />
                        {cta}
                    </a>
                </div>
            </Card>
        </footer>
    }
}
