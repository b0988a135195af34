use leptos::prelude::*;

/// Consistent vertical rhythm for every content section
const SECTION_CLASS: &str = "mx-auto max-w-6xl px-4 py-14 sm:px-6 sm:py-20";

/// Anchored page section
#[component]
pub fn Section(#[prop(into)] id: String, children: Children) -> impl IntoView {
    view! {
        <section id=id class=SECTION_CLASS>
            {children()}
        </section>
    }
}

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full border border-white/10 bg-white/5 px-3 py-1 text-xs font-medium text-white/80 backdrop-blur">
            {children()}
        </span>
    }
}

/// Centered section heading with optional kicker badge and subtitle
#[component]
pub fn SectionTitle(
    #[prop(into)] title: String,
    #[prop(optional, into)] kicker: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mx-auto mb-10 max-w-2xl text-center">
            {kicker.map(|kicker| view! {
                <div class="mb-3 flex justify-center">
                    <Badge>{kicker}</Badge>
                </div>
            })}
            <h2 class="text-3xl font-semibold tracking-tight text-white sm:text-4xl">{title}</h2>
            {subtitle.map(|subtitle| view! {
                <p class="mt-3 text-sm leading-relaxed text-white/70 sm:text-base">{subtitle}</p>
            })}
        </div>
    }
}

/// Frosted rounded panel
#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("rounded-3xl border border-white/10 backdrop-blur {class}")>
            {children()}
        </div>
    }
}
