use leptos::prelude::*;
use shared::ChannelKind;

const WHATSAPP_ICON_PATH: &str = "M20.52 3.48A11.78 11.78 0 0012.05 0C5.5 0 .2 5.3.2 11.85c0 2.09.55 4.14 1.6 5.95L0 24l6.38-1.67a11.8 11.8 0 005.67 1.44h.01c6.55 0 11.85-5.3 11.85-11.85 0-3.17-1.23-6.15-3.39-8.31zM12.06 21.4h-.01a9.46 9.46 0 01-4.82-1.32l-.35-.21-3.79.99 1.01-3.7-.23-.38a9.44 9.44 0 01-1.45-5.03c0-5.23 4.25-9.48 9.48-9.48a9.41 9.41 0 016.7 2.78 9.41 9.41 0 012.78 6.7c0 5.23-4.25 9.48-9.48 9.48zm5.2-7.07c-.29-.15-1.7-.84-1.96-.93-.26-.1-.45-.15-.64.15-.19.29-.74.93-.91 1.12-.17.19-.33.21-.62.07-.29-.15-1.23-.45-2.35-1.43-.87-.77-1.46-1.72-1.63-2.01-.17-.29-.02-.45.13-.6.13-.13.29-.33.43-.5.14-.17.19-.29.29-.48.1-.19.05-.36-.02-.5-.07-.15-.64-1.54-.88-2.11-.23-.55-.47-.48-.64-.49l-.55-.01c-.19 0-.5.07-.76.36-.26.29-1 1-1 2.44s1.03 2.83 1.17 3.03c.14.19 2.02 3.09 4.9 4.33.69.3 1.22.48 1.63.61.69.22 1.31.19 1.8.11.55-.08 1.7-.69 1.94-1.35.24-.67.24-1.24.17-1.35-.07-.12-.26-.19-.55-.33z";

const TELEGRAM_ICON_PATH: &str = "M9.04 15.47l-.37 5.13c.53 0 .76-.23 1.04-.5l2.5-2.39 5.18 3.79c.95.52 1.62.25 1.88-.87l3.4-15.94c.3-1.4-.5-1.95-1.43-1.6L1.2 10.02c-1.37.53-1.35 1.3-.23 1.64l5.1 1.59 11.84-7.46c.56-.37 1.07-.17.65.2z";

/// Outbound call-to-action link with a glint sweep and hover shimmer
#[component]
pub fn ShimmerButton(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    /// Pulse continuously to draw the eye
    #[prop(optional)]
    attention: bool,
    children: Children,
) -> impl IntoView {
    let base = "group relative isolate overflow-hidden inline-flex items-center justify-center rounded-2xl px-6 py-3 text-sm font-bold transition";
    let gold = "text-black shadow-lg shadow-[#D4AF37]/20 bg-gradient-to-r from-[#F6E27A] via-[#D4AF37] to-[#B8860B] hover:brightness-105";
    let pulse = if attention { "animate-[ctaPulse_3s_ease-in-out_infinite]" } else { "" };

    view! {
        <a href=href target="_blank" rel="noreferrer" class=format!("{base} {gold} {pulse} {class}")>
            {attention.then(|| view! {
                <span
                    class="pointer-events-none absolute inset-0 rounded-2xl border border-[#D4AF37]/40 animate-[ringPulse_2.8s_ease-out_infinite]"
                    aria-hidden="true"
                />
            })}
            <span
                class="pointer-events-none absolute -inset-y-12 -left-1/2 w-[200%] rotate-12 opacity-0 [background:linear-gradient(90deg,transparent,rgba(255,255,255,0.55),transparent)] animate-[glint_7.5s_ease-in-out_infinite]"
                aria-hidden="true"
            />
            <span
                class="pointer-events-none absolute -inset-y-10 -left-1/2 w-[200%] rotate-12 opacity-0 [background:linear-gradient(90deg,transparent,rgba(255,255,255,0.65),transparent)] transition-opacity duration-200 group-hover:opacity-45 group-hover:animate-[shimmer_2.2s_ease-in-out_infinite]"
                aria-hidden="true"
            />
            <span class="relative z-10 inline-flex items-center gap-2">
                {children()}
                <span class="transition-transform duration-300 group-hover:animate-[arrowSlide_0.6s_ease-in-out]">"→"</span>
            </span>
        </a>
    }
}

/// Logo of the configured messaging app
#[component]
pub fn ChannelIcon(kind: ChannelKind, #[prop(optional, into)] class: String) -> impl IntoView {
    let path = match kind {
        ChannelKind::WhatsApp => WHATSAPP_ICON_PATH,
        ChannelKind::Telegram => TELEGRAM_ICON_PATH,
    };

    view! {
        <svg
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="currentColor"
            xmlns="http://www.w3.org/2000/svg"
            class=class
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}
