use leptos::prelude::*;
use shared::content::particles;
use web_sys::window;

/// Check if user prefers reduced motion
fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Fixed gradient wash, grid texture and drifting particles behind the page
#[component]
pub fn Backdrop() -> impl IntoView {
    let reduced_motion = prefers_reduced_motion();

    view! {
        <div class="pointer-events-none fixed inset-0 overflow-hidden">
            <div class="absolute inset-0 animate-[gradientMove_14s_ease-in-out_infinite] bg-[radial-gradient(circle_at_20%_20%,rgba(212,175,55,0.20),transparent_55%),radial-gradient(circle_at_80%_30%,rgba(80,120,255,0.14),transparent_60%),radial-gradient(circle_at_50%_80%,rgba(170,90,255,0.12),transparent_65%)]" />
            <div class="absolute inset-0 bg-gradient-to-b from-black via-[#07070A] to-black" />
            <div class="absolute inset-0 bg-[radial-gradient(70%_55%_at_50%_0%,rgba(212,175,55,0.18),rgba(0,0,0,0)_62%)]" />
            <div class="absolute inset-0 bg-[radial-gradient(45%_40%_at_15%_40%,rgba(184,134,11,0.14),rgba(0,0,0,0)_70%)]" />
            <div class="absolute inset-0 bg-[radial-gradient(45%_40%_at_85%_45%,rgba(246,226,122,0.10),rgba(0,0,0,0)_72%)]" />
            <div class="absolute inset-0 opacity-[0.18] [background-image:linear-gradient(to_right,rgba(255,255,255,0.05)_1px,transparent_1px),linear-gradient(to_bottom,rgba(255,255,255,0.05)_1px,transparent_1px)] [background-size:52px_52px]" />
            {(!reduced_motion).then(|| view! { <FloatingParticles /> })}
        </div>
    }
}

#[component]
fn FloatingParticles() -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 overflow-hidden">
            {particles().into_iter().map(|p| {
                let style = format!(
                    "left: {}%; top: {}%; width: {}px; height: {}px; animation: floaty {}s ease-in-out {}s infinite; opacity: 0.18;",
                    p.x, p.y, p.size, p.size, p.duration, p.delay,
                );
                view! { <span class="absolute rounded-full bg-white/40 blur-[0.3px]" style=style /> }
            }).collect_view()}
        </div>
    }
}
