//! Decorative programme guide in the hero. Static data, scrolling marquee.

use leptos::prelude::*;
use shared::content::{
    EPG_BLOCK_SLOTS, EPG_NOW_LEFT, EPG_ROWS, EPG_SLOT_WIDTH, EPG_TIMELINE, EpgRow, epg_programme_width, is_live,
    is_now_block, with_channel,
};

/// Two copies side by side so the marquee loops seamlessly
const MARQUEE_COPIES: usize = 2;

#[component]
pub fn EpgMock(channel_name: &'static str) -> impl IntoView {
    let programme_width = epg_programme_width();
    let track_style = format!("width: {}px", programme_width * MARQUEE_COPIES as u32);

    view! {
        <div class="relative overflow-hidden rounded-2xl border border-white/10 bg-black/40">
            // "Now" line
            <div class="pointer-events-none absolute inset-0">
                <div
                    class="absolute top-0 bottom-0 w-px bg-[#F6E27A]/75 opacity-80 animate-[nowGlow_2.8s_ease-in-out_infinite] motion-reduce:animate-none"
                    style=format!("left: {EPG_NOW_LEFT}")
                />
                <div
                    class="absolute top-0 bottom-0 w-[54px] bg-[#D4AF37]/10 blur-xl animate-[nowGlow_2.8s_ease-in-out_infinite] motion-reduce:animate-none"
                    style=format!("left: calc({EPG_NOW_LEFT} - 27px)")
                />
            </div>

            // Timeline header
            <div class="border-b border-white/10 bg-white/[0.03] px-4 py-3">
                <div class="flex items-center gap-2">
                    <div class="w-[180px] text-[10px] text-white/55">"Channel"</div>
                    <div class="relative flex-1 overflow-hidden">
                        <div class="relative whitespace-nowrap">
                            <div class="flex animate-[marquee_22s_linear_infinite] motion-reduce:animate-none" style=track_style.clone()>
                                {(0..MARQUEE_COPIES).map(|_| view! {
                                    <div class="flex" style=format!("width: {programme_width}px")>
                                        {EPG_TIMELINE.iter().map(|time| view! {
                                            <div class="shrink-0 text-[10px] text-white/55" style=format!("width: {EPG_SLOT_WIDTH}px")>
                                                {*time}
                                            </div>
                                        }).collect_view()}
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            // Channel rows
            <div class="px-4 py-3">
                <div class="grid gap-3">
                    {EPG_ROWS.iter().enumerate().map(|(index, row)| view! {
                        <EpgChannelRow index=index row=row channel_name=channel_name track_style=track_style.clone() />
                    }).collect_view()}
                </div>
            </div>

            <div class="pointer-events-none h-10 bg-gradient-to-t from-black/60 to-transparent" />
        </div>
    }
}

#[component]
fn EpgChannelRow(
    index: usize,
    row: &'static EpgRow,
    channel_name: &'static str,
    track_style: String,
) -> impl IntoView {
    let programme_width = epg_programme_width();

    view! {
        <div class="flex items-stretch gap-2">
            <div class="flex w-[180px] items-center gap-3">
                <div class="grid h-9 w-9 place-items-center rounded-xl border border-[#D4AF37]/25 bg-[#D4AF37]/10 text-[11px] font-extrabold text-[#F6E27A]">
                    {row.abbr}
                </div>
                <div class="min-w-0 pr-1">
                    <div class="break-words text-[11px] font-semibold leading-tight text-white/90">{row.name}</div>
                    <div class="text-[10px] text-white/50">{row.channel_number}</div>
                </div>
            </div>

            <div class="relative flex-1 overflow-hidden">
                <div class="flex animate-[marquee_24s_linear_infinite] motion-reduce:animate-none" style=track_style>
                    {(0..MARQUEE_COPIES).map(|_| view! {
                        <div class="flex gap-2 pr-2" style=format!("width: {programme_width}px")>
                            {row.blocks.iter().enumerate().map(|(block, title)| {
                                let title = with_channel(title, channel_name);
                                view! { <ProgrammeBlock title=title now=is_now_block(index, block) /> }
                            }).collect_view()}
                            <div class="shrink-0" style=format!("width: {EPG_SLOT_WIDTH}px") />
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProgrammeBlock(title: String, now: bool) -> impl IntoView {
    let live = is_live(&title);
    let ring = if now { "ring-1 ring-white/20" } else { "" };
    let title_attr = title.clone();

    view! {
        <div
            class=format!("relative shrink-0 overflow-hidden rounded-xl border border-white/10 bg-white/[0.04] px-3 py-2 {ring}")
            style=format!("width: {}px", EPG_BLOCK_SLOTS * EPG_SLOT_WIDTH)
            title=title_attr
        >
            <div class="flex items-start gap-2">
                <div class="flex-1 break-words text-[11px] font-semibold leading-tight text-white/90">{title}</div>
                {live.then(|| view! {
                    <span class="mt-0.5 shrink-0 rounded-full bg-[#D4AF37]/20 px-1.5 py-0.5 text-[9px] font-bold text-[#F6E27A]">
                        "LIVE"
                    </span>
                })}
            </div>
        </div>
    }
}
