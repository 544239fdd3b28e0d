use leptos::{html, prelude::*};

use super::reveal::use_scroll_reveal;
use crate::{
    content::{Skill, SKILLS, SKILL_RING, SKILL_STAGGER_MS},
    reveal::RevealOptions,
};

#[component]
fn SkillRing(skill: Skill, delay: u32, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let size = SKILL_RING.size.to_string();
    let center = (SKILL_RING.size / 2.0).to_string();
    let radius = SKILL_RING.radius().to_string();
    let stroke = SKILL_RING.stroke.to_string();
    let circumference = SKILL_RING.circumference().to_string();

    view! {
        <div
            class="flex flex-col items-center gap-3 transition-all duration-300 hover:-translate-y-1"
            style=move || {
                if visible.get() {
                    format!(
                        "opacity:1;transform:translateY(0) scale(1);transition:opacity 0.6s ease-out {delay}ms, transform 0.6s ease-out {delay}ms;",
                    )
                } else {
                    format!(
                        "opacity:0;transform:translateY(20px) scale(0.9);transition:opacity 0.6s ease-out {delay}ms, transform 0.6s ease-out {delay}ms;",
                    )
                }
            }
        >
            <div class="relative" style=format!("width:{size}px;height:{size}px;")>
                <svg width=size.clone() height=size.clone() class="-rotate-90">
                    <circle
                        cx=center.clone()
                        cy=center.clone()
                        r=radius.clone()
                        fill="none"
                        stroke=skill.bg_ring
                        stroke-width=stroke.clone()
                    />
                    <circle
                        cx=center.clone()
                        cy=center
                        r=radius
                        fill="none"
                        stroke=skill.color
                        stroke-width=stroke
                        stroke-linecap="round"
                        stroke-dasharray=circumference
                        stroke-dashoffset=move || {
                            SKILL_RING.dash_offset(skill.level, visible.get()).to_string()
                        }
                        style=format!("transition:stroke-dashoffset 1.4s ease-out {}ms;", delay + 300)
                    />
                </svg>
                <div class="absolute inset-0 flex flex-col items-center justify-center">
                    <span class="text-xl md:text-2xl font-bold" style=format!("color:{};", skill.color)>
                        {move || if visible.get() { skill.level } else { 0 }}
                    </span>
                    <span class="text-[10px] text-muted-foreground">"%"</span>
                </div>
            </div>
            <span class="text-sm md:text-base font-semibold">{skill.name}</span>
            <p
                class="text-[11px] md:text-xs text-center text-muted-foreground max-w-[120px] leading-relaxed"
                style=move || {
                    format!(
                        "opacity:{};transition:opacity 0.5s ease-out {}ms;",
                        if visible.get() { 1 } else { 0 },
                        delay + 800,
                    )
                }
            >
                {skill.description}
            </p>
        </div>
    }
}

#[component]
pub fn SkillSection() -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_scroll_reveal(target, RevealOptions::default());

    view! {
        <section class="py-12 md:py-20">
            <div node_ref=target>
                <div
                    class="text-center mb-10 md:mb-14"
                    style=move || {
                        if visible.get() {
                            "opacity:1;transform:translateY(0);transition:opacity 0.6s ease-out, transform 0.6s ease-out;"
                        } else {
                            "opacity:0;transform:translateY(20px);transition:opacity 0.6s ease-out, transform 0.6s ease-out;"
                        }
                    }
                >
                    <h2 class="text-3xl md:text-4xl font-bold mb-3">"Skills"</h2>
                    <p class="text-muted-foreground text-base md:text-lg">
                        "A stack that keeps growing"
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-8 md:gap-12">
                    {SKILLS
                        .into_iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            let delay = index as u32 * SKILL_STAGGER_MS;
                            view! { <SkillRing skill delay visible /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
