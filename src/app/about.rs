use leptos::prelude::*;
use leptos_meta::Title;

use super::reveal::RevealBlock;
use crate::content::{CONTACT_EMAIL, GITHUB_URL, OWNER_NAME, SKILLS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="max-w-4xl mx-auto px-4 md:px-8 py-12 md:py-20">
            <RevealBlock class="text-center mb-12">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">"About Me"</h1>
                <p class="text-lg text-muted-foreground">"A little more about who I am and how I work."</p>
            </RevealBlock>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                <Sidebar />
                <Story />
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <RevealBlock class="space-y-6">
            <div class="rounded-xl border bg-card p-5 text-center">
                <h2 class="text-2xl font-bold">{OWNER_NAME}</h2>
                <p class="text-sm text-muted-foreground">"Front-end developer · Seoul"</p>
                <div class="mt-4 flex flex-col items-center gap-y-1.5 text-sm">
                    <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:text-primary">
                        {CONTACT_EMAIL}
                    </a>
                    <a href=GITHUB_URL target="_blank" rel="noreferrer" class="hover:text-primary">
                        "GitHub"
                    </a>
                </div>
            </div>
            <section>
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Toolbox"</h3>
                <ul class="flex flex-wrap gap-1.5">
                    {SKILLS
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <li
                                    class="rounded-full px-2.5 py-0.5 text-xs font-medium"
                                    style=format!("background-color:{};color:{};", skill.bg_ring, skill.color)
                                >
                                    {skill.name}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
            <section>
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Outside of work"</h3>
                <p class="text-sm">"Film photography, long walks, and far too many stationery shops."</p>
            </section>
        </RevealBlock>
    }
}

#[component]
fn Story() -> impl IntoView {
    view! {
        <div class="md:col-span-2 space-y-8">
            <RevealBlock>
                <h3 class="mb-2 border-b pb-0.5 font-bold">"How I got here"</h3>
                <p class="leading-relaxed">
                    "I started out designing posters for friends' bands and slowly drifted toward the browser. "
                    "The first time a layout I drew actually moved when I resized the window, I was hooked."
                </p>
            </RevealBlock>
            <RevealBlock delay_ms=100>
                <h3 class="mb-2 border-b pb-0.5 font-bold">"What I care about"</h3>
                <ul class="list-disc pl-5 space-y-1">
                    <li>"Interfaces that are readable before they are clever"</li>
                    <li>"Motion that explains what just happened"</li>
                    <li>"Components that work with a keyboard and a screen reader"</li>
                </ul>
            </RevealBlock>
            <RevealBlock delay_ms=200>
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Right now"</h3>
                <p class="leading-relaxed">
                    "Learning more about design systems and shipping small experiments. "
                    "The sticky notes on the home page started as one of them."
                </p>
            </RevealBlock>
        </div>
    }
}
