use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{
    guestbook::Guestbook,
    project_card::ProjectGrid,
    remote_list::use_remote_list,
    reveal::RevealBlock,
    server::ServerFnStore,
    skills::SkillSection,
    sticky_board::StickyBoard,
};
use crate::{
    content::{CONTACT_EMAIL, OWNER_NAME, OWNER_TAGLINE},
    store::{RemoteStore, FEATURED_PROJECTS},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="max-w-6xl mx-auto px-4 md:px-8">
            <Hero />
            <AboutSection />
            <SkillSection />
            <ProjectsSection />
            <ContactSection />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="flex flex-col lg:flex-row items-center gap-8 lg:gap-12 py-12 md:py-20">
            <div class="w-full lg:max-w-md text-center lg:text-left">
                <p class="text-sm font-medium text-primary mb-2">"Hello, I'm"</p>
                <h1 class="text-4xl md:text-5xl font-bold mb-4">{OWNER_NAME}</h1>
                <p class="text-lg text-muted-foreground leading-relaxed">{OWNER_TAGLINE}</p>
                <p class="mt-4 text-xs text-muted-foreground">"Drag the notes around."</p>
            </div>
            <div class="w-full flex-1">
                <StickyBoard />
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="py-12 md:py-20">
            <RevealBlock class="max-w-2xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">"About Me"</h2>
                <p class="text-base md:text-lg mb-4 leading-relaxed">
                    "I build interfaces that feel calm to use. Most of my days are spent between Figma and the browser, "
                    "turning rough sketches into components that hold up on every screen size."
                </p>
                <p class="text-base md:text-lg mb-8 leading-relaxed text-muted-foreground">
                    "Lately I've been digging into motion, accessibility and the small details that make a page feel finished."
                </p>
                <A
                    href="/about"
                    attr:class="inline-block rounded-md bg-primary px-6 py-3 font-medium text-primary-foreground transition-all duration-200 hover:opacity-90"
                >
                    "Learn more"
                </A>
            </RevealBlock>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    let projects = use_remote_list(Signal::stored(Some(FEATURED_PROJECTS)), |limit| async move {
        ServerFnStore.list_projects(limit).await
    });

    view! {
        <section class="py-12 md:py-20">
            <RevealBlock class="text-center mb-10">
                <h2 class="text-3xl md:text-4xl font-bold mb-3">"Projects"</h2>
                <p class="text-muted-foreground text-base md:text-lg">"Things I've made recently"</p>
            </RevealBlock>
            <ProjectGrid list=projects skeletons=FEATURED_PROJECTS />
            <div class="mt-10 text-center">
                <A
                    href="/projects"
                    attr:class="inline-block rounded-md border px-6 py-3 font-medium transition-all duration-200 hover:bg-secondary"
                >
                    "See more"
                </A>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section class="py-12 md:py-20 text-center">
            <RevealBlock class="max-w-2xl mx-auto mb-10">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get in touch"</h2>
                <p class="text-base md:text-lg mb-4 text-muted-foreground">
                    "Have a project in mind or just want to say hi? Drop me a line, or leave a note in the guestbook below."
                </p>
                <a
                    href=format!("mailto:{CONTACT_EMAIL}")
                    class="text-lg font-medium text-primary hover:underline"
                >
                    {CONTACT_EMAIL}
                </a>
            </RevealBlock>
            <Guestbook />
        </section>
    }
}
