use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    project_card::ProjectGrid, remote_list::use_remote_list, reveal::RevealBlock,
    server::ServerFnStore,
};
use crate::store::RemoteStore;

const PAGE_SKELETONS: usize = 6;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    // no limit: every published project
    let projects = use_remote_list(Signal::stored(None), |limit| async move {
        ServerFnStore.list_projects(limit).await
    });

    view! {
        <Title text="Projects" />
        <div class="max-w-6xl mx-auto px-4 md:px-8 py-12 md:py-20">
            <RevealBlock class="text-center mb-12">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">"Projects"</h1>
                <p class="max-w-2xl mx-auto text-lg text-muted-foreground">
                    "Everything I've shipped, from weekend experiments to client work."
                </p>
            </RevealBlock>
            <ProjectGrid list=projects skeletons=PAGE_SKELETONS />
        </div>
    }
}
