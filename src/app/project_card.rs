use leptos::{either::Either, prelude::*};

use super::remote_list::{ListError, RemoteList};
use crate::{
    listing::{ListState, ListView},
    store::ProjectListItem,
};

#[component]
pub fn ProjectCard(project: ProjectListItem) -> impl IntoView {
    let ProjectListItem {
        title,
        description,
        tech_stack,
        detail_url,
        thumbnail_url,
        ..
    } = project;
    let open_label = format!("Open {title}");

    view! {
        <div class="group overflow-hidden rounded-xl border bg-card transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="relative aspect-video overflow-hidden bg-muted">
                {match thumbnail_url {
                    Some(src) => {
                        Either::Left(
                            view! {
                                <img
                                    src=src
                                    alt=format!("{title} thumbnail")
                                    class="h-full w-full object-cover transition-transform duration-300 group-hover:scale-105"
                                    loading="lazy"
                                />
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <div class="flex h-full w-full items-center justify-center">
                                    <span class="text-muted-foreground">"No Image"</span>
                                </div>
                            },
                        )
                    }
                }}
                <a
                    href=detail_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="absolute inset-0 flex flex-col items-center justify-center gap-2 bg-black/50 opacity-0 transition-opacity duration-300 group-hover:opacity-100"
                    aria-label=open_label
                >
                    <span class="text-3xl text-white">"↗"</span>
                    <span class="text-sm font-medium text-white">"Visit"</span>
                </a>
            </div>
            <div class="p-4">
                <h3 class="mb-2 text-lg font-semibold">{title}</h3>
                <p class="mb-3 text-sm text-muted-foreground line-clamp-2">{description}</p>
                <div class="flex flex-wrap gap-1.5">
                    {tech_stack
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-full bg-secondary px-2.5 py-0.5 text-xs font-medium text-secondary-foreground">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Loading placeholders shaped like a row of project cards.
#[component]
pub fn ProjectSkeletons(count: usize) -> impl IntoView {
    (0..count)
        .map(|_| {
            view! {
                <div class="space-y-3 rounded-xl border p-4">
                    <div class="loading-skeleton aspect-video rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-3/4"></div>
                    <div class="loading-skeleton h-4 rounded"></div>
                    <div class="loading-skeleton h-4 rounded w-2/3"></div>
                </div>
            }
        })
        .collect_view()
}

/// Cards for a loaded list, skeletons while the first load is pending, and
/// a notice whenever the latest load failed.
#[component]
pub fn ProjectGrid(list: RemoteList<ProjectListItem>, skeletons: usize) -> impl IntoView {
    let cards = move |s: &ListState<ProjectListItem>| match s.view() {
        ListView::Skeleton => view! { <ProjectSkeletons count=skeletons /> }.into_any(),
        ListView::Empty(error) => {
            let text = error.unwrap_or_else(|| "No projects yet.".to_string());
            view! {
                <p class="col-span-full py-8 text-center text-muted-foreground">{text}</p>
            }
                .into_any()
        }
        ListView::Items { error } => {
            view! {
                {error.map(|message| view! { <ListError message /> })}
                {s
                    .items
                    .iter()
                    .cloned()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            }
                .into_any()
        }
    };

    view! {
        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
            <Transition fallback=move || view! { <ProjectSkeletons count=skeletons /> }>
                {move || Suspend::new(async move {
                    list.ready().await;
                    list.state.with(cards)
                })}
            </Transition>
        </div>
    }
}
