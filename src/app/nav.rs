use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::content::{is_active, NAV_ITEMS};

#[component]
pub fn Navigation() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60">
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <A href="/" attr:class="font-bold text-xl">
                    "Portfolio"
                </A>
                <div class="flex gap-6">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let pathname = location.pathname;
                            view! {
                                <A
                                    href=item.path
                                    attr:class=move || {
                                        if is_active(&item, &pathname.get()) {
                                            "text-sm font-medium transition-colors hover:text-primary text-primary"
                                        } else {
                                            "text-sm font-medium transition-colors hover:text-primary text-muted-foreground"
                                        }
                                    }
                                >
                                    {item.label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
