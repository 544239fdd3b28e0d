mod about;
mod guestbook;
mod homepage;
mod nav;
mod project_card;
mod projects;
mod remote_list;
mod reveal;
pub mod server;
mod skills;
mod sticky_board;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{GITHUB_URL, OWNER_NAME};
use about::AboutPage;
use homepage::HomePage;
use nav::Navigation;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <div class="min-h-screen flex flex-col">
                <Navigation />
                <main class="flex-1">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/projects") view=ProjectsPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

fn build_date() -> String {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t py-6 text-center text-sm text-muted-foreground">
            <p>
                "© " {OWNER_NAME} " · "
                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-primary">
                    "GitHub"
                </a>
            </p>
            <p class="mt-1 text-xs">"Last built " {build_date()}</p>
        </footer>
    }
}
