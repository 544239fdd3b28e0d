use leptos::{ev, prelude::*, task::spawn_local};

use super::{
    remote_list::{use_remote_list, ListError},
    server::{notify, ServerFnStore},
};
use crate::{
    guestbook::{FormEdit, Submission},
    listing::{ListState, ListView},
    store::{GuestbookEntry, RemoteStore},
};

#[component]
fn EntryCard(entry: GuestbookEntry) -> impl IntoView {
    let initial = entry.initial();
    let date = entry.display_date();
    let email = entry.public_email().map(str::to_string);
    let GuestbookEntry {
        author_name,
        message,
        organization,
        ..
    } = entry;

    view! {
        <li class="rounded-xl border bg-card p-4">
            <div class="mb-2 flex items-center gap-3">
                <div class="flex h-9 w-9 items-center justify-center rounded-full bg-primary/10 font-semibold text-primary">
                    {initial}
                </div>
                <div class="min-w-0">
                    <div class="flex flex-wrap items-baseline gap-x-2">
                        <span class="font-semibold">{author_name}</span>
                        {organization
                            .map(|org| {
                                view! { <span class="text-xs text-muted-foreground">{org}</span> }
                            })}
                    </div>
                    <time class="text-xs text-muted-foreground">{date}</time>
                </div>
            </div>
            <p class="whitespace-pre-line text-sm">{message}</p>
            {email
                .map(|email| {
                    view! {
                        <a
                            href=format!("mailto:{email}")
                            class="mt-2 inline-block text-xs text-primary hover:underline"
                        >
                            {email.clone()}
                        </a>
                    }
                })}
        </li>
    }
}

/// Signing form plus the newest-first list of entries.
#[component]
pub fn Guestbook() -> impl IntoView {
    let submission = RwSignal::new(Submission::default());
    let entries = use_remote_list(Signal::stored(None), |_| async move {
        ServerFnStore.list_guestbook().await
    });

    let edit = move |change: FormEdit| submission.update(|s| s.form.apply(change));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submission.with_untracked(|s| s.is_submitting) {
            return;
        }
        let entry = match submission.try_update(Submission::begin) {
            Some(Ok(entry)) => entry,
            Some(Err(err)) => {
                notify(&err.to_string());
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let result = ServerFnStore.insert_guestbook(entry).await;
            match submission.try_update(|s| s.finish(result)) {
                Some(Ok(())) => entries.refresh(),
                Some(Err(err)) => notify(&err.to_string()),
                None => log::debug!("guestbook closed before the insert settled"),
            }
        });
    };

    let loading_entries = || {
        view! { <p class="text-center text-sm text-muted-foreground">"Loading entries..."</p> }
    };
    let entry_list = move |s: &ListState<GuestbookEntry>| match s.view() {
        ListView::Skeleton => loading_entries().into_any(),
        ListView::Empty(error) => {
            let text = error.unwrap_or_else(|| "No entries yet. Be the first!".to_string());
            view! { <p class="text-center text-sm text-muted-foreground">{text}</p> }.into_any()
        }
        ListView::Items { error } => {
            view! {
                {error.map(|message| view! { <ListError message /> })}
                <ul class="space-y-3">
                    {s
                        .items
                        .iter()
                        .cloned()
                        .map(|entry| view! { <EntryCard entry /> })
                        .collect_view()}
                </ul>
            }
                .into_any()
        }
    };

    view! {
        <div class="mx-auto w-full max-w-2xl text-left">
            <form class="mb-8 space-y-3 rounded-xl border bg-card p-5" on:submit=on_submit>
                <div class="grid gap-3 sm:grid-cols-2">
                    <input
                        type="text"
                        placeholder="Name (optional)"
                        class="rounded-md border bg-background px-3 py-2 text-sm"
                        prop:value=move || submission.with(|s| s.form.author_name.clone())
                        on:input=move |ev| edit(FormEdit::AuthorName(event_target_value(&ev)))
                    />
                    <input
                        type="text"
                        placeholder="Organization (optional)"
                        class="rounded-md border bg-background px-3 py-2 text-sm"
                        prop:value=move || submission.with(|s| s.form.organization.clone())
                        on:input=move |ev| edit(FormEdit::Organization(event_target_value(&ev)))
                    />
                </div>
                <input
                    type="email"
                    placeholder="Email (optional)"
                    class="w-full rounded-md border bg-background px-3 py-2 text-sm"
                    prop:value=move || submission.with(|s| s.form.email.clone())
                    on:input=move |ev| edit(FormEdit::Email(event_target_value(&ev)))
                />
                <Show when=move || submission.with(|s| s.form.shows_email_toggle())>
                    <label class="flex items-center gap-2 text-sm text-muted-foreground">
                        <input
                            type="checkbox"
                            prop:checked=move || submission.with(|s| s.form.is_email_public)
                            on:change=move |ev| {
                                edit(FormEdit::IsEmailPublic(event_target_checked(&ev)))
                            }
                        />
                        "Show my email publicly"
                    </label>
                </Show>
                <textarea
                    placeholder="Leave a message"
                    rows="4"
                    class="w-full rounded-md border bg-background px-3 py-2 text-sm"
                    prop:value=move || submission.with(|s| s.form.message.clone())
                    on:input=move |ev| edit(FormEdit::Message(event_target_value(&ev)))
                ></textarea>
                <button
                    type="submit"
                    class="w-full rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground disabled:opacity-50"
                    disabled=move || submission.with(|s| s.is_submitting)
                >
                    {move || {
                        if submission.with(|s| s.is_submitting) { "Signing..." } else { "Sign guestbook" }
                    }}
                </button>
            </form>
            <Transition fallback=loading_entries>
                {move || Suspend::new(async move {
                    entries.ready().await;
                    entries.state.with(entry_list)
                })}
            </Transition>
        </div>
    }
}
