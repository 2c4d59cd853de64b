//! Contact section: a public message form plus the admin inbox.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use icondata::{BsChatDots, BsEnvelope, BsSend, BsTrash};
use leptos::{ev, logging, prelude::*, task::spawn_local};

use crate::admin::use_admin;
use crate::api::ApiClient;
use crate::components::{icons, status};
use crate::forms::ContactForm;
use crate::hooks::{ApiResource, use_api_client, use_collection};
use crate::resource::Status;
use crate::types::{ContactMessage, EntityId};

const CONTACT_EMAIL: &str = "bidouliwork@gmail.com";
const SENT_NOTICE: Duration = Duration::from_secs(3);
const INPUT_CLASS: &str = "py-3 px-4 text-white rounded-lg border transition-all focus:ring-2 focus:outline-none bg-[#1e1e1e] border-white/10 focus:ring-[#ffef5c]";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Submission {
    Idle,
    Sending,
    Sent,
}

impl Submission {
    fn label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Sent => "Message Sent!",
        }
    }
}

/// Renders a timestamp from the API as a calendar date, or "N/A" when absent.
///
/// Accepts RFC 3339 as well as the naive `YYYY-MM-DDTHH:MM:SS` form the API
/// emits. Anything unparseable is shown verbatim.
pub fn display_date(created_at: Option<&str>) -> String {
    let Some(raw) = created_at.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return "N/A".to_owned();
    };
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|parsed| parsed.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|parsed| parsed.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

fn status_badge_class(status: &str) -> &'static str {
    match status {
        "new" => "bg-blue-500/20 text-blue-400",
        "read" => "bg-green-500/20 text-green-400",
        _ => "bg-gray-500/20 text-gray-400",
    }
}

pub fn component() -> impl IntoView {
    let admin = use_admin();
    let client = use_api_client();

    let form = RwSignal::new(ContactForm::default());
    let submission = RwSignal::new(Submission::Idle);
    let form_error = RwSignal::new(None::<String>);
    // Set once the inbox is mounted so a new message shows up there immediately.
    let inbox = RwSignal::new(None::<ApiResource<Vec<ContactMessage>>>);

    let submit = {
        let client = client.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let payload = match form.with_untracked(ContactForm::to_new_contact) {
                Ok(payload) => payload,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let client = client.clone();
            form_error.set(None);
            submission.set(Submission::Sending);
            spawn_local(async move {
                match client.create::<ContactMessage, _>(&payload).await {
                    Ok(_) => {
                        form.set(ContactForm::default());
                        submission.set(Submission::Sent);
                        if let Some(inbox) = inbox.get_untracked() {
                            inbox.refresh().await;
                        }
                        set_timeout(move || submission.set(Submission::Idle), SENT_NOTICE);
                    }
                    Err(err) => {
                        logging::error!("Failed to send contact message: {err}");
                        form_error.set(Some(err.to_string()));
                        submission.set(Submission::Idle);
                    }
                }
            });
        }
    };

    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&ContactForm) -> String, set: fn(&mut ContactForm, String)| {
        view! {
            <input
                type=kind
                placeholder=placeholder
                required
                class=INPUT_CLASS
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|form| set(form, value));
                }
            />
        }
    };

    view! {
        <section id="contact" class="py-24 px-4 sm:px-6 lg:px-8 bg-[#2a2a2a]/30">
            <div class="mx-auto max-w-4xl">
                <div class="mb-16 text-center">
                    <h2 class="mb-4 text-4xl font-bold sm:text-5xl">"Get In Touch"</h2>
                    <p class="mt-6 text-lg text-gray-400">"Have a project in mind? Let's collaborate!"</p>
                </div>
                <div class="grid gap-6 mb-12 md:grid-cols-2">
                    <div class="p-6 rounded-xl border transition-all duration-300 bg-card border-white/10 hover:border-[#ffef5c]/50">
                        <div class="p-3 mb-4 rounded-lg border w-fit bg-[#ffef5c]/10 border-[#ffef5c]/20">
                            {icons::component(BsEnvelope, "size-6 text-[#ffef5c]")}
                        </div>
                        <h3 class="mb-2 text-lg font-bold">"Email"</h3>
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            aria-label=format!("Send email to {CONTACT_EMAIL}")
                            class="text-gray-400 transition-colors hover:text-[#ffef5c]"
                        >
                            {CONTACT_EMAIL}
                        </a>
                    </div>
                    <div class="p-6 rounded-xl border transition-all duration-300 bg-card border-white/10 hover:border-[#ffef5c]/50">
                        <div class="p-3 mb-4 rounded-lg border w-fit bg-[#ffef5c]/10 border-[#ffef5c]/20">
                            {icons::component(BsChatDots, "size-6 text-[#ffef5c]")}
                        </div>
                        <h3 class="mb-2 text-lg font-bold">"Direct Message"</h3>
                        <p class="text-gray-400">"Connect with me on LinkedIn"</p>
                    </div>
                </div>
                <form class="space-y-4" on:submit=submit>
                    <div class="grid gap-4 md:grid-cols-2">
                        {field("Your Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                        {field("Your Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    </div>
                    <textarea
                        placeholder="Your Message"
                        rows="5"
                        required
                        class=format!("w-full resize-none {INPUT_CLASS}")
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.message = value);
                        }
                    />
                    {move || form_error.get().map(|message| view! {
                        <div class="p-3 text-sm text-red-300 rounded-lg border bg-red-500/10 border-red-500" role="alert">
                            {message}
                        </div>
                    })}
                    <button
                        type="submit"
                        disabled=move || submission.get() != Submission::Idle
                        class="flex gap-2 justify-center items-center py-3.5 px-6 w-full font-semibold rounded-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed bg-[#ffef5c] text-[#1e1e1e]"
                    >
                        {move || submission.get().label()}
                        <Show when=move || submission.get() == Submission::Idle>
                            {icons::component(BsSend, "size-4")}
                        </Show>
                    </button>
                </form>
                <Show when=move || admin.is_admin()>
                    {messages_table(client.clone(), inbox)}
                </Show>
            </div>
        </section>
    }
}

/// The inbox only fetches once an admin can see it.
/// Display values of one inbox row, each owned by the cell that shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InboxRow {
    name: String,
    email: String,
    mailto: String,
    message: String,
    preview: String,
    status: String,
    badge_class: String,
    date: String,
    delete_label: String,
}

impl From<ContactMessage> for InboxRow {
    fn from(message: ContactMessage) -> Self {
        let status = message.status.unwrap_or_else(|| "new".to_owned());
        Self {
            mailto: format!("mailto:{}", message.email),
            preview: message.message.clone(),
            badge_class: format!("py-1 px-2 text-xs rounded {}", status_badge_class(&status)),
            date: display_date(message.created_at.as_deref()),
            delete_label: format!("Delete message from {}", message.name),
            name: message.name,
            email: message.email,
            message: message.message,
            status,
        }
    }
}

fn messages_table(
    client: ApiClient,
    inbox: RwSignal<Option<ApiResource<Vec<ContactMessage>>>>,
) -> impl IntoView {
    let messages = use_collection::<ContactMessage>();
    inbox.set(Some(messages.clone()));
    on_cleanup(move || inbox.set(None));

    let delete = {
        let messages = messages.clone();
        move |id: EntityId| {
            let client = client.clone();
            let messages = messages.clone();
            move |_: ev::MouseEvent| {
                if !window().confirm_with_message("Delete this message?").unwrap_or(false) {
                    return;
                }
                let client = client.clone();
                let messages = messages.clone();
                spawn_local(async move {
                    match client.delete::<ContactMessage>(id).await {
                        Ok(()) => {
                            messages.refresh().await;
                        }
                        Err(err) => logging::error!("Failed to delete contact {id}: {err}"),
                    }
                });
            }
        }
    };

    let title = {
        let messages = messages.clone();
        move || format!("Messages ({})", messages.with(|state| state.data.len()))
    };

    let stale = {
        let messages = messages.clone();
        move || status::stale(messages.with(|state| state.stale_error().map(str::to_owned)))
    };

    let body = move || {
        let delete = delete.clone();
        messages.with(|state| match state.status() {
            Status::Loading => status::loading("messages").into_any(),
            Status::Failed(message) => status::failed(message.to_owned()).into_any(),
            Status::Empty => status::empty("No messages yet.").into_any(),
            Status::Ready(list) => view! {
                <div class="overflow-x-auto rounded-xl border border-white/10">
                    <table class="w-full rounded-lg border-collapse bg-card">
                        <thead>
                            <tr class="border-b border-white/10">
                                <th class="py-3 px-4 text-sm font-semibold text-left">"Name"</th>
                                <th class="py-3 px-4 text-sm font-semibold text-left">"Email"</th>
                                <th class="py-3 px-4 text-sm font-semibold text-left">"Message"</th>
                                <th class="py-3 px-4 text-sm font-semibold text-left">"Status"</th>
                                <th class="py-3 px-4 text-sm font-semibold text-left">"Date"</th>
                                <th class="py-3 px-4 text-sm font-semibold text-center">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list.iter().cloned().map(|message| {
                                let on_delete = delete(message.id);
                                let row = InboxRow::from(message);
                                view! {
                                    <tr class="border-b transition-colors border-white/10 hover:bg-[#2a2a2a]/50">
                                        <td class="py-3 px-4 text-sm font-medium">{row.name}</td>
                                        <td class="py-3 px-4 text-sm">
                                            <a href=row.mailto class="hover:underline text-[#ffef5c]">
                                                {row.email}
                                            </a>
                                        </td>
                                        <td class="py-3 px-4 max-w-md text-sm text-gray-400">
                                            <div class="truncate" title=row.preview>{row.message}</div>
                                        </td>
                                        <td class="py-3 px-4 text-sm">
                                            <span class=row.badge_class>{row.status}</span>
                                        </td>
                                        <td class="py-3 px-4 text-sm text-gray-400">{row.date}</td>
                                        <td class="py-3 px-4 text-center">
                                            <button
                                                title="Delete Message"
                                                aria-label=row.delete_label
                                                class="p-2 rounded-lg border bg-red-500/10 border-red-500/20 hover:bg-red-500/20"
                                                on:click=on_delete
                                            >
                                                {icons::component(BsTrash, "size-4 text-red-300")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <div class="mt-20">
            <h3 class="mb-8 text-2xl font-bold text-center sm:text-3xl">{title}</h3>
            {stale}
            {body}
        </div>
    }
}
