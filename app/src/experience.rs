//! Work history timeline with inline admin create and delete.

use icondata::{BsBriefcase, BsPlus, BsTrash};
use leptos::{logging, prelude::*, task::spawn_local};

use crate::admin::use_admin;
use crate::components::{icons, status};
use crate::forms::ExperienceForm;
use crate::hooks::{use_api_client, use_collection};
use crate::resource::Status;
use crate::types::{EntityId, Experience};

const INPUT_CLASS: &str = "py-3 px-4 text-white rounded-lg focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]";

pub fn component() -> impl IntoView {
    let admin = use_admin();
    let client = use_api_client();
    let experiences = use_collection::<Experience>();

    let show_form = RwSignal::new(false);
    let creating = RwSignal::new(false);
    let form = RwSignal::new(ExperienceForm::default());
    let form_error = RwSignal::new(None::<String>);

    let create = {
        let client = client.clone();
        let experiences = experiences.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let order_index = experiences.with(|state| state.data.len());
            let payload = match form.with_untracked(|form| form.to_new_experience(order_index)) {
                Ok(payload) => payload,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let client = client.clone();
            let experiences = experiences.clone();
            creating.set(true);
            spawn_local(async move {
                match client.create::<Experience, _>(&payload).await {
                    Ok(_) => {
                        form.set(ExperienceForm::default());
                        form_error.set(None);
                        show_form.set(false);
                        experiences.refresh().await;
                    }
                    Err(err) => {
                        logging::error!("Failed to create experience: {err}");
                        form_error.set(Some(err.to_string()));
                    }
                }
                creating.set(false);
            });
        }
    };

    let delete = {
        let client = client.clone();
        let experiences = experiences.clone();
        move |id: EntityId| {
            if !window().confirm_with_message("Delete this experience?").unwrap_or(false) {
                return;
            }
            let client = client.clone();
            let experiences = experiences.clone();
            spawn_local(async move {
                match client.delete::<Experience>(id).await {
                    Ok(()) => {
                        experiences.refresh().await;
                    }
                    Err(err) => logging::error!("Failed to delete experience {id}: {err}"),
                }
            });
        }
    };

    let input = move |placeholder: &'static str, get: fn(&ExperienceForm) -> String, set: fn(&mut ExperienceForm, String)| {
        view! {
            <input
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|form| set(form, value));
                }
            />
        }
    };

    let stale = {
        let experiences = experiences.clone();
        move || status::stale(experiences.with(|state| state.stale_error().map(str::to_owned)))
    };

    let timeline = {
        let experiences = experiences.clone();
        move || {
            let delete = delete.clone();
            experiences.with(|state| match state.status() {
                Status::Loading => status::loading("experience").into_any(),
                Status::Failed(message) => status::failed(message.to_owned()).into_any(),
                Status::Empty => status::empty("No experience entries found.").into_any(),
                Status::Ready(entries) => view! {
                    <ol class="relative space-y-8 border-l border-white/10">
                        {entries.iter().cloned().map(|entry| {
                            let delete = delete.clone();
                            let id = entry.id;
                            view! {
                                <li class="relative pl-8">
                                    <span class="flex absolute -left-4 justify-center items-center rounded-full border size-8 bg-[#2a2a2a] border-[#ffef5c]/30">
                                        {icons::component(BsBriefcase, "size-4 text-[#ffef5c]")}
                                    </span>
                                    <div class="p-6 rounded-xl border bg-card border-white/10">
                                        <div class="flex justify-between items-start mb-2">
                                            <div>
                                                <h3 class="text-xl font-bold">{entry.role}</h3>
                                                <p class="text-[#ffef5c]">{entry.company}</p>
                                            </div>
                                            <div class="flex gap-2 items-center">
                                                <span class="text-sm text-gray-400">{entry.period}</span>
                                                <Show when=move || admin.is_admin()>
                                                    <button
                                                        title="Delete Experience"
                                                        aria-label="Delete experience"
                                                        class="p-2 rounded-lg border bg-red-500/10 border-red-500/20 hover:bg-red-500/20"
                                                        on:click={
                                                            let delete = delete.clone();
                                                            move |_| delete(id)
                                                        }
                                                    >
                                                        {icons::component(BsTrash, "size-4 text-red-300")}
                                                    </button>
                                                </Show>
                                            </div>
                                        </div>
                                        <p class="mb-4 leading-relaxed text-gray-300">{entry.description}</p>
                                        <div class="flex flex-wrap gap-2">
                                            {entry.tags.unwrap_or_default().into_iter().map(|tag| view! {
                                                <span class="py-1 px-3 text-xs rounded-full border bg-[#ffef5c]/10 text-[#ffef5c] border-[#ffef5c]/20">{tag}</span>
                                            }).collect_view()}
                                        </div>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ol>
                }
                .into_any(),
            })
        }
    };

    view! {
        <section id="experience" class="py-24 px-4 sm:px-6 lg:px-8 bg-[#2a2a2a]/30">
            <div class="mx-auto max-w-5xl">
                <div class="flex justify-between items-center mb-12">
                    <div>
                        <h2 class="mb-4 text-4xl font-bold sm:text-5xl">"Professional Experience"</h2>
                        <p class="text-lg text-gray-400">"My career journey and achievements"</p>
                    </div>
                    <Show when=move || admin.is_admin()>
                        <button
                            title="Add Experience"
                            aria-label="Add new experience"
                            class="p-3 rounded-lg border bg-[#ffef5c]/10 border-[#ffef5c]/20 hover:bg-[#ffef5c]/20"
                            on:click=move |_| show_form.update(|open| *open = !*open)
                        >
                            {icons::component(BsPlus, "size-5 text-[#ffef5c]")}
                        </button>
                    </Show>
                </div>
                <Show when=move || admin.is_admin() && show_form.get()>
                    <form class="grid gap-4 p-6 mb-10 rounded-xl border shadow-lg bg-card border-white/10" on:submit={create.clone()}>
                        <div class="grid gap-4 md:grid-cols-2">
                            {input("Role", |f| f.role.clone(), |f, v| f.role = v)}
                            {input("Company", |f| f.company.clone(), |f, v| f.company = v)}
                        </div>
                        <div class="grid gap-4 md:grid-cols-3">
                            {input("Period (e.g., 2023 - Present)", |f| f.period.clone(), |f, v| f.period = v)}
                            {input("Start Date (YYYY-MM)", |f| f.start_date.clone(), |f, v| f.start_date = v)}
                            {input("End Date (YYYY-MM)", |f| f.end_date.clone(), |f, v| f.end_date = v)}
                        </div>
                        <textarea
                            placeholder="Description"
                            rows="4"
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.description = value);
                            }
                        />
                        {input("Tags (comma-separated)", |f| f.tags.clone(), |f, v| f.tags = v)}
                        {move || form_error.get().map(|message| view! { <p class="text-sm text-red-300" role="alert">{message}</p> })}
                        <div class="flex gap-3 justify-end">
                            <button type="button" class="py-2.5 px-6 rounded-lg border border-white/10" on:click=move |_| show_form.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" disabled=move || creating.get() class="py-2.5 px-6 font-medium rounded-lg disabled:opacity-50 bg-[#ffef5c] text-[#1e1e1e]">
                                {move || if creating.get() { "Creating..." } else { "Create Experience" }}
                            </button>
                        </div>
                    </form>
                </Show>
                {stale}
                {timeline}
            </div>
        </section>
    }
}
