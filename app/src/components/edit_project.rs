//! Modal dialog editing an existing project.

use icondata::BsX;
use leptos::{logging, prelude::*, task::spawn_local};

use crate::api::ApiClient;
use crate::components::icons;
use crate::forms::ProjectForm;
use crate::hooks::ApiResource;
use crate::types::Project;

/// Renders the dialog while `editing` holds a project. Saving issues a partial
/// update and refreshes `projects`; the dialog stays open with an inline error
/// if the request fails.
pub fn component(
    editing: RwSignal<Option<Project>>,
    projects: ApiResource<Vec<Project>>,
    client: ApiClient,
) -> impl IntoView {
    let form = RwSignal::new(ProjectForm::default());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if let Some(project) = editing.get() {
            form.set(ProjectForm::from_project(&project));
            error.set(None);
        }
    });

    let close = move || editing.set(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = editing.with_untracked(|project| project.as_ref().map(|p| p.id)) else {
            return;
        };
        let changes = match form.with_untracked(ProjectForm::to_changes) {
            Ok(changes) => changes,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        let client = client.clone();
        let projects = projects.clone();
        saving.set(true);
        spawn_local(async move {
            match client.update::<Project, _>(id, &changes).await {
                Ok(_) => {
                    projects.refresh().await;
                    close();
                }
                Err(err) => {
                    logging::error!("Failed to update project {id}: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let field = move |label: &'static str, get: fn(&ProjectForm) -> String, set: fn(&mut ProjectForm, String)| {
        view! {
            <label class="flex flex-col gap-1 text-sm">
                <span class="text-gray-400">{label}</span>
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|form| set(form, value));
                    }
                    class="py-2 px-3 text-white rounded-lg focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]"
                />
            </label>
        }
    };

    view! {
        <Show when=move || editing.with(Option::is_some)>
            <div
                class="flex fixed inset-0 justify-center items-center p-4 z-[200] bg-black/50 backdrop-blur-sm"
                on:click=move |_| close()
            >
                <div
                    class="overflow-y-auto p-6 w-full max-w-2xl rounded-xl border shadow-2xl max-h-[90vh] bg-[#2a2a2a] border-white/10"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex justify-between items-center mb-6">
                        <h2 class="text-2xl font-bold">"Edit Project"</h2>
                        <button class="p-2 rounded-lg hover:bg-white/10" aria-label="Close" on:click=move |_| close()>
                            {icons::component(BsX, "size-5")}
                        </button>
                    </div>
                    <form class="grid gap-4" on:submit={on_submit.clone()}>
                        {field("Title", |f| f.title.clone(), |f, v| f.title = v)}
                        <label class="flex flex-col gap-1 text-sm">
                            <span class="text-gray-400">"Description"</span>
                            <textarea
                                rows="4"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.description = value);
                                }
                                class="py-2 px-3 text-white rounded-lg resize-none focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]"
                            />
                        </label>
                        {field("Image URL", |f| f.image.clone(), |f, v| f.image = v)}
                        {field("Live URL", |f| f.live_url.clone(), |f, v| f.live_url = v)}
                        {field("GitHub URL", |f| f.github_url.clone(), |f, v| f.github_url = v)}
                        {field("Tags (comma-separated)", |f| f.tags.clone(), |f, v| f.tags = v)}
                        {move || error.get().map(|message| view! { <p class="text-sm text-red-300" role="alert">{message}</p> })}
                        <div class="flex gap-3 justify-end">
                            <button type="button" class="py-2 px-5 rounded-lg border border-white/10 hover:bg-white/10" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                disabled=move || saving.get()
                                class="py-2 px-5 font-medium rounded-lg disabled:opacity-50 bg-[#ffef5c] text-[#1e1e1e]"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
