//! Project grid with drag-to-reorder and inline admin controls.
//!
//! The grid renders the working list of an [`OrderedCollection`] rather than
//! the fetched collection directly. A drop reorders the working list at once;
//! the new positions are then written concurrently and the grid either picks
//! up the reloaded collection or snaps back to the order before the drop.
//! Dragging is offered to admins only, and only while no batch is in flight.

use icondata::{BsBoxArrowUpRight, BsGithub, BsGripVertical, BsPencil, BsPlus, BsTrash, BsX};
use leptos::{ev, logging, prelude::*, task::spawn_local};

use crate::admin::use_admin;
use crate::api::{ApiClient, RequestError};
use crate::components::{edit_project, icons, status};
use crate::forms::ProjectForm;
use crate::hooks::{ApiResource, use_api_client, use_collection};
use crate::reorder::{AfterPersist, OrderPersistence, OrderedCollection, persist_plan};
use crate::resource::Status;
use crate::types::{EntityId, Project};

const INPUT_CLASS: &str = "py-3 px-4 text-white rounded-lg focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]";

/// Position writes go to the API; the reload goes through the section's hook
/// so that its cached collection is refreshed along with the grid.
struct HookedPersistence {
    client: ApiClient,
    projects: ApiResource<Vec<Project>>,
}

impl OrderPersistence<Project> for HookedPersistence {
    async fn persist_position(
        &self,
        id: EntityId,
        order_index: usize,
    ) -> Result<(), RequestError> {
        OrderPersistence::<Project>::persist_position(&self.client, id, order_index).await
    }

    async fn reload(&self) -> Result<Vec<Project>, RequestError> {
        self.projects.refetch().await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pane {
    Loading,
    Failed(String),
    Empty,
    Grid,
}

/// Everything a card needs to act on the collection.
#[derive(Clone)]
struct Board {
    client: ApiClient,
    projects: ApiResource<Vec<Project>>,
    order: RwSignal<OrderedCollection<Project>>,
    editing: RwSignal<Option<Project>>,
    enlarged: RwSignal<Option<String>>,
}

impl Board {
    fn start_drag(&self, id: EntityId) -> bool {
        match self.order.try_update(|order| order.begin_drag(id)) {
            Some(Ok(())) => true,
            Some(Err(err)) => {
                logging::log!("Drag of project {id} not started: {err}");
                false
            }
            None => false,
        }
    }

    fn end_drag(&self) {
        self.order.update(OrderedCollection::cancel_drag);
    }

    /// Completes a drag over `target` and persists the resulting order.
    fn drop_on(&self, target: EntityId) {
        let plan = match self.order.try_update(|order| order.drop_on(target)) {
            Some(Ok(Some(plan))) => plan,
            Some(Ok(None)) | None => return,
            Some(Err(err)) => {
                logging::warn!("Ignoring drop on project {target}: {err}");
                return;
            }
        };

        let order = self.order;
        let persistence = HookedPersistence {
            client: self.client.clone(),
            projects: self.projects.clone(),
        };
        spawn_local(async move {
            let written = persist_plan::<Project, _>(&persistence, &plan).await;
            if let Some(AfterPersist::Reconcile) = order.try_update(|order| order.persisted(written)) {
                let reloaded = persistence.reload().await;
                order.try_update(|order| order.reconciled(reloaded));
            }
        });
    }

    fn delete(&self, id: EntityId) {
        if !window().confirm_with_message("Delete this project?").unwrap_or(false) {
            return;
        }
        let client = self.client.clone();
        let projects = self.projects.clone();
        spawn_local(async move {
            match client.delete::<Project>(id).await {
                Ok(()) => {
                    projects.refresh().await;
                }
                Err(err) => logging::error!("Failed to delete project {id}: {err}"),
            }
        });
    }
}

pub fn component() -> impl IntoView {
    let admin = use_admin();
    let client = use_api_client();
    let projects = use_collection::<Project>();

    let board = Board {
        client: client.clone(),
        projects: projects.clone(),
        order: RwSignal::new(OrderedCollection::default()),
        editing: RwSignal::new(None),
        enlarged: RwSignal::new(None),
    };

    // The working list follows the fetched collection whenever it changes.
    let fetched = Memo::new({
        let projects = projects.clone();
        move |_| projects.data()
    });
    let order = board.order;
    Effect::new(move |_| {
        let items = fetched.get();
        order.update(|order| order.sync(items));
    });

    let pane = Memo::new({
        let projects = projects.clone();
        move |_| {
            projects.with(|state| match state.status() {
                Status::Loading => Pane::Loading,
                Status::Failed(message) => Pane::Failed(message.to_owned()),
                Status::Empty => Pane::Empty,
                Status::Ready(_) => Pane::Grid,
            })
        }
    });

    let stale = {
        let projects = projects.clone();
        move || status::stale(projects.with(|state| state.stale_error().map(str::to_owned)))
    };

    let show_form = RwSignal::new(false);
    let creating = RwSignal::new(false);
    let form = RwSignal::new(ProjectForm::default());
    let form_error = RwSignal::new(None::<String>);

    let create = {
        let client = client.clone();
        let projects = projects.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let order_index = projects.with(|state| state.data.len());
            let payload = match form.with_untracked(|form| form.to_new_project(order_index)) {
                Ok(payload) => payload,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let client = client.clone();
            let projects = projects.clone();
            creating.set(true);
            spawn_local(async move {
                match client.create::<Project, _>(&payload).await {
                    Ok(_) => {
                        form.set(ProjectForm::default());
                        form_error.set(None);
                        show_form.set(false);
                        projects.refresh().await;
                    }
                    Err(err) => {
                        logging::error!("Failed to create project: {err}");
                        form_error.set(Some(err.to_string()));
                    }
                }
                creating.set(false);
            });
        }
    };

    let input = move |placeholder: &'static str, get: fn(&ProjectForm) -> String, set: fn(&mut ProjectForm, String)| {
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

    let content = {
        let board = board.clone();
        move || match pane.get() {
            Pane::Loading => status::loading("projects").into_any(),
            Pane::Failed(message) => status::failed(message).into_any(),
            Pane::Empty => status::empty("No projects found.").into_any(),
            Pane::Grid => grid(board.clone()).into_any(),
        }
    };

    let enlarged = board.enlarged;

    view! {
        <section id="projects" class="py-24 px-4 sm:px-6 lg:px-8 bg-[#2a2a2a]/30">
            <div class="mx-auto max-w-6xl">
                <div class="relative mb-12 text-center">
                    <h2 class="mb-4 text-4xl font-bold sm:text-5xl">"Featured Projects"</h2>
                    <p class="text-lg text-gray-400">"Showcasing my best work and creative solutions"</p>
                    <Show when=move || admin.is_admin()>
                        <button
                            title="Add Project"
                            aria-label="Add new project"
                            class="absolute top-0 right-0 p-3 rounded-lg border bg-[#ffef5c]/10 border-[#ffef5c]/20 hover:bg-[#ffef5c]/20"
                            on:click=move |_| show_form.update(|open| *open = !*open)
                        >
                            {icons::component(BsPlus, "size-5 text-[#ffef5c]")}
                        </button>
                    </Show>
                </div>
                <Show when=move || admin.is_admin() && show_form.get()>
                    <form class="grid gap-4 p-6 mb-12 rounded-xl border shadow-lg bg-card border-white/10" on:submit={create.clone()}>
                        <div class="grid gap-4 md:grid-cols-2">
                            {input("Title", |f| f.title.clone(), |f, v| f.title = v)}
                            {input("Image URL", |f| f.image.clone(), |f, v| f.image = v)}
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
                        <div class="grid gap-4 md:grid-cols-3">
                            {input("Live URL", |f| f.live_url.clone(), |f, v| f.live_url = v)}
                            {input("GitHub URL", |f| f.github_url.clone(), |f, v| f.github_url = v)}
                            {input("Tags (comma-separated)", |f| f.tags.clone(), |f, v| f.tags = v)}
                        </div>
                        {move || form_error.get().map(|message| view! { <p class="text-sm text-red-300" role="alert">{message}</p> })}
                        <div class="flex gap-3 justify-end">
                            <button type="button" class="py-2.5 px-6 rounded-lg border border-white/10" on:click=move |_| show_form.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" disabled=move || creating.get() class="py-2.5 px-6 font-medium rounded-lg disabled:opacity-50 bg-[#ffef5c] text-[#1e1e1e]">
                                {move || if creating.get() { "Creating..." } else { "Create Project" }}
                            </button>
                        </div>
                    </form>
                </Show>
                {stale}
                {content}
            </div>
        </section>

        {edit_project::component(board.editing, projects, client)}

        <Show when=move || enlarged.with(Option::is_some)>
            <div
                class="flex fixed inset-0 justify-center items-center p-4 z-[100] bg-black/90 backdrop-blur-sm"
                on:click=move |_| enlarged.set(None)
            >
                <button class="absolute top-4 right-4 p-3 rounded-lg bg-white/10" aria-label="Close image">
                    {icons::component(BsX, "size-6")}
                </button>
                <img
                    src=move || enlarged.get().unwrap_or_default()
                    alt="Full size project image"
                    class="object-contain max-w-full rounded-lg max-h-[90vh]"
                    on:click=|ev| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}

/// The reorderable grid over the working list.
fn grid(board: Board) -> impl IntoView {
    let order = board.order;
    view! {
        <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
            <For
                each=move || order.with(|order| order.items().to_vec())
                key=|project| (project.id, project.updated_at.clone(), project.order_index)
                children=move |project| card(project, board.clone())
            />
        </div>
    }
}

fn card(project: Project, board: Board) -> impl IntoView {
    let admin = use_admin();
    let id = project.id;
    let order = board.order;
    let draggable = move || {
        admin.is_admin() && order.with(|order| order.can_reorder() && !order.is_busy())
    };

    let on_dragstart = {
        let board = board.clone();
        move |ev: ev::DragEvent| {
            if !board.start_drag(id) {
                ev.prevent_default();
                return;
            }
            if let Some(transfer) = ev.data_transfer()
                && transfer.set_data("text/plain", &id.to_string()).is_err()
            {
                logging::warn!("Could not attach project {id} to the drag");
            }
        }
    };
    let on_drop = {
        let board = board.clone();
        move |ev: ev::DragEvent| {
            ev.prevent_default();
            board.drop_on(id);
        }
    };
    let on_dragend = {
        let board = board.clone();
        move |_: ev::DragEvent| board.end_drag()
    };
    let on_delete = {
        let board = board.clone();
        move |_: ev::MouseEvent| board.delete(id)
    };
    let on_edit = {
        let project = project.clone();
        let editing = board.editing;
        move |_: ev::MouseEvent| editing.set(Some(project.clone()))
    };
    let enlarged = board.enlarged;

    view! {
        <article
            class="overflow-hidden relative rounded-xl border transition-all duration-300 group bg-card border-white/10 hover:border-[#ffef5c]/50"
            class:opacity-50=move || order.with(|order| order.dragging() == Some(id))
            draggable=move || draggable().to_string()
            on:dragstart=on_dragstart
            on:dragover=move |ev: ev::DragEvent| {
                if order.with(|order| order.dragging().is_some()) {
                    ev.prevent_default();
                }
            }
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <Show when=move || admin.is_admin()>
                <div class="flex absolute top-3 left-3 z-10 gap-2">
                    <span
                        class="p-2 rounded-lg border cursor-grab bg-[#1e1e1e]/80 border-white/10"
                        aria-label="Drag to reorder"
                    >
                        {icons::component(BsGripVertical, "size-4 text-gray-400")}
                    </span>
                    <button
                        title="Edit Project"
                        aria-label="Edit project"
                        class="p-2 rounded-lg border bg-[#ffef5c]/10 border-[#ffef5c]/20 hover:bg-[#ffef5c]/20"
                        on:click={on_edit.clone()}
                    >
                        {icons::component(BsPencil, "size-4 text-[#ffef5c]")}
                    </button>
                    <button
                        title="Delete Project"
                        aria-label="Delete project"
                        class="p-2 rounded-lg border bg-red-500/10 border-red-500/20 hover:bg-red-500/20"
                        on:click={on_delete.clone()}
                    >
                        {icons::component(BsTrash, "size-4 text-red-300")}
                    </button>
                </div>
            </Show>
            {project.image.clone().map(|image| {
                let full = image.clone();
                view! {
                    <button
                        class="block overflow-hidden w-full h-56 bg-[#2a2a2a]"
                        aria-label="View full image"
                        on:click=move |_| enlarged.set(Some(full.clone()))
                    >
                        <img src=image alt=project.title.clone() loading="lazy" draggable="false" class="object-cover w-full h-full transition-transform duration-500 group-hover:scale-110"/>
                    </button>
                }
            })}
            <div class="p-6">
                <h3 class="mb-3 text-xl font-bold transition-colors group-hover:text-[#ffef5c]">{project.title.clone()}</h3>
                <p class="mb-4 text-sm leading-relaxed text-gray-400 line-clamp-3">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project.tag_list().iter().cloned().map(|tag| view! {
                        <span class="py-1 px-3 text-xs font-medium rounded-full border bg-[#ffef5c]/10 text-[#ffef5c] border-[#ffef5c]/20">{tag}</span>
                    }).collect_view()}
                </div>
                <div class="flex gap-3">
                    {project.live_url.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="flex flex-1 gap-2 justify-center items-center py-2.5 px-4 text-sm font-medium rounded-lg bg-[#ffef5c] text-[#1e1e1e]">
                            {icons::component(BsBoxArrowUpRight, "size-4")}
                            "View Live"
                        </a>
                    })}
                    {project.github_url.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="flex flex-1 gap-2 justify-center items-center py-2.5 px-4 text-sm font-medium rounded-lg border border-white/10 hover:bg-white/10">
                            {icons::component(BsGithub, "size-4")}
                            "Code"
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}
