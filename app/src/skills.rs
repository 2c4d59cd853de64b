//! Skill categories with their nested skills.
//!
//! Admins can add and delete categories, and add skills to a category. Deleting
//! a category removes its skills on the API side.

use icondata::{BsCode, BsPlus, BsTrash};
use leptos::{ev, logging, prelude::*, task::spawn_local};

use crate::admin::use_admin;
use crate::api::ApiClient;
use crate::components::{icons, status};
use crate::forms::{new_category, new_skill};
use crate::hooks::{ApiResource, use_api_client, use_collection};
use crate::resource::Status;
use crate::types::{Skill, SkillCategory};

const INPUT_CLASS: &str = "py-2 px-3 text-white rounded-lg focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]";

pub fn component() -> impl IntoView {
    let admin = use_admin();
    let client = use_api_client();
    let categories = use_collection::<SkillCategory>();

    let show_form = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let create_category = {
        let client = client.clone();
        let categories = categories.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let order_index = categories.with(|state| state.data.len());
            let payload = match new_category(&new_name.get_untracked(), order_index) {
                Ok(payload) => payload,
                Err(err) => {
                    logging::warn!("Category not created: {err}");
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let client = client.clone();
            let categories = categories.clone();
            spawn_local(async move {
                match client.create::<SkillCategory, _>(&payload).await {
                    Ok(_) => {
                        new_name.set(String::new());
                        form_error.set(None);
                        show_form.set(false);
                        categories.refresh().await;
                    }
                    Err(err) => {
                        logging::error!("Failed to create category: {err}");
                        form_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let stale = {
        let categories = categories.clone();
        move || status::stale(categories.with(|state| state.stale_error().map(str::to_owned)))
    };

    let body = {
        let categories = categories.clone();
        move || {
            let client = client.clone();
            let resource = categories.clone();
            categories.with(|state| match state.status() {
                Status::Loading => status::loading("skills").into_any(),
                Status::Failed(message) => status::failed(message.to_owned()).into_any(),
                Status::Empty => status::empty("No skills found.").into_any(),
                Status::Ready(list) => view! {
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                        {list.iter().cloned().map(|category| category_card(category, client.clone(), resource.clone())).collect_view()}
                    </div>
                }
                .into_any(),
            })
        }
    };

    view! {
        <section id="skills" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-5xl">
                <div class="flex justify-between items-center mb-12">
                    <h2 class="w-full text-4xl font-bold text-center sm:text-5xl">"Skills & Technologies"</h2>
                    <Show when=move || admin.is_admin()>
                        <button
                            title="Add Category"
                            aria-label="Add new skill category"
                            class="p-3 ml-4 rounded-lg border bg-[#ffef5c]/10 border-[#ffef5c]/20 hover:bg-[#ffef5c]/20"
                            on:click=move |_| show_form.update(|open| *open = !*open)
                        >
                            {icons::component(BsPlus, "size-5 text-[#ffef5c]")}
                        </button>
                    </Show>
                </div>
                <Show when=move || admin.is_admin() && show_form.get()>
                    <form class="grid gap-4 p-6 mx-auto mb-10 max-w-xl rounded-xl border shadow-lg bg-card border-white/10" on:submit={create_category.clone()}>
                        <input
                            placeholder="New category name"
                            class=INPUT_CLASS
                            prop:value=move || new_name.get()
                            on:input=move |ev| new_name.set(event_target_value(&ev))
                        />
                        {move || form_error.get().map(|message| view! { <p class="text-sm text-red-300" role="alert">{message}</p> })}
                        <div class="flex gap-3 justify-end">
                            <button type="button" class="py-2.5 px-6 rounded-lg border border-white/10" on:click=move |_| show_form.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="py-2.5 px-6 font-medium rounded-lg bg-[#ffef5c] text-[#1e1e1e]">
                                "Create Category"
                            </button>
                        </div>
                    </form>
                </Show>
                {stale}
                {body}
            </div>
        </section>
    }
}

fn category_card(
    category: SkillCategory,
    client: ApiClient,
    categories: ApiResource<Vec<SkillCategory>>,
) -> impl IntoView {
    let admin = use_admin();
    let id = category.id;
    let skill_name = RwSignal::new(String::new());
    let skill_error = RwSignal::new(None::<String>);
    let skill_count = category.skills.len();

    let delete_category = {
        let client = client.clone();
        let categories = categories.clone();
        move |_: ev::MouseEvent| {
            if !window()
                .confirm_with_message("Delete this category and all its skills?")
                .unwrap_or(false)
            {
                return;
            }
            let client = client.clone();
            let categories = categories.clone();
            spawn_local(async move {
                match client.delete::<SkillCategory>(id).await {
                    Ok(()) => {
                        categories.refresh().await;
                    }
                    Err(err) => logging::error!("Failed to delete category {id}: {err}"),
                }
            });
        }
    };

    let add_skill = {
        let client = client.clone();
        let categories = categories.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let payload = match new_skill(&skill_name.get_untracked(), id, skill_count) {
                Ok(payload) => payload,
                Err(err) => {
                    logging::warn!("Skill not added to category {id}: {err}");
                    skill_error.set(Some(err.to_string()));
                    return;
                }
            };
            let client = client.clone();
            let categories = categories.clone();
            spawn_local(async move {
                match client.create::<Skill, _>(&payload).await {
                    Ok(_) => {
                        skill_name.set(String::new());
                        skill_error.set(None);
                        categories.refresh().await;
                    }
                    Err(err) => {
                        logging::error!("Failed to add skill to category {id}: {err}");
                        skill_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let delete_skill = move |skill_id| {
        let client = client.clone();
        let categories = categories.clone();
        move |_: ev::MouseEvent| {
            let client = client.clone();
            let categories = categories.clone();
            spawn_local(async move {
                match client.delete::<Skill>(skill_id).await {
                    Ok(()) => {
                        categories.refresh().await;
                    }
                    Err(err) => logging::error!("Failed to delete skill {skill_id}: {err}"),
                }
            });
        }
    };

    view! {
        <div class="p-6 rounded-xl border transition-all duration-300 group bg-card border-white/10 hover:border-[#ffef5c]/50">
            <div class="flex justify-between items-center mb-4">
                <div class="flex gap-3 items-center">
                    <div class="p-2 rounded-lg border bg-[#ffef5c]/10 border-[#ffef5c]/20">
                        {icons::component(BsCode, "size-4 text-[#ffef5c]")}
                    </div>
                    <h3 class="text-lg font-bold transition-colors group-hover:text-[#ffef5c]">{category.name.clone()}</h3>
                </div>
                <Show when=move || admin.is_admin()>
                    <button
                        title="Delete Category"
                        aria-label=format!("Delete {} category", category.name)
                        class="p-2 rounded-lg border bg-red-500/10 border-red-500/20 hover:bg-red-500/20"
                        on:click={delete_category.clone()}
                    >
                        {icons::component(BsTrash, "size-4 text-red-300")}
                    </button>
                </Show>
            </div>
            <div class="flex flex-wrap gap-2 mb-4">
                {category.skills.iter().map(|skill| {
                    let on_delete = delete_skill.clone()(skill.id);
                    view! {
                        <span class="flex gap-1 items-center py-1.5 px-3 text-sm rounded-lg border bg-[#2a2a2a] border-white/10">
                            {skill.name.clone()}
                            <Show when=move || admin.is_admin()>
                                <button
                                    class="text-gray-500 hover:text-red-300"
                                    aria-label="Delete skill"
                                    on:click={on_delete.clone()}
                                >
                                    "\u{d7}"
                                </button>
                            </Show>
                        </span>
                    }
                }).collect_view()}
            </div>
            <Show when=move || admin.is_admin()>
                <form class="flex gap-2" on:submit={add_skill.clone()}>
                    <input
                        placeholder="Add skill"
                        class=format!("flex-1 {INPUT_CLASS}")
                        prop:value=move || skill_name.get()
                        on:input=move |ev| skill_name.set(event_target_value(&ev))
                    />
                    <button type="submit" class="py-2 px-4 text-sm font-medium rounded-lg bg-[#ffef5c] text-[#1e1e1e]">
                        "Add"
                    </button>
                </form>
                {move || skill_error.get().map(|message| view! { <p class="mt-2 text-sm text-red-300" role="alert">{message}</p> })}
            </Show>
        </div>
    }
}
