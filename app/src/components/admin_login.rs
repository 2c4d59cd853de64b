//! Admin login button and password dialog.
//!
//! When the gate is open the button logs out directly; otherwise it opens a
//! dialog that checks the password through the [`AdminContext`].

use icondata::{BsBoxArrowRight, BsShieldLock, BsX};
use leptos::prelude::*;

use crate::admin::use_admin;
use crate::components::icons;

pub const WRONG_PASSWORD: &str = "Incorrect password. Please try again.";

pub fn component() -> impl IntoView {
    let admin = use_admin();
    let open = RwSignal::new(false);
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let close = move || {
        open.set(false);
        password.set(String::new());
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if admin.login(&password.get_untracked()) {
            close();
        } else {
            error.set(Some(WRONG_PASSWORD));
        }
    };

    view! {
        <button
            class=move || {
                if admin.is_admin() {
                    "flex gap-2 items-center py-2 px-3 text-sm rounded-lg transition-colors text-[#ffef5c] bg-[#ffef5c]/20"
                } else {
                    "flex gap-2 items-center py-2 px-3 text-sm rounded-lg transition-colors text-gray-400 hover:text-[#ffef5c]"
                }
            }
            aria-label=move || if admin.is_admin() { "Logout" } else { "Admin Login" }
            on:click=move |_| {
                if admin.is_admin() {
                    admin.logout();
                    close();
                } else {
                    open.set(true);
                }
            }
        >
            {move || {
                if admin.is_admin() {
                    view! { {icons::component(BsBoxArrowRight, "size-4")} <span>"Logout"</span> }.into_any()
                } else {
                    view! { {icons::component(BsShieldLock, "size-4")} <span class="hidden sm:inline">"Admin"</span> }.into_any()
                }
            }}
        </button>

        <Show when=move || open.get() && !admin.is_admin()>
            <div
                class="flex fixed inset-0 justify-center items-center p-4 z-[200] bg-black/50 backdrop-blur-sm"
                on:click=move |_| close()
            >
                <div
                    class="p-6 w-full max-w-md rounded-xl border shadow-2xl bg-[#2a2a2a] border-white/10"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex justify-between items-center mb-6">
                        <h2 class="text-2xl font-bold">"Admin Login"</h2>
                        <button class="p-2 rounded-lg hover:bg-white/10" aria-label="Close" on:click=move |_| close()>
                            {icons::component(BsX, "size-5")}
                        </button>
                    </div>
                    <form class="space-y-4" on:submit={on_submit.clone()}>
                        <input
                            type="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            class="py-3 px-4 w-full text-white rounded-lg focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]"
                        />
                        {move || error.get().map(|message| view! { <p class="text-sm text-red-300" role="alert">{message}</p> })}
                        <button type="submit" class="py-3 w-full font-semibold rounded-lg bg-[#ffef5c] text-[#1e1e1e] hover:bg-[#ffef5c]/90">
                            "Login"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
