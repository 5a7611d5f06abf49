use crate::api::auth::{current_session, sign_out};
use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    pub children: Children,
}

/// Shell around every signed-in page: sidebar navigation plus the session
/// guard. Without a stored session the user lands on the auth page and
/// nothing of the wrapped page is rendered.
#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    let session = use_state(current_session);
    let navigator = use_navigator();

    {
        let session = session.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if session.is_none() {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Auth);
                }
            }
            || ()
        });
    }

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = sign_out().await {
                    log::warn!("Sign out failed: {}", e);
                }
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Auth);
                }
            });
        })
    };

    if session.is_none() {
        return html! {};
    }

    let nav_link = "flex items-center gap-3 px-4 py-3 rounded-lg text-gray-300 hover:bg-gray-600 hover:text-white";

    html! {
        <div class="min-h-screen flex w-full bg-gray-700">
            <aside class="w-64 bg-gray-800 flex flex-col p-4">
                <div class="mb-8">
                    <h1 class="text-2xl font-bold text-white mb-1">{ get_app_name() }</h1>
                    <p class="text-sm text-gray-400">{"Educational videos for campus"}</p>
                </div>
                <nav class="flex flex-col gap-2">
                    <Link<Route> to={Route::Home} classes={nav_link}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Browse} classes={nav_link}>{"Browse"}</Link<Route>>
                    <Link<Route> to={Route::Upload} classes={nav_link}>{"Upload"}</Link<Route>>
                    <Link<Route> to={Route::Dashboard} classes={nav_link}>{"My Videos"}</Link<Route>>
                    <Link<Route> to={Route::Favorites} classes={nav_link}>{"Favorites"}</Link<Route>>
                    <Link<Route> to={Route::Profile} classes={nav_link}>{"Profile"}</Link<Route>>
                    <button
                        onclick={on_logout}
                        class="flex items-center gap-3 px-4 py-3 rounded-lg text-gray-300 hover:bg-gray-600 hover:text-white text-left mt-4"
                    >
                        {"Logout"}
                    </button>
                </nav>
            </aside>

            <main class="flex-1 overflow-auto">
                <div class="container mx-auto p-6">
                    { for props.children.iter() }
                </div>
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}
