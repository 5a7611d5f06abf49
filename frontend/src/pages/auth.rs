use crate::api::auth::{current_session, sign_in, sign_up, store_session};
use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Combined login and registration screen. The only page that renders
/// without a session; everything else redirects here.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let navigator = use_navigator();
    let is_register = use_state(|| false);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let info_message = use_state(|| None::<String>);

    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if current_session().is_some() {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            }
            || ()
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let navigator = navigator.clone();
        let is_register = is_register.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let info_message = info_message.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();

            let email_value = email.trim().to_string();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() {
                error_message.set(Some("Please enter email and password".to_string()));
                return;
            }

            let navigator = navigator.clone();
            let is_register = is_register.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            let info_message = info_message.clone();
            let register = *is_register;

            loading.set(true);
            error_message.set(None);
            info_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                if register {
                    match sign_up(&email_value, &password_value).await {
                        Ok(Some(session)) => {
                            if let Err(e) = store_session(&session) {
                                error_message.set(Some(e));
                            } else if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        }
                        Ok(None) => {
                            info_message.set(Some(
                                "Check your email to confirm your account, then login".to_string(),
                            ));
                            is_register.set(false);
                        }
                        Err(e) => {
                            error_message.set(Some(format!("Registration failed: {}", e)));
                        }
                    }
                } else {
                    match sign_in(&email_value, &password_value).await {
                        Ok(session) => {
                            if let Err(e) = store_session(&session) {
                                error_message.set(Some(e));
                            } else if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        }
                        Err(e) => {
                            error_message.set(Some(format!("Login failed: {}", e)));
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_toggle_mode = {
        let is_register = is_register.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| {
            is_register.set(!*is_register);
            error_message.set(None);
        })
    };

    let submit_label = match (*is_register, *loading) {
        (true, true) => "Registering...",
        (true, false) => "Register",
        (false, true) => "Logging in...",
        (false, false) => "Login",
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-md">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-2">{ get_app_name() }</h1>
                <p class="text-center text-gray-500 mb-6">
                    { if *is_register { "Create your account" } else { "Sign in to continue" } }
                </p>

                {
                    if let Some(msg) = &*error_message {
                        html! {
                            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                                { msg }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(msg) = &*info_message {
                        html! {
                            <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4">
                                { msg }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <form onsubmit={on_submit}>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2">{"Email"}</label>
                        <input
                            type="email"
                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="you@university.edu"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            disabled={*loading}
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 text-sm font-bold mb-2">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Enter your password..."
                            value={(*password).clone()}
                            oninput={on_password_input}
                            disabled={*loading}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700 disabled:opacity-50"
                    >
                        { submit_label }
                    </button>
                </form>

                <div class="text-center mt-4">
                    <button onclick={on_toggle_mode} class="text-blue-600 hover:underline text-sm">
                        {
                            if *is_register {
                                "Already have an account? Login"
                            } else {
                                "Need an account? Register"
                            }
                        }
                    </button>
                </div>
            </div>
        </div>
    }
}
