use crate::api::auth::current_session;
use crate::api::{profiles, uploads};
use crate::components::layout::{AppLayout, ErrorMessage};
use crate::config::{AVATAR_BUCKET, MAX_AVATAR_BYTES};
use crate::models::NewProfile;
use crate::utils::{avatar_initial, format_name_from_email};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

fn file_from_input(e: &Event) -> Option<File> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|files| files.get(0))
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let avatar_url = use_state(|| None::<String>);
    let initial_loading = use_state(|| true);
    let saving = use_state(|| false);
    let uploading_avatar = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    {
        let full_name = full_name.clone();
        let email = email.clone();
        let avatar_url = avatar_url.clone();
        let initial_loading = initial_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            let session = match current_session() {
                Some(session) => session,
                None => {
                    initial_loading.set(false);
                    return;
                }
            };

            email.set(session.user.email.clone().unwrap_or_default());

            wasm_bindgen_futures::spawn_local(async move {
                match profiles::fetch_profile(&session.user.id).await {
                    Ok(Some(profile)) => {
                        full_name.set(profile.full_name.unwrap_or_default());
                        avatar_url.set(profile.avatar_url);
                    }
                    Ok(None) => {
                        // First visit: seed a profile row from the email.
                        let formatted =
                            format_name_from_email(session.user.email.as_deref().unwrap_or(""));
                        full_name.set(formatted.clone());

                        let row = NewProfile {
                            id: session.user.id.clone(),
                            full_name: formatted,
                            email: session.user.email.clone().unwrap_or_default(),
                        };
                        if let Err(e) =
                            profiles::create_profile(&row, &session.access_token).await
                        {
                            log::warn!("Failed to create profile: {}", e);
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load profile: {}", e)));
                    }
                }
                initial_loading.set(false);
            });
        });
    }

    let on_name_input = {
        let full_name = full_name.clone();
        Callback::from(move |e: InputEvent| {
            full_name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let full_name = full_name.clone();
        let saving = saving.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();

            let session = match current_session() {
                Some(session) => session,
                None => return,
            };

            let name = (*full_name).clone();
            let saving = saving.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();

            saving.set(true);
            error_message.set(None);
            success_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match profiles::update_full_name(&session.user.id, &name, &session.access_token)
                    .await
                {
                    Ok(()) => {
                        success_message.set(Some("Profile updated successfully!".to_string()));
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to update profile: {}", e)));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_avatar_change = {
        let avatar_url = avatar_url.clone();
        let uploading_avatar = uploading_avatar.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();

        Callback::from(move |e: Event| {
            let file = match file_from_input(&e) {
                Some(file) => file,
                None => return,
            };
            if file.size() > MAX_AVATAR_BYTES {
                error_message.set(Some("Avatar image must be less than 2MB".to_string()));
                return;
            }
            let session = match current_session() {
                Some(session) => session,
                None => return,
            };

            let avatar_url = avatar_url.clone();
            let uploading_avatar = uploading_avatar.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let old_avatar = (*avatar_url).clone();

            uploading_avatar.set(true);
            error_message.set(None);
            success_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                // Replace rather than accumulate: drop the old object first.
                if let Some(old_url) = old_avatar {
                    if let Some(old_name) = old_url.rsplit('/').next() {
                        let old_path = format!("{}/{}", session.user.id, old_name);
                        if let Err(e) =
                            uploads::remove_file(AVATAR_BUCKET, &old_path, &session.access_token)
                                .await
                        {
                            log::warn!("Failed to remove previous avatar: {}", e);
                        }
                    }
                }

                let path = format!(
                    "{}/{}.{}",
                    session.user.id,
                    js_sys::Date::now() as u64,
                    uploads::file_extension(&file.name())
                );

                let uploaded = uploads::upload_file(
                    AVATAR_BUCKET,
                    &path,
                    &file,
                    false,
                    &session.access_token,
                )
                .await;

                match uploaded {
                    Ok(()) => {
                        let public = uploads::public_url(AVATAR_BUCKET, &path);
                        match profiles::update_avatar_url(
                            &session.user.id,
                            &public,
                            &session.access_token,
                        )
                        .await
                        {
                            Ok(()) => {
                                avatar_url.set(Some(public));
                                success_message
                                    .set(Some("Avatar updated successfully!".to_string()));
                            }
                            Err(e) => {
                                error_message.set(Some(format!("Failed to upload avatar: {}", e)));
                            }
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to upload avatar: {}", e)));
                    }
                }
                uploading_avatar.set(false);
            });
        })
    };

    html! {
        <AppLayout>
            <div class="max-w-2xl mx-auto">
                {
                    if *initial_loading {
                        html! {
                            <div class="text-center py-12">
                                <p class="text-gray-300">{"Loading profile..."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="bg-white rounded-lg shadow-lg p-8">
                                <div class="flex items-center gap-4 mb-6">
                                    {
                                        if let Some(url) = &*avatar_url {
                                            html! {
                                                <img
                                                    src={url.clone()}
                                                    alt="Avatar"
                                                    class="h-14 w-14 rounded-full object-cover"
                                                />
                                            }
                                        } else {
                                            html! {
                                                <div class="h-14 w-14 rounded-full bg-blue-600 text-white flex items-center justify-center text-xl font-semibold">
                                                    { avatar_initial(&full_name) }
                                                </div>
                                            }
                                        }
                                    }
                                    <div>
                                        <h1 class="text-2xl font-bold text-gray-800">{"Profile Settings"}</h1>
                                        <p class="text-sm text-gray-500">{"Update your profile details"}</p>
                                    </div>
                                </div>

                                <ErrorMessage error_message={(*error_message).clone()} />
                                {
                                    if let Some(msg) = &*success_message {
                                        html! {
                                            <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4">
                                                { msg }
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }

                                <div class="mb-6">
                                    <label class="block text-gray-700 text-sm font-bold mb-2">{"Avatar"}</label>
                                    <input
                                        type="file"
                                        accept="image/*"
                                        onchange={on_avatar_change}
                                        disabled={*uploading_avatar}
                                        class="w-full text-sm text-gray-700"
                                    />
                                    {
                                        if *uploading_avatar {
                                            html! { <p class="text-sm text-gray-500 mt-1">{"Uploading avatar..."}</p> }
                                        } else {
                                            html! { <p class="text-sm text-gray-500 mt-1">{"JPG, PNG or WEBP, up to 2MB"}</p> }
                                        }
                                    }
                                </div>

                                <form onsubmit={on_submit} class="space-y-6">
                                    <div>
                                        <label class="block text-gray-700 text-sm font-bold mb-2">{"Full Name"}</label>
                                        <input
                                            type="text"
                                            class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                                            placeholder="Your full name"
                                            value={(*full_name).clone()}
                                            oninput={on_name_input}
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-gray-700 text-sm font-bold mb-2">{"Email"}</label>
                                        <input
                                            type="text"
                                            class="w-full p-3 border border-gray-300 rounded bg-gray-100 text-gray-500"
                                            value={(*email).clone()}
                                            disabled={true}
                                        />
                                        <p class="text-sm text-gray-500 mt-1">{"Email cannot be changed"}</p>
                                    </div>

                                    <button
                                        type="submit"
                                        disabled={*saving}
                                        class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                                    >
                                        { if *saving { "Updating..." } else { "Update Profile" } }
                                    </button>
                                </form>
                            </div>
                        }
                    }
                }
            </div>
        </AppLayout>
    }
}
