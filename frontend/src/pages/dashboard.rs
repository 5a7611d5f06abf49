use crate::api::auth::current_session;
use crate::api::{profiles, videos};
use crate::components::layout::{AppLayout, ErrorMessage};
use crate::components::video_card::VideoCard;
use crate::router::Route;
use catalog::Video;
use yew::prelude::*;
use yew_router::prelude::*;

async fn load_my_videos(
    user_id: String,
    my_videos: UseStateHandle<Vec<Video>>,
    my_name: UseStateHandle<String>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    match videos::fetch_by_uploader(&user_id).await {
        Ok(rows) => my_videos.set(rows),
        Err(e) => error_message.set(Some(format!("Failed to load videos: {}", e))),
    }

    match profiles::fetch_profile(&user_id).await {
        Ok(Some(profile)) => my_name.set(profile.display_name()),
        Ok(None) => {}
        Err(e) => {
            web_sys::console::error_1(&format!("Error fetching profile: {}", e).into());
        }
    }

    loading.set(false);
}

/// The signed-in user's own uploads, with the only destructive action the
/// client offers: deleting one of them after an explicit confirmation.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let my_videos = use_state(Vec::<Video>::new);
    let my_name = use_state(|| "Unknown".to_string());
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let delete_id = use_state(|| None::<String>);

    {
        let my_videos = my_videos.clone();
        let my_name = my_name.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            if let Some(session) = current_session() {
                wasm_bindgen_futures::spawn_local(async move {
                    load_my_videos(session.user.id, my_videos, my_name, error_message, loading)
                        .await;
                });
            }
            || ()
        });
    }

    let on_request_delete = {
        let delete_id = delete_id.clone();
        Callback::from(move |video_id: String| {
            delete_id.set(Some(video_id));
        })
    };

    let on_cancel_delete = {
        let delete_id = delete_id.clone();
        Callback::from(move |_: MouseEvent| {
            delete_id.set(None);
        })
    };

    let on_confirm_delete = {
        let my_videos = my_videos.clone();
        let my_name = my_name.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let delete_id = delete_id.clone();

        Callback::from(move |_: MouseEvent| {
            let video_id = match (*delete_id).clone() {
                Some(id) => id,
                None => return,
            };
            let session = match current_session() {
                Some(session) => session,
                None => return,
            };

            let my_videos = my_videos.clone();
            let my_name = my_name.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            let delete_id = delete_id.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match videos::delete(&video_id, &session.access_token).await {
                    Ok(()) => {
                        load_my_videos(session.user.id, my_videos, my_name, error_message, loading)
                            .await;
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to delete video: {}", e)));
                    }
                }
                delete_id.set(None);
            });
        })
    };

    html! {
        <AppLayout>
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-white mb-2">{"My Videos"}</h1>
                <p class="text-gray-300">{"Manage your uploaded educational content"}</p>
            </div>

            <ErrorMessage error_message={(*error_message).clone()} />

            {
                if delete_id.is_some() {
                    html! {
                        <div class="bg-white rounded-lg shadow-lg p-6 mb-6">
                            <h2 class="text-lg font-semibold text-gray-800 mb-2">{"Delete Video"}</h2>
                            <p class="text-gray-600 mb-4">
                                {"Are you sure you want to delete this video? This action cannot be undone."}
                            </p>
                            <div class="flex gap-2 justify-end">
                                <button
                                    onclick={on_cancel_delete}
                                    class="px-4 py-2 rounded border border-gray-300 text-gray-700 hover:bg-gray-100"
                                >
                                    {"Cancel"}
                                </button>
                                <button
                                    onclick={on_confirm_delete}
                                    class="px-4 py-2 rounded bg-red-600 text-white hover:bg-red-700"
                                >
                                    {"Delete"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if *loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-gray-300">{"Loading your videos..."}</p>
                        </div>
                    }
                } else if my_videos.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-gray-300 mb-4">{"You haven't uploaded any videos yet."}</p>
                            <Link<Route>
                                to={Route::Upload}
                                classes="inline-block bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700"
                            >
                                {"Upload Your First Video"}
                            </Link<Route>>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                            { for my_videos.iter().map(|video| {
                                let video_id = video.id.clone();
                                let on_request_delete = on_request_delete.clone();

                                html! {
                                    <div key={video.id.clone()} class="space-y-2">
                                        <VideoCard
                                            video={video.clone()}
                                            uploader_name={(*my_name).clone()}
                                        />
                                        <button
                                            onclick={Callback::from(move |_| {
                                                on_request_delete.emit(video_id.clone());
                                            })}
                                            class="w-full bg-red-600 text-white px-4 py-2 rounded text-sm hover:bg-red-700"
                                        >
                                            {"Delete"}
                                        </button>
                                    </div>
                                }
                            })}
                        </div>
                    }
                }
            }
        </AppLayout>
    }
}
