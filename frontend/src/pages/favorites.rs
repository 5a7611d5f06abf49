use crate::api::{profiles, videos};
use crate::components::layout::{AppLayout, ErrorMessage};
use crate::components::video_card::VideoCard;
use crate::storage::BrowserStorage;
use catalog::{FavoritesStore, Video};
use std::collections::HashMap;
use yew::prelude::*;

/// Videos favorited on this device. The id list lives in localStorage;
/// only the matching rows are fetched.
#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let favorite_videos = use_state(Vec::<Video>::new);
    let uploader_names = use_state(HashMap::<String, String>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let favorite_videos = favorite_videos.clone();
        let uploader_names = uploader_names.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            let read = FavoritesStore::new(BrowserStorage).get_all();
            if read.is_degraded() {
                web_sys::console::warn_1(
                    &"Favorites record was unreadable, starting from an empty list".into(),
                );
            }
            let favorite_ids = read.into_ids();

            if favorite_ids.is_empty() {
                loading.set(false);
                return;
            }

            wasm_bindgen_futures::spawn_local(async move {
                match videos::fetch_by_ids(&favorite_ids).await {
                    Ok(video_list) => {
                        let mut ids: Vec<String> =
                            video_list.iter().map(|v| v.uploader_id.clone()).collect();
                        ids.sort();
                        ids.dedup();
                        favorite_videos.set(video_list);

                        match profiles::fetch_display_names(&ids).await {
                            Ok(names) => uploader_names.set(names),
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Error fetching profiles: {}", e).into(),
                                );
                            }
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load favorite videos: {}", e)));
                    }
                }
                loading.set(false);
            });
        });
    }

    html! {
        <AppLayout>
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-white mb-2">{"Favorite Videos"}</h1>
                <p class="text-gray-300 mb-6">{"Your collection of favorite educational content"}</p>
            </div>

            <ErrorMessage error_message={(*error_message).clone()} />

            {
                if *loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-gray-300">{"Loading videos..."}</p>
                        </div>
                    }
                } else if favorite_videos.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-gray-300">{"No favorite videos yet. Start adding some!"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                            { for favorite_videos.iter().map(|video| {
                                let uploader_name = uploader_names
                                    .get(&video.uploader_id)
                                    .cloned()
                                    .unwrap_or_else(|| "Unknown".to_string());
                                html! {
                                    <VideoCard
                                        key={video.id.clone()}
                                        video={video.clone()}
                                        uploader_name={uploader_name}
                                        initial_favorited={true}
                                    />
                                }
                            })}
                        </div>
                    }
                }
            }
        </AppLayout>
    }
}
