use crate::router::Route;
use crate::storage::BrowserStorage;
use crate::utils::{avatar_initial, format_number, format_time_since};
use catalog::{FavoritesStore, Video};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub uploader_name: String,
    /// Set by pages that already know the video is favorited (the
    /// favorites page) so the heart renders filled without a storage read.
    #[prop_or_default]
    pub initial_favorited: bool,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let favorited = use_state(|| {
        props.initial_favorited || FavoritesStore::new(BrowserStorage).contains(&props.video.id)
    });

    // Optimistic toggle: the heart flips immediately, the write follows.
    let on_toggle_favorite = {
        let favorited = favorited.clone();
        let video_id = props.video.id.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();

            let next = !*favorited;
            favorited.set(next);

            let store = FavoritesStore::new(BrowserStorage);
            let outcome = if next {
                store.add(&video_id)
            } else {
                store.remove(&video_id)
            };
            if !outcome.is_persisted() {
                web_sys::console::warn_1(
                    &"Favorites change was not persisted and will not survive a reload".into(),
                );
            }
        })
    };

    let video = &props.video;

    html! {
        <Link<Route> to={Route::Watch { id: video.id.clone() }}>
            <div class="bg-white rounded-lg shadow hover:shadow-xl overflow-hidden">
                <div class="aspect-video bg-gray-200 relative overflow-hidden">
                    {
                        if let Some(thumbnail_url) = &video.thumbnail_url {
                            html! {
                                <img
                                    src={thumbnail_url.clone()}
                                    alt={video.title.clone()}
                                    class="w-full h-full object-cover"
                                />
                            }
                        } else {
                            html! {
                                <div class="w-full h-full flex items-center justify-center">
                                    <span class="text-gray-500 text-sm">{"No thumbnail"}</span>
                                </div>
                            }
                        }
                    }
                    {
                        if let Some(subject) = &video.subject {
                            html! {
                                <span class="absolute top-2 right-2 bg-gray-800 text-white text-xs px-2 py-1 rounded shadow-sm">
                                    { subject }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="p-4">
                    <div class="flex items-start gap-3">
                        <div class="h-9 w-9 rounded-full bg-blue-600 text-white flex items-center justify-center font-semibold shrink-0">
                            { avatar_initial(&props.uploader_name) }
                        </div>
                        <div class="flex-1">
                            <h3 class="font-semibold text-gray-800 line-clamp-2 mb-1">{ &video.title }</h3>
                            <p class="text-sm text-gray-500">{ format!("By {}", props.uploader_name) }</p>
                        </div>
                    </div>
                </div>

                <div class="px-4 pb-4 flex items-center justify-between text-sm text-gray-500">
                    <div class="flex items-center gap-4">
                        <span>{ format!("{} views", format_number(video.views)) }</span>
                        <span>{ format_time_since(&video.created_at) }</span>
                        <button
                            onclick={on_toggle_favorite}
                            title={if *favorited { "Remove from favorites" } else { "Add to favorites" }}
                            class={if *favorited { "text-red-600" } else { "text-gray-400 hover:text-red-600" }}
                        >
                            {"♥"}
                        </button>
                    </div>
                    {
                        if let Some(semester) = &video.semester {
                            html! {
                                <span class="border border-gray-300 text-xs px-2 py-1 rounded">
                                    { format!("Sem {}", semester) }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </Link<Route>>
    }
}
