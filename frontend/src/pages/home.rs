use crate::api::{profiles, videos};
use crate::components::layout::{AppLayout, ErrorMessage};
use crate::components::search_box::SearchBox;
use crate::components::video_card::VideoCard;
use crate::config::RECENT_VIDEOS_LIMIT;
use catalog::{filter_videos, FilterCriteria, Selection, Video, SUBJECTS};
use std::collections::HashMap;
use yew::prelude::*;

fn unique_uploader_ids(videos: &[Video]) -> Vec<String> {
    let mut ids: Vec<String> = videos.iter().map(|v| v.uploader_id.clone()).collect();
    ids.sort();
    ids.dedup();
    ids
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let all_videos = use_state(Vec::<Video>::new);
    let uploader_names = use_state(HashMap::<String, String>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let selected_subject = use_state(|| "All".to_string());
    let query = use_state(String::new);

    // Load videos on component mount
    {
        let all_videos = all_videos.clone();
        let uploader_names = uploader_names.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match videos::fetch_recent(RECENT_VIDEOS_LIMIT).await {
                    Ok(video_list) => {
                        let ids = unique_uploader_ids(&video_list);
                        all_videos.set(video_list);

                        // Names are auxiliary: a failed lookup falls back
                        // to "Unknown" on the cards instead of erroring.
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
                        error_message.set(Some(format!("Failed to load videos: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |new_query: String| {
            query.set(new_query);
        })
    };

    let criteria = FilterCriteria {
        subject: Selection::from_label(&selected_subject),
        semester: Selection::All,
        query: (*query).clone(),
    };
    let visible = filter_videos(&all_videos, &criteria, &uploader_names);

    let subject_button = |label: String| {
        let selected = *selected_subject == label;
        let selected_subject = selected_subject.clone();
        let onclick = {
            let label = label.clone();
            Callback::from(move |_| selected_subject.set(label.clone()))
        };
        let classes = if selected {
            "px-4 py-2 rounded bg-blue-600 text-white shadow-md"
        } else {
            "px-4 py-2 rounded bg-white text-gray-700 border border-gray-300 hover:bg-gray-100"
        };
        html! {
            <button onclick={onclick} class={classes}>{ label }</button>
        }
    };

    html! {
        <AppLayout>
            <div class="mb-8">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-6">
                    <div>
                        <h1 class="text-3xl font-bold text-white mb-2">{"Recent Videos"}</h1>
                        <p class="text-gray-300">{"Discover educational content shared by the campus community"}</p>
                    </div>
                    <SearchBox on_search={on_search} />
                </div>

                <div class="flex flex-wrap gap-2 mb-6">
                    { subject_button("All".to_string()) }
                    { for SUBJECTS.iter().map(|subject| subject_button(subject.to_string())) }
                </div>
            </div>

            <ErrorMessage error_message={(*error_message).clone()} />

            {
                if *loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-gray-300">{"Loading videos..."}</p>
                        </div>
                    }
                } else if visible.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-gray-300">{"No videos yet. Be the first to upload!"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                            { for visible.into_iter().map(|video| {
                                let uploader_name = uploader_names
                                    .get(&video.uploader_id)
                                    .cloned()
                                    .unwrap_or_else(|| "Unknown".to_string());
                                let key = video.id.clone();
                                html! {
                                    <VideoCard
                                        key={key}
                                        video={video}
                                        uploader_name={uploader_name}
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
