use crate::api::{profiles, videos};
use crate::components::layout::{AppLayout, ErrorMessage};
use crate::components::video_card::VideoCard;
use catalog::{filter_videos, FilterCriteria, Selection, Video, SEMESTERS, SUBJECTS};
use std::collections::HashMap;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Full-catalog browsing. The catalog is fetched once and every filter
/// change is applied in memory, so narrowing never refires a request.
#[function_component(BrowsePage)]
pub fn browse_page() -> Html {
    let all_videos = use_state(Vec::<Video>::new);
    let uploader_names = use_state(HashMap::<String, String>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let query = use_state(String::new);
    let selected_subject = use_state(|| "All".to_string());
    let selected_semester = use_state(|| "All".to_string());

    {
        let all_videos = all_videos.clone();
        let uploader_names = uploader_names.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match videos::fetch_catalog().await {
                    Ok(video_list) => {
                        let mut ids: Vec<String> =
                            video_list.iter().map(|v| v.uploader_id.clone()).collect();
                        ids.sort();
                        ids.dedup();
                        all_videos.set(video_list);

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

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            query.set(input_value);
        })
    };

    let on_subject_change = {
        let selected_subject = selected_subject.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            selected_subject.set(value);
        })
    };

    let on_semester_change = {
        let selected_semester = selected_semester.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            selected_semester.set(value);
        })
    };

    let criteria = FilterCriteria {
        subject: Selection::from_label(&selected_subject),
        semester: Selection::from_label(&selected_semester),
        query: (*query).clone(),
    };
    let visible = filter_videos(&all_videos, &criteria, &uploader_names);

    html! {
        <AppLayout>
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-white mb-6">{"Browse Videos"}</h1>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <input
                        type="text"
                        class="p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="Search videos..."
                        value={(*query).clone()}
                        oninput={on_query_input}
                    />

                    <select
                        class="p-3 border border-gray-300 rounded-lg bg-white"
                        onchange={on_subject_change}
                    >
                        <option value="All" selected={*selected_subject == "All"}>{"All Subjects"}</option>
                        { for SUBJECTS.iter().map(|subject| html! {
                            <option value={*subject} selected={*selected_subject == *subject}>
                                { subject }
                            </option>
                        })}
                    </select>

                    <select
                        class="p-3 border border-gray-300 rounded-lg bg-white"
                        onchange={on_semester_change}
                    >
                        <option value="All" selected={*selected_semester == "All"}>{"All Semesters"}</option>
                        { for SEMESTERS.iter().map(|semester| html! {
                            <option value={*semester} selected={*selected_semester == *semester}>
                                { format!("Semester {}", semester) }
                            </option>
                        })}
                    </select>
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
                            <p class="text-gray-300">{"No videos found matching your criteria."}</p>
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
