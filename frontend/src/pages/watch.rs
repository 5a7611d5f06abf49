use crate::api::auth::current_session;
use crate::api::{comments, profiles, videos};
use crate::components::layout::{AppLayout, ErrorMessage};
use crate::models::NewComment;
use crate::utils::{format_number, format_time_since};
use catalog::{Comment, Video};
use std::collections::HashMap;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WatchPageProps {
    pub video_id: String,
}

async fn load_comments(
    video_id: String,
    comment_list: UseStateHandle<Vec<Comment>>,
    author_names: UseStateHandle<HashMap<String, String>>,
) {
    match comments::fetch_for_video(&video_id).await {
        Ok(rows) => {
            let mut ids: Vec<String> = rows.iter().map(|c| c.user_id.clone()).collect();
            ids.sort();
            ids.dedup();
            comment_list.set(rows);

            match profiles::fetch_display_names(&ids).await {
                Ok(names) => author_names.set(names),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching profiles: {}", e).into());
                }
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error fetching comments: {}", e).into());
        }
    }
}

#[function_component(WatchPage)]
pub fn watch_page(props: &WatchPageProps) -> Html {
    let video = use_state(|| None::<Video>);
    let uploader_name = use_state(|| "Unknown".to_string());
    let comment_list = use_state(Vec::<Comment>::new);
    let author_names = use_state(HashMap::<String, String>::new);
    let new_comment = use_state(String::new);
    let posting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    {
        let video = video.clone();
        let uploader_name = uploader_name.clone();
        let comment_list = comment_list.clone();
        let author_names = author_names.clone();
        let error_message = error_message.clone();
        let video_id = props.video_id.clone();

        use_effect_with(props.video_id.clone(), move |_| {
            // The count bump must not gate rendering, let it run on its own.
            {
                let video_id = video_id.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    videos::increment_views(&video_id).await;
                });
            }

            wasm_bindgen_futures::spawn_local(async move {
                match videos::fetch_video(&video_id).await {
                    Ok(row) => {
                        let uploader_id = row.uploader_id.clone();
                        video.set(Some(row));

                        match profiles::fetch_display_names(&[uploader_id.clone()]).await {
                            Ok(names) => {
                                if let Some(name) = names.get(&uploader_id) {
                                    uploader_name.set(name.clone());
                                }
                            }
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Error fetching profiles: {}", e).into(),
                                );
                            }
                        }

                        load_comments(video_id, comment_list, author_names).await;
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load video: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    let on_comment_input = {
        let new_comment = new_comment.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            new_comment.set(input_value);
        })
    };

    let on_post_comment = {
        let new_comment = new_comment.clone();
        let posting = posting.clone();
        let error_message = error_message.clone();
        let comment_list = comment_list.clone();
        let author_names = author_names.clone();
        let video_id = props.video_id.clone();

        Callback::from(move |_: MouseEvent| {
            let content = new_comment.trim().to_string();
            if content.is_empty() {
                return;
            }

            let session = match current_session() {
                Some(session) => session,
                None => {
                    error_message.set(Some("Please login to comment".to_string()));
                    return;
                }
            };

            let new_comment = new_comment.clone();
            let posting = posting.clone();
            let error_message = error_message.clone();
            let comment_list = comment_list.clone();
            let author_names = author_names.clone();
            let video_id = video_id.clone();

            posting.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let comment = NewComment {
                    video_id: video_id.clone(),
                    user_id: session.user.id.clone(),
                    content,
                };

                match comments::post(&comment, &session.access_token).await {
                    Ok(()) => {
                        new_comment.set(String::new());
                        load_comments(video_id, comment_list, author_names).await;
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to post comment: {}", e)));
                    }
                }
                posting.set(false);
            });
        })
    };

    let video_row = match &*video {
        Some(row) => row.clone(),
        None => {
            return html! {
                <AppLayout>
                    <ErrorMessage error_message={(*error_message).clone()} />
                    <div class="text-center py-12">
                        <p class="text-gray-300">{"Loading video..."}</p>
                    </div>
                </AppLayout>
            };
        }
    };

    html! {
        <AppLayout>
            <div class="max-w-6xl mx-auto space-y-6">
                <ErrorMessage error_message={(*error_message).clone()} />

                <div class="aspect-video bg-black rounded-lg overflow-hidden">
                    {
                        if let Some(video_url) = &video_row.video_url {
                            html! {
                                <video src={video_url.clone()} controls={true} class="w-full h-full" />
                            }
                        } else {
                            html! {
                                <div class="w-full h-full flex items-center justify-center">
                                    <p class="text-gray-400">{"Video source is unavailable"}</p>
                                </div>
                            }
                        }
                    }
                </div>

                <div class="bg-white rounded-lg shadow-lg p-6">
                    <div class="flex flex-wrap gap-2 mb-4">
                        {
                            if let Some(subject) = &video_row.subject {
                                html! { <span class="bg-gray-800 text-white text-xs px-2 py-1 rounded">{ subject }</span> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(semester) = &video_row.semester {
                                html! {
                                    <span class="border border-gray-300 text-gray-700 text-xs px-2 py-1 rounded">
                                        { format!("Semester {}", semester) }
                                    </span>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(topic) = &video_row.topic {
                                html! { <span class="bg-gray-200 text-gray-700 text-xs px-2 py-1 rounded">{ topic }</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>

                    <h1 class="text-2xl font-bold text-gray-800 mb-2">{ &video_row.title }</h1>

                    <div class="flex items-center gap-4 text-sm text-gray-500 mb-4">
                        <span>{ format!("{} views", format_number(video_row.views)) }</span>
                        <span>{ format_time_since(&video_row.created_at) }</span>
                    </div>

                    <p class="text-sm mb-4">
                        <span class="font-semibold">{"Uploaded by: "}</span>{ (*uploader_name).clone() }
                    </p>

                    {
                        if let Some(description) = &video_row.description {
                            html! {
                                <div class="border-t pt-4">
                                    <h3 class="font-semibold mb-2">{"Description"}</h3>
                                    <p class="text-gray-600 whitespace-pre-wrap">{ description }</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="bg-white rounded-lg shadow-lg p-6">
                    <h2 class="text-xl font-bold text-gray-800 mb-4">
                        { format!("{} Comments", comment_list.len()) }
                    </h2>

                    <div class="space-y-4 mb-6">
                        <textarea
                            class="w-full p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Add a comment..."
                            rows="3"
                            value={(*new_comment).clone()}
                            oninput={on_comment_input}
                        />
                        <button
                            onclick={on_post_comment}
                            disabled={*posting}
                            class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                        >
                            { if *posting { "Posting..." } else { "Post Comment" } }
                        </button>
                    </div>

                    <div class="divide-y divide-gray-200">
                        { for comment_list.iter().map(|comment| {
                            let author = author_names
                                .get(&comment.user_id)
                                .cloned()
                                .unwrap_or_else(|| "Unknown".to_string());
                            html! {
                                <div key={comment.id.clone()} class="py-4">
                                    <div class="flex items-center gap-2 mb-2">
                                        <span class="font-semibold text-gray-800">{ author }</span>
                                        <span class="text-sm text-gray-500">{ format_time_since(&comment.created_at) }</span>
                                    </div>
                                    <p class="text-gray-600">{ &comment.content }</p>
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>
        </AppLayout>
    }
}
