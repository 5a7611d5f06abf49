use crate::api::auth::current_session;
use crate::api::{uploads, videos};
use crate::components::layout::{AppLayout, ErrorMessage};
use crate::config::{ALLOWED_IMAGE_TYPES, MAX_THUMBNAIL_BYTES, VIDEO_BUCKET};
use crate::models::NewVideo;
use crate::router::Route;
use catalog::{SEMESTERS, SUBJECTS};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

fn file_from_input(e: &Event) -> Option<File> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|files| files.get(0))
}

fn validate_thumbnail(file: &File) -> Result<(), String> {
    if file.size() > MAX_THUMBNAIL_BYTES {
        return Err("Thumbnail file size must be less than 5MB".to_string());
    }
    if !ALLOWED_IMAGE_TYPES.contains(&file.type_().as_str()) {
        return Err("Thumbnail must be JPEG, PNG, or WEBP format".to_string());
    }
    Ok(())
}

fn none_if_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let navigator = use_navigator();
    let video_file = use_state(|| None::<File>);
    let thumbnail_file = use_state(|| None::<File>);
    let title = use_state(String::new);
    let description = use_state(String::new);
    let subject = use_state(String::new);
    let semester = use_state(String::new);
    let topic = use_state(String::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_video_change = {
        let video_file = video_file.clone();
        Callback::from(move |e: Event| {
            video_file.set(file_from_input(&e));
        })
    };

    let on_thumbnail_change = {
        let thumbnail_file = thumbnail_file.clone();
        Callback::from(move |e: Event| {
            thumbnail_file.set(file_from_input(&e));
        })
    };

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            title.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            description.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_subject_change = {
        let subject = subject.clone();
        Callback::from(move |e: Event| {
            subject.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let on_semester_change = {
        let semester = semester.clone();
        Callback::from(move |e: Event| {
            semester.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let on_topic_input = {
        let topic = topic.clone();
        Callback::from(move |e: InputEvent| {
            topic.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let navigator = navigator.clone();
        let video_file = video_file.clone();
        let thumbnail_file = thumbnail_file.clone();
        let title = title.clone();
        let description = description.clone();
        let subject = subject.clone();
        let semester = semester.clone();
        let topic = topic.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();

            let session = match current_session() {
                Some(session) => session,
                None => {
                    error_message.set(Some("Please login first".to_string()));
                    return;
                }
            };

            let file = match (*video_file).clone() {
                Some(file) => file,
                None => {
                    error_message.set(Some("Please select a video file".to_string()));
                    return;
                }
            };

            if title.trim().is_empty() {
                error_message.set(Some("Please enter a title".to_string()));
                return;
            }
            if subject.is_empty() {
                error_message.set(Some("Please select a department".to_string()));
                return;
            }
            if semester.is_empty() {
                error_message.set(Some("Please select a semester".to_string()));
                return;
            }

            let navigator = navigator.clone();
            let thumbnail = (*thumbnail_file).clone();
            let title_value = title.trim().to_string();
            let description_value = (*description).clone();
            let subject_value = (*subject).clone();
            let semester_value = (*semester).clone();
            let topic_value = (*topic).clone();
            let loading = loading.clone();
            let error_message = error_message.clone();

            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let now = js_sys::Date::now() as u64;
                let user_id = session.user.id.clone();

                let video_path = format!(
                    "{}/videos/{}_video.{}",
                    user_id,
                    now,
                    uploads::file_extension(&file.name())
                );

                if let Err(e) = uploads::upload_file(
                    VIDEO_BUCKET,
                    &video_path,
                    &file,
                    false,
                    &session.access_token,
                )
                .await
                {
                    error_message.set(Some(format!("Failed to upload video: {}", e)));
                    loading.set(false);
                    return;
                }
                let video_url = uploads::public_url(VIDEO_BUCKET, &video_path);

                // A bad thumbnail never blocks the video, it just gets
                // dropped and the upload continues without one.
                let mut thumbnail_url = None;
                if let Some(thumb) = thumbnail {
                    match validate_thumbnail(&thumb) {
                        Ok(()) => {
                            let thumb_path = format!(
                                "{}/thumbnails/{}_thumb.{}",
                                user_id,
                                now,
                                uploads::file_extension(&thumb.name())
                            );
                            match uploads::upload_file(
                                VIDEO_BUCKET,
                                &thumb_path,
                                &thumb,
                                true,
                                &session.access_token,
                            )
                            .await
                            {
                                Ok(()) => {
                                    thumbnail_url =
                                        Some(uploads::public_url(VIDEO_BUCKET, &thumb_path));
                                }
                                Err(e) => {
                                    log::warn!(
                                        "Thumbnail upload failed, continuing without one: {}",
                                        e
                                    );
                                }
                            }
                        }
                        Err(e) => {
                            log::warn!("Thumbnail rejected, continuing without one: {}", e);
                        }
                    }
                }

                let row = NewVideo {
                    title: title_value,
                    subject: subject_value,
                    semester: semester_value,
                    topic: none_if_empty(topic_value),
                    description: none_if_empty(description_value),
                    video_url,
                    thumbnail_url,
                    uploader_id: user_id,
                };

                match videos::insert(&row, &session.access_token).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Upload failed: {}", e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <AppLayout>
            <div class="max-w-2xl mx-auto">
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <h1 class="text-2xl font-bold text-gray-800 mb-1">{"Upload Video"}</h1>
                    <p class="text-gray-500 mb-6">{"Share your educational content with the campus community"}</p>

                    <ErrorMessage error_message={(*error_message).clone()} />

                    <form onsubmit={on_submit} class="space-y-6">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <label class="block text-gray-700 text-sm font-bold mb-2">{"Video File"}</label>
                                <input
                                    type="file"
                                    accept="video/mp4,video/webm"
                                    onchange={on_video_change}
                                    class="w-full text-sm text-gray-700"
                                />
                                <p class="text-sm text-gray-500 mt-1">{"Supported formats: MP4, WEBM"}</p>
                            </div>
                            <div>
                                <label class="block text-gray-700 text-sm font-bold mb-2">{"Thumbnail Image"}</label>
                                <input
                                    type="file"
                                    accept="image/jpeg,image/png,image/webp"
                                    onchange={on_thumbnail_change}
                                    class="w-full text-sm text-gray-700"
                                />
                                <p class="text-sm text-gray-500 mt-1">{"Supported formats: JPG, PNG, WEBP"}</p>
                            </div>
                        </div>

                        <div>
                            <label class="block text-gray-700 text-sm font-bold mb-2">{"Title"}</label>
                            <input
                                type="text"
                                class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                                placeholder="e.g., Introduction to Data Structures"
                                value={(*title).clone()}
                                oninput={on_title_input}
                            />
                        </div>

                        <div>
                            <label class="block text-gray-700 text-sm font-bold mb-2">{"Description"}</label>
                            <textarea
                                class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                                placeholder="Describe what this video covers..."
                                rows="4"
                                value={(*description).clone()}
                                oninput={on_description_input}
                            />
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <label class="block text-gray-700 text-sm font-bold mb-2">{"Department"}</label>
                                <select
                                    class="w-full p-3 border border-gray-300 rounded bg-white"
                                    onchange={on_subject_change}
                                >
                                    <option value="" selected={subject.is_empty()}>{"Select Department"}</option>
                                    { for SUBJECTS.iter().map(|option| html! {
                                        <option value={*option} selected={*subject == *option}>{ option }</option>
                                    })}
                                </select>
                            </div>
                            <div>
                                <label class="block text-gray-700 text-sm font-bold mb-2">{"Semester"}</label>
                                <select
                                    class="w-full p-3 border border-gray-300 rounded bg-white"
                                    onchange={on_semester_change}
                                >
                                    <option value="" selected={semester.is_empty()}>{"Select semester"}</option>
                                    { for SEMESTERS.iter().map(|option| html! {
                                        <option value={*option} selected={*semester == *option}>
                                            { format!("Semester {}", option) }
                                        </option>
                                    })}
                                </select>
                            </div>
                        </div>

                        <div>
                            <label class="block text-gray-700 text-sm font-bold mb-2">{"Topic (Optional)"}</label>
                            <input
                                type="text"
                                class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                                placeholder="e.g., Arrays, Linked Lists"
                                value={(*topic).clone()}
                                oninput={on_topic_input}
                            />
                        </div>

                        <button
                            type="submit"
                            disabled={*loading}
                            class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700 disabled:opacity-50"
                        >
                            { if *loading { "Uploading..." } else { "Upload Video" } }
                        </button>
                    </form>
                </div>
            </div>
        </AppLayout>
    }
}
