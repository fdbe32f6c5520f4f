use dioxus::prelude::*;
use edu_client::{SubmitOutcome, after_update, can_modify};
use edu_types::{FieldErrors, PostForm};

use crate::{
    Routes, app::auth::hooks::{use_auth, use_session}, components::{ErrorBanner, Layout, LoadingSpinner, PostFormFields, RequireAuth}
};

#[component]
pub fn EditPostPage(id: i64) -> Element {
    rsx! {
        RequireAuth {
            Layout { EditPostView { id } }
        }
    }
}

#[component]
fn EditPostView(id: i64) -> Element {
    let auth = use_auth();
    let session = use_session();
    let navigator = use_navigator();

    let fetch_session = session.clone();
    let post = use_resource(use_reactive((&id,), move |(id,)| {
        let api = fetch_session.api();
        async move { api.get_post(id).await }
    }));

    let mut form = use_signal(PostForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Prefill once the post arrives
    use_effect(move || {
        if let Some(Ok(fetched)) = &*post.read() {
            form.set(PostForm::from_post(fetched));
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let request = match form.read().to_request() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);

        let api = session.api();
        spawn(async move {
            let result = api.update_post(id, &request).await;
            if let Err(err) = &result {
                tracing::error!(post_id = id, error = %err, "update post failed");
            }
            match after_update(id, &result) {
                SubmitOutcome::Navigate(target) => {
                    navigator.push(target.as_str());
                }
                SubmitOutcome::Stay(message) => {
                    error_message.set(Some(message));
                    submitting.set(false);
                }
            }
        });
    };

    match post() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(err)) => {
            tracing::error!(post_id = id, error = %err, "failed to fetch post for editing");
            rsx! { ErrorBanner { message: "Failed to fetch post. Please try again." } }
        }
        Some(Ok(fetched)) => rsx! {
            div { class: "max-w-4xl mx-auto card bg-base-100 shadow-xl",
                div { class: "card-body",
                    h2 { class: "card-title text-2xl mb-4", "Edit Post" }

                    if !can_modify(&auth.read(), &fetched) {
                        div { role: "alert", class: "alert alert-warning mb-4",
                            span { "Only the author can save changes to this post." }
                        }
                    }

                    if let Some(error) = error_message() {
                        ErrorBanner { message: error }
                    }

                    form { onsubmit: on_submit, class: "flex flex-col gap-6",
                        PostFormFields { form, errors }

                        div { class: "card-actions justify-end",
                            Link { to: Routes::BlogPostPage { id }, class: "btn btn-ghost", "Cancel" }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner" }
                                    span { "Saving" }
                                } else {
                                    span { "Update Post" }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}
