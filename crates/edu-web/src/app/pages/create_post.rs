use dioxus::prelude::*;
use edu_client::{SubmitOutcome, after_create};
use edu_types::{FieldErrors, PostForm};

use crate::{
    Routes, app::auth::hooks::use_session, components::{ErrorBanner, Layout, PostFormFields, RequireAuth}
};

#[component]
pub fn CreatePostPage() -> Element {
    rsx! {
        RequireAuth {
            Layout { CreatePostView {} }
        }
    }
}

#[component]
fn CreatePostView() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let form = use_signal(PostForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

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
            let result = api.create_post(&request).await;
            if let Err(err) = &result {
                tracing::error!(error = %err, "create post failed");
            }
            match after_create(&result) {
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

    rsx! {
        div { class: "max-w-4xl mx-auto card bg-base-100 shadow-xl",
            div { class: "card-body",
                h1 { class: "card-title text-3xl mb-4", "Create New Post" }

                if let Some(error) = error_message() {
                    ErrorBanner { message: error }
                }

                form { onsubmit: on_submit, class: "flex flex-col gap-6",
                    PostFormFields { form, errors }

                    div { class: "card-actions justify-end",
                        Link { to: Routes::blogs(), class: "btn btn-ghost", "Cancel" }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner" }
                                span { "Creating" }
                            } else {
                                span { "Create Post" }
                            }
                        }
                    }
                }
            }
        }
    }
}
