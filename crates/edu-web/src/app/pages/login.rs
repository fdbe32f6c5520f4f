use dioxus::prelude::*;
use edu_client::session::login_error_message;
use edu_types::{LoginRequest, validation::format_errors};

use crate::{
    Routes, app::auth::hooks::{use_auth, use_session}, components::{ErrorBanner, GuestOnly, Layout}
};

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        GuestOnly {
            Layout { LoginForm {} }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let auth = use_auth();
    let session = use_session();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let request = LoginRequest {
            username: username().trim().to_string(),
            password: password(),
        };
        let errors = request.validate();
        if !errors.is_empty() {
            error_message.set(Some(format_errors(&errors)));
            return;
        }

        submitting.set(true);

        let mut auth = auth;
        let session = session.clone();

        spawn(async move {
            match session.login(&request.username, &request.password).await {
                // GuestOnly moves the now-authenticated user on to the blog index
                Ok(state) => auth.set(state),
                Err(err) => {
                    error_message.set(Some(login_error_message(&err)));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
            div { class: "card w-96 bg-base-100 shadow-xl",
                div { class: "card-body",
                    h2 { class: "card-title justify-center mb-4", "Login to EduBlog" }

                    form { onsubmit: on_submit,
                        class: "flex flex-col gap-4",
                        div { class: "form-control w-full flex flex-col gap-2",
                            label { class: "label",
                                span { class: "label-text", "Username" }
                            }
                            input {
                                r#type: "text",
                                placeholder: "username",
                                class: "input input-bordered w-full",
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                                autocomplete: "username",
                            }
                        }

                        div { class: "form-control w-full flex flex-col gap-2",
                            label { class: "label",
                                span { class: "label-text", "Password" }
                            }
                            input {
                                r#type: "password",
                                placeholder: "password",
                                class: "input input-bordered w-full",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                                autocomplete: "current-password",
                            }
                        }

                        if let Some(error) = error_message() {
                            ErrorBanner { message: error }
                        }

                        div { class: "card-actions justify-end mt-2",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary w-full",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner" }
                                    span { "Logging in" }
                                } else {
                                    span { "Login" }
                                }
                            }
                        }

                        div { class: "divider", "OR" }

                        p { class: "text-center text-sm",
                            "No account yet? "
                            Link { to: Routes::SignupPage {}, class: "link link-primary", "Sign up" }
                        }
                    }
                }
            }
        }
    }
}
