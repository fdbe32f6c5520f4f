use dioxus::prelude::*;
use edu_types::{Category, FieldErrors, PostForm};

/// `oninput` handler writing one form field by its input name.
fn bind(mut form: Signal<PostForm>, field: &'static str) -> impl FnMut(FormEvent) + 'static {
    move |evt: FormEvent| {
        if let Err(err) = form.write().set(field, evt.value()) {
            tracing::warn!(field, error = %err, "ignored input for unknown form field");
        }
    }
}

fn value_of(form: Signal<PostForm>, field: &str) -> String {
    form.read().get(field).unwrap_or_default().to_string()
}

fn error_for(errors: Signal<FieldErrors>, field: &str) -> Option<String> {
    errors.read().get(field).map(|e| e.to_string())
}

/// Inputs shared by the create and edit views. The surrounding `form` element
/// and its submit button belong to the page.
#[component]
pub fn PostFormFields(form: Signal<PostForm>, errors: Signal<FieldErrors>) -> Element {
    let selected = value_of(form, "category");

    rsx! {
        div { class: "flex flex-col gap-4",
            fieldset { class: "fieldset",
                label { class: "label", r#for: "title", "Title" }
                input {
                    id: "title",
                    name: "title",
                    required: PostForm::is_required("title"),
                    r#type: "text",
                    placeholder: "Enter post title",
                    class: "input input-bordered w-full",
                    value: value_of(form, "title"),
                    oninput: bind(form, "title"),
                }
                if let Some(err) = error_for(errors, "title") {
                    span { class: "text-error text-sm", "{err}" }
                }
            }

            fieldset { class: "fieldset",
                label { class: "label", r#for: "category", "Category" }
                select {
                    id: "category",
                    name: "category",
                    required: PostForm::is_required("category"),
                    class: "select select-bordered w-full",
                    value: "{selected}",
                    onchange: bind(form, "category"),
                    option { value: "", disabled: true, selected: selected.is_empty(), "Select a category" }
                    for category in Category::ALL {
                        option {
                            key: "{category.as_str()}",
                            value: category.as_str(),
                            selected: selected == category.as_str(),
                            "{category.label()}"
                        }
                    }
                }
                if let Some(err) = error_for(errors, "category") {
                    span { class: "text-error text-sm", "{err}" }
                }
            }

            fieldset { class: "fieldset",
                label { class: "label", r#for: "description", "Description" }
                textarea {
                    id: "description",
                    name: "description",
                    required: PostForm::is_required("description"),
                    rows: "3",
                    placeholder: "Enter a brief description",
                    class: "textarea textarea-bordered w-full",
                    value: value_of(form, "description"),
                    oninput: bind(form, "description"),
                }
                if let Some(err) = error_for(errors, "description") {
                    span { class: "text-error text-sm", "{err}" }
                }
            }

            fieldset { class: "fieldset",
                label { class: "label", r#for: "content", "Content" }
                textarea {
                    id: "content",
                    name: "content",
                    required: PostForm::is_required("content"),
                    rows: "12",
                    placeholder: "Write your post content here",
                    class: "textarea textarea-bordered w-full font-mono",
                    value: value_of(form, "content"),
                    oninput: bind(form, "content"),
                }
                if let Some(err) = error_for(errors, "content") {
                    span { class: "text-error text-sm", "{err}" }
                }
            }

            fieldset { class: "fieldset",
                label { class: "label", r#for: "imageUrl", "Image URL (optional)" }
                input {
                    id: "imageUrl",
                    name: "imageUrl",
                    r#type: "url",
                    placeholder: "Enter image URL",
                    class: "input input-bordered w-full",
                    value: value_of(form, "imageUrl"),
                    oninput: bind(form, "imageUrl"),
                }
            }
        }
    }
}
