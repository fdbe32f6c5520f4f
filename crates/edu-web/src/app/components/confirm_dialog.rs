use dioxus::prelude::*;

/// Yes/no dialog in front of a destructive action.
#[component]
pub fn ConfirmDialog(
    open: bool,
    #[props(into)] title: String,
    #[props(into)] message: String,
    #[props(into, default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        dialog { class: "modal modal-open modal-bottom sm:modal-middle",
            div { class: "modal-box",
                h3 { class: "font-bold text-lg", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy {
                            span { class: "loading loading-spinner" }
                        }
                        "{confirm_label}"
                    }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| on_cancel.call(()) }
        }
    }
}
