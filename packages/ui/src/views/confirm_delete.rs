use dioxus::prelude::*;

/// Delete confirmation shown in the modal.
#[component]
pub fn ConfirmDeleteDialog(on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "dialog",
            h2 { "Confirm Delete" }
            p { "Are you sure you want to delete this user?" }
            div {
                class: "dialog-buttons",
                button {
                    class: "btn btn-cancel",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-delete",
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
            }
        }
    }
}
