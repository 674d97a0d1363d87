use dioxus::prelude::*;

use crate::state::UserForm;

/// Add/edit form shown in the modal. Owns its own draft copy; the screen only
/// sees the finished form on save.
#[component]
pub fn UserFormDialog(
    draft: UserForm,
    editing: bool,
    on_save: EventHandler<UserForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(move || draft);
    let mut age_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_| match form().parsed_age() {
        Ok(_) => {
            age_error.set(None);
            on_save.call(form());
        }
        Err(err) => age_error.set(Some(err)),
    };

    let title = if editing { "Edit User" } else { "Add User" };
    let submit_label = if editing { "Save Changes" } else { "Add User" };

    let age_error_line = age_error().map(|err| {
        rsx! {
            p { class: "field-error", "{err}" }
        }
    });

    rsx! {
        div {
            class: "dialog",
            h2 { "{title}" }

            div {
                class: "field",
                label { r#for: "user-name", "Name" }
                input {
                    id: "user-name",
                    r#type: "text",
                    value: form().name,
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
            }
            div {
                class: "field",
                label { r#for: "user-email", "Email" }
                input {
                    id: "user-email",
                    r#type: "email",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
            }
            div {
                class: "field",
                label { r#for: "user-age", "Age" }
                input {
                    id: "user-age",
                    r#type: "number",
                    value: form().age,
                    oninput: move |evt: FormEvent| form.write().age = evt.value(),
                }
                {age_error_line}
            }
            div {
                class: "field",
                label { r#for: "user-address", "Address" }
                input {
                    id: "user-address",
                    r#type: "text",
                    value: form().address,
                    oninput: move |evt: FormEvent| form.write().address = evt.value(),
                }
            }
            div {
                class: "field",
                label { r#for: "user-phone", "Phone" }
                input {
                    id: "user-phone",
                    r#type: "text",
                    value: form().phone,
                    oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                }
            }

            div {
                class: "dialog-buttons",
                button {
                    class: "btn btn-cancel",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-save",
                    onclick: handle_submit,
                    "{submit_label}"
                }
            }
        }
    }
}
