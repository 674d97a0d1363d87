use std::time::Duration;

use api::ApiClient;
use dioxus::prelude::*;

use super::{ConfirmDeleteDialog, ModalOverlay, UserFormDialog};
use crate::state::{BannerKind, LoadState, Overlay, UserForm, UsersScreen};

const BANNER_CLEAR_DELAY: Duration = Duration::from_secs(1);

/// Show a banner and schedule its auto-clear. The clear is token-guarded, so a
/// timer that outlives its banner never wipes a newer one.
fn flash(mut screen: Signal<UsersScreen>, kind: BannerKind, text: String) {
    let token = match kind {
        BannerKind::Message => screen.write().show_message(text),
        BannerKind::Error => screen.write().show_error(text),
    };
    spawn(async move {
        tokio::time::sleep(BANNER_CLEAR_DELAY).await;
        screen.write().clear_banner(token);
    });
}

/// Full list refetch, used after create and update.
async fn refresh(client: &ApiClient, mut screen: Signal<UsersScreen>) {
    match client.fetch_users().await {
        Ok(users) => screen.write().finish_loading(users),
        Err(err) => {
            tracing::error!("failed to refresh users: {err}");
            flash(screen, BannerKind::Error, format!("Failed to fetch users. {err}"));
        }
    }
}

/// The user management screen: search, table, add/edit form and delete
/// confirmation, all projected from one [`UsersScreen`] signal.
#[component]
pub fn UsersView() -> Element {
    let client = use_context::<ApiClient>();
    let mut screen = use_signal(UsersScreen::new);

    // Fetch the list on mount.
    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            screen.write().start_loading();
            match client.fetch_users().await {
                Ok(users) => screen.write().finish_loading(users),
                Err(err) => screen
                    .write()
                    .fail_loading(format!("Failed to fetch users. {err}")),
            }
        }
    });

    let save_client = client.clone();
    let handle_save = move |form: UserForm| {
        let client = save_client.clone();
        spawn(async move {
            let target = match &screen().overlay {
                Overlay::EditingForm { target, .. } => target.clone(),
                _ => None,
            };
            let result = match &target {
                Some(id) => client
                    .update_user(id, &form.to_patch())
                    .await
                    .map(|_| "User updated successfully!"),
                None => client
                    .create_user(&form.to_new_user())
                    .await
                    .map(|_| "User added successfully!"),
            };
            match result {
                Ok(message) => {
                    screen.write().close_overlay();
                    flash(screen, BannerKind::Message, message.to_string());
                    refresh(&client, screen).await;
                }
                // The form stays open so the input isn't lost.
                Err(err) => flash(screen, BannerKind::Error, format!("Error saving user: {err}")),
            }
        });
    };

    let delete_client = client.clone();
    let handle_confirm_delete = move |_| {
        let client = delete_client.clone();
        spawn(async move {
            let target = match screen().overlay {
                Overlay::ConfirmingDelete { target } => Some(target),
                _ => None,
            };
            let Some(id) = target else { return };
            screen.write().close_overlay();
            match client.delete_user(&id).await {
                Ok(_) => {
                    screen.write().remove_local(&id);
                    flash(
                        screen,
                        BannerKind::Message,
                        "User deleted successfully!".to_string(),
                    );
                }
                Err(err) => flash(screen, BannerKind::Error, format!("Error deleting user: {err}")),
            }
        });
    };

    let current = screen();

    let banner = current.banner.as_ref().map(|b| {
        let class = match b.kind {
            BannerKind::Message => "banner banner-message",
            BannerKind::Error => "banner banner-error",
        };
        rsx! {
            div { class: "{class}", "{b.text}" }
        }
    });

    let rows = current.filtered().into_iter().map(|user| {
        let age = user.age.map(|a| a.to_string()).unwrap_or_default();
        let address = user.address.clone().unwrap_or_default();
        let phone = user.phone.clone().unwrap_or_default();
        let delete_id = user.id.clone();
        let edit_user = user.clone();
        rsx! {
            tr { key: "{user.id}",
                td { "{user.name}" }
                td { "{user.email}" }
                td { "{age}" }
                td { "{address}" }
                td { "{phone}" }
                td { class: "actions",
                    button {
                        class: "btn btn-edit",
                        onclick: move |_| screen.write().open_edit(&edit_user),
                        "Edit"
                    }
                    button {
                        class: "btn btn-delete",
                        onclick: move |_| screen.write().confirm_delete(delete_id.clone()),
                        "Delete"
                    }
                }
            }
        }
    });

    let table = match &current.load {
        LoadState::Idle | LoadState::Loading => rsx! {
            p { class: "status", "Loading users..." }
        },
        LoadState::Error(message) => rsx! {
            p { class: "status status-error", "{message}" }
        },
        LoadState::Ready(_) => rsx! {
            div { class: "table-wrap",
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Age" }
                            th { "Address" }
                            th { "Phone" }
                            th { "Actions" }
                        }
                    }
                    tbody { {rows} }
                }
            }
        },
    };

    let overlay = match current.overlay.clone() {
        Overlay::EditingForm { draft, target } => rsx! {
            ModalOverlay {
                on_close: move |_| screen.write().close_overlay(),
                UserFormDialog {
                    draft,
                    editing: target.is_some(),
                    on_save: handle_save,
                    on_cancel: move |_| screen.write().close_overlay(),
                }
            }
        },
        Overlay::ConfirmingDelete { .. } => rsx! {
            ModalOverlay {
                on_close: move |_| screen.write().close_overlay(),
                ConfirmDeleteDialog {
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| screen.write().close_overlay(),
                }
            }
        },
        Overlay::None => rsx! {},
    };

    rsx! {
        div { class: "user-management",
            h1 { "User Management" }
            {banner}
            div { class: "toolbar",
                input {
                    class: "search",
                    r#type: "text",
                    placeholder: "Search Users...",
                    value: "{current.search}",
                    oninput: move |evt: FormEvent| screen.write().set_search(evt.value()),
                }
                button {
                    class: "btn btn-add",
                    onclick: move |_| screen.write().open_create(),
                    "Add User"
                }
            }
            {table}
            {overlay}
        }
    }
}
