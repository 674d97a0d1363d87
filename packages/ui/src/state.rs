//! Screen-level state for the user management view.
//!
//! All of the client's view state lives in one [`UsersScreen`] struct with
//! explicit transition methods, so the components are a pure projection of it.
//! The cached record list is never authoritative: creates and updates trigger a
//! full refetch, deletes remove the record locally.
//!
//! Banners carry a monotonically increasing token. The auto-clear timer hands
//! its token back to [`UsersScreen::clear_banner`], which ignores it if a newer
//! banner has replaced the one the timer was started for.

use api::{NewUser, UserPatch, UserRecord};

/// Lifecycle of the record list.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<UserRecord>),
    Error(String),
}

/// Modal overlay on top of the table.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    /// The add/edit form. `target` is the record id when editing, `None` when
    /// creating.
    EditingForm {
        draft: UserForm,
        target: Option<String>,
    },
    ConfirmingDelete {
        target: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Message,
    Error,
}

/// A transient status line above the table.
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    token: u64,
}

/// In-progress form input, kept as raw text until submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub age: String,
    pub address: String,
    pub phone: String,
}

fn opt_field(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl UserForm {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age.map(|a| a.to_string()).unwrap_or_default(),
            address: record.address.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
        }
    }

    /// Parsed age input: absent when empty, an error when non-numeric.
    /// The form dialog checks this before handing the form to a save handler.
    pub fn parsed_age(&self) -> Result<Option<i32>, String> {
        let raw = self.age.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse()
            .map(Some)
            .map_err(|_| "Age must be a number".to_string())
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age: self.parsed_age().unwrap_or(None),
            address: opt_field(&self.address),
            phone: opt_field(&self.phone),
        }
    }

    /// Empty inputs become absent fields, so an edit never clears a stored
    /// value it didn't show. An unparseable age also becomes absent; the
    /// dialog rejects such input via [`UserForm::parsed_age`] before this
    /// is ever called.
    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            name: opt_field(&self.name),
            email: opt_field(&self.email),
            age: self.parsed_age().unwrap_or(None),
            address: opt_field(&self.address),
            phone: opt_field(&self.phone),
        }
    }
}

/// Case-insensitive substring match against the string form of every field.
pub fn matches_search(user: &UserRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let fields = [
        Some(user.id.clone()),
        Some(user.name.clone()),
        Some(user.email.clone()),
        user.age.map(|a| a.to_string()),
        user.address.clone(),
        user.phone.clone(),
    ];
    fields
        .iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// The whole screen state, driven by the components through its methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersScreen {
    pub load: LoadState,
    pub search: String,
    pub overlay: Overlay,
    pub banner: Option<Banner>,
    banner_seq: u64,
}

impl UsersScreen {
    pub fn new() -> Self {
        Self::default()
    }

    // --- list lifecycle ---

    pub fn start_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn finish_loading(&mut self, users: Vec<UserRecord>) {
        self.load = LoadState::Ready(users);
    }

    pub fn fail_loading(&mut self, message: String) {
        self.load = LoadState::Error(message);
    }

    /// The cached list, empty unless loaded.
    pub fn users(&self) -> &[UserRecord] {
        match &self.load {
            LoadState::Ready(users) => users,
            _ => &[],
        }
    }

    /// Derived view: list filtered by the search term. Never mutates the list.
    pub fn filtered(&self) -> Vec<UserRecord> {
        self.users()
            .iter()
            .filter(|u| matches_search(u, &self.search))
            .cloned()
            .collect()
    }

    pub fn set_search(&mut self, term: String) {
        self.search = term;
    }

    /// Local removal after a confirmed delete; no refetch needed.
    pub fn remove_local(&mut self, id: &str) {
        if let LoadState::Ready(users) = &mut self.load {
            users.retain(|u| u.id != id);
        }
    }

    // --- overlay ---

    pub fn open_create(&mut self) {
        self.overlay = Overlay::EditingForm {
            draft: UserForm::default(),
            target: None,
        };
    }

    pub fn open_edit(&mut self, record: &UserRecord) {
        self.overlay = Overlay::EditingForm {
            draft: UserForm::from_record(record),
            target: Some(record.id.clone()),
        };
    }

    pub fn confirm_delete(&mut self, id: String) {
        self.overlay = Overlay::ConfirmingDelete { target: id };
    }

    /// Close any overlay, discarding the draft.
    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    // --- banners ---

    pub fn show_message(&mut self, text: String) -> u64 {
        self.show_banner(BannerKind::Message, text)
    }

    pub fn show_error(&mut self, text: String) -> u64 {
        self.show_banner(BannerKind::Error, text)
    }

    fn show_banner(&mut self, kind: BannerKind, text: String) -> u64 {
        self.banner_seq += 1;
        self.banner = Some(Banner {
            kind,
            text,
            token: self.banner_seq,
        });
        self.banner_seq
    }

    /// Clear the banner, but only if `token` still identifies the one shown.
    pub fn clear_banner(&mut self, token: u64) {
        if self.banner.as_ref().map(|b| b.token) == Some(token) {
            self.banner = None;
        }
    }
}
