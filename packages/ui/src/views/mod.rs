mod confirm_delete;
mod modal_overlay;
mod user_form;
mod users;

pub use confirm_delete::ConfirmDeleteDialog;
pub use modal_overlay::ModalOverlay;
pub use user_form::UserFormDialog;
pub use users::UsersView;
