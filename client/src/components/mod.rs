//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from context providers installed by `App`
//! (`Arc<AppConfig>`, `RwSignal<AuthSession>`, `RwSignal<ToastState>`).

pub mod app_shell;
pub mod form_field;
pub mod loading_screen;
pub mod password_field;
pub mod protected_route;
pub mod toast_host;
