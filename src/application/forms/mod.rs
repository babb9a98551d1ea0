//! Client-side form models and their validation rules.

pub mod login_form;
pub mod record_form;
pub mod signup_form;

pub use login_form::LoginForm;
pub use record_form::{FormMode, RecordForm};
pub use signup_form::SignupForm;
