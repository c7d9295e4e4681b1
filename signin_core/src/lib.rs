//! Common code for sign-in front ends: validation, form state, and the
//! request to the authentication server.

/// The state behind the sign-in screen.
pub mod form;
pub use form::{FormState, Phase};

/// How a sign-in attempt turned out.
pub mod result;
pub use result::LoginResult;

/// Validate input and perform the sign-in round trip.
pub mod sign_in;
pub use sign_in::sign_in;

/// Observable, shareable form state.
pub mod store;
pub use store::FormStore;

/// Talk to the authentication server.
pub mod sync;

/// Client-side form validation.
pub mod validate;
pub use validate::is_form_valid;
