mod bearer_token;
mod login;

pub use bearer_token::BearerToken;
pub use login::{AuthError, Credentials, get_access_token};
