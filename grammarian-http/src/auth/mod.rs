pub mod extractor;
pub mod middleware;
pub mod store;

pub use extractor::{AuthAuthor, AuthUser};
pub use middleware::auth_middleware;
pub use store::AuthStore;
