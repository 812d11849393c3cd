//! Token issuing, verification, and the request gates built on them.

pub mod gate;
pub mod jwt;
pub mod password;

pub use gate::{authenticate, authorize, AdminUser, AuthenticatedUser, ADMIN_ROLE};
pub use jwt::{mint_access_token, verify_access_token, Claims, TokenRejected, TOKEN_TTL_SECS};
