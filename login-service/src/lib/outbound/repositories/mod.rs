pub mod access_token;
pub mod user;

pub use access_token::PostgresAccessTokenRepository;
pub use user::PostgresUserRepository;
