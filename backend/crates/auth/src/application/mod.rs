//! Application Layer
//!
//! Use cases and application services.

pub mod authenticator;
pub mod config;
pub mod login;
pub mod logout;
pub mod register;
pub mod reset_password;

// Re-exports
pub use authenticator::SessionAuthenticator;
pub use config::{AuthConfig, ConfigError, Environment};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use reset_password::{ResetPasswordInput, ResetPasswordUseCase};
