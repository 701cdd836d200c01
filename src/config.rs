use std::env;

/// AppConfig
///
/// Holds the application's entire configuration state. This struct is designed to be
/// immutable once loaded, ensuring consistency across all threads and services (e.g.,
/// Repository, Storage). It is pulled into the application state via FromRef, embodying
/// the "immutable AppConfig" part of the Unified State Pattern.
#[derive(Clone)]
pub struct AppConfig {
    // Path to the SQLite database file.
    pub db_path: String,
    // Directory where uploaded files are written. Served publicly under /uploads.
    pub upload_dir: String,
    // Runtime environment marker. Controls feature activation (e.g., Dev Bypass).
    pub env: Env,
    // Secret key used to sign and validate session JWTs.
    pub jwt_secret: String,
}

/// Env
///
/// Defines the runtime context, used to switch between development utilities
/// (pretty logs, the x-user-id auth bypass) and hardened production behavior
/// (JSON logs, mandatory secrets).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for test setup.
    /// This allows us to instantiate the configuration without needing to set environment
    /// variables for lightweight unit or integration testing state scaffolding.
    fn default() -> Self {
        Self {
            db_path: "data/cms-test.db".to_string(),
            upload_dir: "public/uploads".to_string(),
            env: Env::Local,
            jwt_secret: "super-secure-test-secret-value-local".to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration at startup.
    /// It reads all parameters from environment variables and implements the **fail-fast**
    /// principle.
    ///
    /// # Panics
    /// Panics if a critical environment variable required for the current runtime
    /// environment (especially Production) is not found. This prevents the application
    /// from starting with an incomplete or insecure configuration.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // JWT Secret Resolution
        // The production secret is mandatory and must be explicitly set.
        let jwt_secret = match env {
            Env::Production => {
                env::var("JWT_SECRET").expect("FATAL: JWT_SECRET must be set in production.")
            }
            // In local, we provide a fallback so a fresh checkout boots without setup.
            _ => env::var("JWT_SECRET")
                .unwrap_or_else(|_| "super-secure-test-secret-value-local".to_string()),
        };

        let db_path = match env {
            // Production demands an explicit database location.
            Env::Production => {
                env::var("DATABASE_PATH").expect("FATAL: DATABASE_PATH required in prod")
            }
            _ => env::var("DATABASE_PATH").unwrap_or_else(|_| "data/cms.db".to_string()),
        };

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".to_string());

        Self {
            env,
            db_path,
            upload_dir,
            jwt_secret,
        }
    }
}
