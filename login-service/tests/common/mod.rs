use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Utc;
use login_service::domain::login::errors::LookupError;
use login_service::domain::login::errors::TokenStoreError;
use login_service::domain::login::models::AccessToken;
use login_service::domain::login::models::EmailAddress;
use login_service::domain::login::models::User;
use login_service::domain::login::models::UserId;
use login_service::domain::login::ports::AccessTokenRepository;
use login_service::domain::login::ports::UserRepository;
use login_service::domain::login::service::AuthService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::security::Argon2PasswordComparator;
use login_service::outbound::security::JwtTokenGenerator;
use login_service::outbound::validators::EmailFormatValidator;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub token_store: Arc<InMemoryAccessTokenStore>,
    users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::new());
        let token_store = Arc::new(InMemoryAccessTokenStore::new());

        let auth_service = Arc::new(
            AuthService::new(
                Arc::clone(&users),
                Arc::new(Argon2PasswordComparator::new()),
                Arc::new(JwtTokenGenerator::new(TEST_JWT_SECRET, 24)),
            )
            .with_token_store(Arc::clone(&token_store) as Arc<dyn AccessTokenRepository>),
        );

        let router = create_router(auth_service, Some(Arc::new(EmailFormatValidator::new())));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
            token_store,
            users,
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Register a user directly in the backing store.
    pub fn seed_user(&self, email: &str, password: &str) -> UserId {
        let password_hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");

        let user = User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).expect("Invalid test email"),
            password_hash,
            created_at: Utc::now(),
        };
        let id = user.id;

        self.users
            .users
            .write()
            .expect("User store poisoned")
            .insert(email.to_string(), user);

        id
    }
}

/// User store backed by process memory, keyed by email.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, LookupError> {
        let users = self.users.read().expect("User store poisoned");
        Ok(users.get(email).cloned())
    }
}

/// Token store that records every update it receives.
pub struct InMemoryAccessTokenStore {
    updates: Mutex<Vec<(UserId, String)>>,
}

impl InMemoryAccessTokenStore {
    pub fn new() -> Self {
        Self {
            updates: Mutex::new(Vec::new()),
        }
    }

    /// All `(user id, token)` pairs recorded so far, in call order.
    pub fn recorded(&self) -> Vec<(UserId, String)> {
        self.updates.lock().expect("Token store poisoned").clone()
    }
}

#[async_trait]
impl AccessTokenRepository for InMemoryAccessTokenStore {
    async fn update(&self, user_id: &UserId, token: &AccessToken) -> Result<(), TokenStoreError> {
        self.updates
            .lock()
            .expect("Token store poisoned")
            .push((*user_id, token.as_str().to_string()));
        Ok(())
    }
}
