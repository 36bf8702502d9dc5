use actix_web::{
    get,
    http::StatusCode,
    post,
    web::{Data, Json},
    HttpResponse, ResponseError,
};

use auth_core::{
    session::{Session, SessionStore},
    token::TokenError,
    user::{User, UserStore},
};

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Phantom Backend is running")
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

#[derive(serde::Deserialize)]
pub struct PhantomAuthRequest {
    // An absent key decodes to the empty string and is accepted as-is
    #[serde(rename = "publicKey", default)]
    pub public_key: String,
}

#[derive(serde::Serialize)]
pub struct PhantomAuthResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(thiserror::Error, Debug)]
#[error("Failed to mint a user identifier")]
pub struct RegistrationError(#[from] TokenError);

// Default `error_response` answers 500 with the Display text
impl ResponseError for RegistrationError {}

/// Register a caller by public key. The key is stored untouched; no
/// signature challenge is issued. Registering the same key twice mints
/// two independent users.
#[post("/auth/phantom")]
pub async fn phantom_auth(
    request: Json<PhantomAuthRequest>,
    users: Data<UserStore>,
) -> Result<Json<PhantomAuthResponse>, RegistrationError> {
    let user = User::create(request.into_inner().public_key)?;
    let user_id = user.id.clone();
    users.insert(user);

    Ok(Json(PhantomAuthResponse { user_id }))
}

#[derive(serde::Deserialize)]
pub struct CreateSessionRequest {
    #[serde(rename = "userId", default)]
    pub user_id: String,
}

#[derive(serde::Serialize)]
pub struct CreateSessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: String,
}

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("User not found")]
    UnknownUser,
    #[error("Failed to mint a session identifier")]
    Token(#[from] TokenError),
}

impl ResponseError for SessionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SessionError::UnknownUser => StatusCode::NOT_FOUND,
            SessionError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Open a 24-hour session for a registered user. The registry is only
/// written after the user lookup succeeds.
#[post("/ai/session")]
pub async fn create_ai_session(
    request: Json<CreateSessionRequest>,
    users: Data<UserStore>,
    sessions: Data<SessionStore>,
) -> Result<Json<CreateSessionResponse>, SessionError> {
    let user_id = request.into_inner().user_id;
    if users.get(&user_id).is_none() {
        return Err(SessionError::UnknownUser);
    }

    let session = Session::open(user_id)?;
    let response = CreateSessionResponse {
        session_id: session.session_id.clone(),
        user_id: session.user_id.clone(),
        expires_at: session.expires_at.to_rfc3339(),
    };
    sessions.insert(session);

    Ok(Json(response))
}
