//! HTTP request handlers.

use super::types::{
    HealthResponse, SubmitOtpRequest, SubmitOtpResponse, SubmitPhoneRequest, SubmitPhoneResponse,
};
use super::AppState;
use crate::error::RegistrationError;
use crate::session::SessionSnapshot;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use registration_flow::{Stage, COUNTRY_CODE};
use tracing::{error, info, warn};
use uuid::Uuid;

fn session_not_found(id: Uuid) -> RegistrationError {
    RegistrationError::SessionNotFound(id.to_string())
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        active_sessions: state.sessions.count().await,
        delivery: state.sender.name().to_string(),
        delivery_healthy: state.sender.health_check().await,
    })
}

/// Start a registration session.
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let snapshot = state.sessions.create().await;
    (StatusCode::CREATED, Json(snapshot))
}

/// Get the current state of a session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, RegistrationError> {
    state
        .sessions
        .snapshot(id)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// Discard a session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RegistrationError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// Phone stage: validate the number, issue a code and deliver it.
pub async fn submit_phone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitPhoneRequest>,
) -> Result<Json<SubmitPhoneResponse>, RegistrationError> {
    let issued = state
        .sessions
        .update(id, |draft| draft.submit_phone(&request.phone, request.user_type))
        .await
        .ok_or_else(|| session_not_found(id))?
        .inspect_err(|_| warn!(session_id = %id, "Rejected invalid phone number"))?;

    let masked = format!("{} {}", COUNTRY_CODE, issued.phone.masked());
    info!(
        session_id = %id,
        phone_number = %masked,
        user_type = %issued.user_type,
        sender = state.sender.name(),
        "Delivering verification code"
    );

    if let Err(e) = state
        .sender
        .deliver(&issued.phone.e164(), issued.code.secret())
        .await
    {
        error!(session_id = %id, error = %e, "Code delivery failed");
        // A later submission may have issued and delivered a newer code
        state
            .sessions
            .update(id, |draft| draft.abandon_code(issued.issue))
            .await;
        return Err(e.into());
    }

    Ok(Json(SubmitPhoneResponse {
        session_id: id,
        stage: Stage::OtpEntry,
        message: format!("OTP sent to {}", masked),
        phone_number: masked,
    }))
}

/// OTP stage: check the submitted code.
pub async fn submit_otp(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitOtpRequest>,
) -> Result<Json<SubmitOtpResponse>, RegistrationError> {
    let registration = state
        .sessions
        .update(id, |draft| draft.submit_otp(&request.code))
        .await
        .ok_or_else(|| session_not_found(id))?
        .inspect_err(|e| warn!(session_id = %id, error = %e, "Code check failed"))?;

    info!(
        session_id = %id,
        user_type = %registration.user_type,
        "User registered"
    );

    Ok(Json(SubmitOtpResponse {
        session_id: id,
        status: "registered".to_string(),
        phone_number: registration.phone_number,
        user_type: registration.user_type,
        message: "Registration Successful! 🚕".to_string(),
    }))
}
