use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
};
use ferrule_domain::DomainError;
use tracing::{debug, error, instrument, warn};

use crate::{
    dto::{CheckRequest, EligibilityQuery, EligibilityResponse, ErrorResponse},
    state::AppState,
};

#[instrument(skip(state), name = "api_get_eligibility")]
pub async fn get_eligibility(
    State(state): State<AppState>,
    Query(query): Query<EligibilityQuery>,
) -> Result<Json<EligibilityResponse>, (StatusCode, Json<ErrorResponse>)> {
    let phone = query.phone.unwrap_or_default();
    if phone.trim().is_empty() {
        return Err(bad_request(
            "missing_parameter",
            "Query parameter 'phone' is required",
        ));
    }

    execute_check(&state, &phone).await
}

#[instrument(skip(state, payload), name = "api_post_eligibility")]
pub async fn post_eligibility(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<EligibilityResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected malformed eligibility request body");
        bad_request("invalid_request", "Invalid JSON body")
    })?;

    execute_check(&state, &request.phone_number).await
}

/// Wrong-verb fallback for the eligibility route.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(
            "method_not_allowed",
            "Only GET and POST methods are allowed",
        )),
    )
}

async fn execute_check(
    state: &AppState,
    raw_phone: &str,
) -> Result<Json<EligibilityResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.check_eligibility.execute(raw_phone).await {
        Ok(resolution) => {
            let report = resolution.report.without_raw_html();

            if !report.found {
                debug!(phone = %report.phone_number, "Line unknown to the operator");
                let message = report.error_message.clone().unwrap_or_default();
                return Err((
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse::new("not_found", message)),
                ));
            }

            debug!(
                phone = %report.phone_number,
                from_cache = resolution.from_cache,
                "Eligibility check completed"
            );
            Ok(Json(EligibilityResponse {
                success: true,
                data: report,
                from_cache: resolution.from_cache,
            }))
        }
        Err(DomainError::InvalidPhoneNumber(message)) => {
            Err(bad_request("validation_error", message))
        }
        Err(e) => {
            error!(error = %e, "Eligibility acquisition failed");
            Err(bad_request("acquisition_failed", e.to_string()))
        }
    }
}

fn bad_request(error: &str, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(error, message)),
    )
}
