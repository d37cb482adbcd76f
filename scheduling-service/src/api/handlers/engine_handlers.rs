use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::api::requests::engine_request::{
    BridgeDaysRequest, DetectConflictsRequest, GenerateScheduleRequest, PossibleLeaveDaysRequest,
    ValidateLeaveRequest, WorkingDaysRequest,
};
use crate::presentation::engine_dto::{
    BridgeDaysResponseDto, DetectConflictsResponseDto, LeaveValidationDto,
    PossibleLeaveDaysResponseDto, ScheduleGenerationResultDto, WorkingDaysResponseDto,
};
use scheduling_engine::{Engine, EngineConfig, LeaveDay, NationalHoliday};
use shared::DomainError;

fn bad_request(err: DomainError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}

fn collect_leave_days(dtos: Vec<crate::presentation::engine_dto::LeaveDayDto>) -> Result<Vec<LeaveDay>, (StatusCode, String)> {
    dtos.into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()
        .map_err(bad_request)
}

fn collect_holidays(
    dtos: Vec<crate::presentation::engine_dto::NationalHolidayDto>,
) -> Result<Vec<NationalHoliday>, (StatusCode, String)> {
    dtos.into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()
        .map_err(bad_request)
}

/// Generate a full month's schedule.
#[utoipa::path(
    post,
    path = "/api/v1/engine/generate",
    request_body = GenerateScheduleRequest,
    responses(
        (status = 200, description = "Schedule generated", body = ScheduleGenerationResultDto),
        (status = 400, description = "Structurally invalid input")
    ),
    tag = "engine"
)]
pub async fn generate_schedule(
    Json(request): Json<GenerateScheduleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let leave_days = collect_leave_days(request.leave_days)?;
    let national_holidays = collect_holidays(request.national_holidays)?;

    let config = EngineConfig {
        month: request.month,
        year: request.year,
        doctors: request.doctors.into_iter().map(Into::into).collect(),
        teams: request.teams.into_iter().map(Into::into).collect(),
        shifts_per_day: request.shifts_per_day,
        shifts_per_night: request.shifts_per_night,
        leave_days,
        national_holidays,
    };

    let engine = Engine::new(config).map_err(bad_request)?;
    let result = engine.generate_schedule();
    tracing::info!(
        shifts = result.shifts.len(),
        conflicts = result.conflicts.len(),
        warnings = result.warnings.len(),
        "schedule generated"
    );

    Ok(Json(ScheduleGenerationResultDto::from(result)))
}

/// Predict whether a proposed leave plan still leaves enough labour slots for every doctor's
/// base norm, without generating a schedule.
#[utoipa::path(
    post,
    path = "/api/v1/engine/validate-leave",
    request_body = ValidateLeaveRequest,
    responses(
        (status = 200, description = "Leave plan evaluated", body = LeaveValidationDto),
        (status = 400, description = "Structurally invalid input")
    ),
    tag = "engine"
)]
pub async fn validate_leave(
    Json(request): Json<ValidateLeaveRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let leave_days = collect_leave_days(request.leave_days)?;
    let national_holidays = collect_holidays(request.national_holidays)?;
    let doctors: Vec<_> = request.doctors.into_iter().map(Into::into).collect();

    let result = scheduling_engine::validate_leave_days(
        &leave_days,
        &doctors,
        request.month,
        request.year,
        request.shifts_per_day,
        request.shifts_per_night,
        &national_holidays,
    )
    .map_err(bad_request)?;

    Ok(Json(LeaveValidationDto::from(result)))
}

/// The largest total leave-day budget a roster can absorb while everyone still meets their
/// (leave-free) base norm.
#[utoipa::path(
    post,
    path = "/api/v1/engine/possible-leave-days",
    request_body = PossibleLeaveDaysRequest,
    responses(
        (status = 200, description = "Computed", body = PossibleLeaveDaysResponseDto),
        (status = 400, description = "Structurally invalid input")
    ),
    tag = "engine"
)]
pub async fn possible_leave_days(
    Json(request): Json<PossibleLeaveDaysRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let national_holidays = collect_holidays(request.national_holidays)?;

    let possible = scheduling_engine::calculate_possible_leave_days(
        request.month,
        request.year,
        request.doctor_count,
        request.shifts_per_day,
        request.shifts_per_night,
        &national_holidays,
    )
    .map_err(bad_request)?;

    Ok(Json(PossibleLeaveDaysResponseDto { possible_leave_days: possible }))
}

/// The set of dates a doctor is blacked out from scheduling because they bridge two declared
/// leave dates across only non-working days.
#[utoipa::path(
    post,
    path = "/api/v1/engine/bridge-days",
    request_body = BridgeDaysRequest,
    responses(
        (status = 200, description = "Computed", body = BridgeDaysResponseDto),
        (status = 400, description = "Structurally invalid input")
    ),
    tag = "engine"
)]
pub async fn bridge_days(
    Json(request): Json<BridgeDaysRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let leave_days = collect_leave_days(request.leave_days)?;
    let national_holidays = collect_holidays(request.national_holidays)?;

    let bridges = scheduling_engine::compute_doctor_bridge_days(
        &request.doctor_id,
        &leave_days,
        request.month,
        request.year,
        &national_holidays,
    )
    .map_err(bad_request)?;

    Ok(Json(BridgeDaysResponseDto::from(bridges)))
}

/// Count the working (non-weekend, non-holiday) days in a month.
#[utoipa::path(
    post,
    path = "/api/v1/engine/working-days",
    request_body = WorkingDaysRequest,
    responses(
        (status = 200, description = "Computed", body = WorkingDaysResponseDto),
        (status = 400, description = "Structurally invalid input")
    ),
    tag = "engine"
)]
pub async fn working_days(
    Json(request): Json<WorkingDaysRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let national_holidays = collect_holidays(request.national_holidays)?;

    let count = scheduling_engine::working_days_in_month(request.month, request.year, &national_holidays)
        .map_err(bad_request)?;

    Ok(Json(WorkingDaysResponseDto { working_days: count }))
}

/// Re-validate a caller-supplied shift list for staffing and rest-constraint conflicts.
#[utoipa::path(
    post,
    path = "/api/v1/engine/detect-conflicts",
    request_body = DetectConflictsRequest,
    responses(
        (status = 200, description = "Computed", body = DetectConflictsResponseDto),
        (status = 400, description = "Structurally invalid input")
    ),
    tag = "engine"
)]
pub async fn detect_conflicts(
    Json(request): Json<DetectConflictsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let shifts = request
        .shifts
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()
        .map_err(bad_request)?;
    let doctors = request.doctors.into_iter().map(Into::into).collect::<Vec<_>>();

    let conflicts = scheduling_engine::detect_conflicts(&shifts, &doctors, request.shifts_per_day, request.shifts_per_night);

    Ok(Json(DetectConflictsResponseDto {
        conflicts: conflicts.into_iter().map(Into::into).collect(),
    }))
}
