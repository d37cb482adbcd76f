use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::requests::{
    BridgeDaysRequest, DetectConflictsRequest, GenerateScheduleRequest, PossibleLeaveDaysRequest,
    ValidateLeaveRequest, WorkingDaysRequest,
};
use crate::api::state::AppState;
use crate::presentation::engine_dto::{
    BridgeDaysResponseDto, ConflictKindDto, DetectConflictsResponseDto, DoctorAffiliationDto,
    DoctorDto, DoctorStatsDto, LeaveDayDto, LeaveValidationDto, NationalHolidayDto,
    PossibleLeaveDaysResponseDto, ScheduleConflictDto, ScheduleGenerationResultDto, ShiftDto,
    ShiftResponseDto, ShiftTypeDto, TeamDto, WorkingDaysResponseDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scheduling Engine API",
        version = "1.0.0",
        description = "Synchronous monthly doctor shift-scheduling engine"
    ),
    paths(
        crate::api::handlers::engine_handlers::generate_schedule,
        crate::api::handlers::engine_handlers::validate_leave,
        crate::api::handlers::engine_handlers::possible_leave_days,
        crate::api::handlers::engine_handlers::bridge_days,
        crate::api::handlers::engine_handlers::working_days,
        crate::api::handlers::engine_handlers::detect_conflicts,
    ),
    components(schemas(
        GenerateScheduleRequest,
        ValidateLeaveRequest,
        PossibleLeaveDaysRequest,
        BridgeDaysRequest,
        WorkingDaysRequest,
        DetectConflictsRequest,
        DoctorDto,
        DoctorAffiliationDto,
        TeamDto,
        LeaveDayDto,
        NationalHolidayDto,
        ShiftDto,
        ShiftTypeDto,
        ShiftResponseDto,
        ConflictKindDto,
        ScheduleConflictDto,
        DoctorStatsDto,
        ScheduleGenerationResultDto,
        LeaveValidationDto,
        PossibleLeaveDaysResponseDto,
        BridgeDaysResponseDto,
        WorkingDaysResponseDto,
        DetectConflictsResponseDto,
    ))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let engine_router = Router::new()
        .route("/engine/generate", post(handlers::generate_schedule))
        .route("/engine/validate-leave", post(handlers::validate_leave))
        .route("/engine/possible-leave-days", post(handlers::possible_leave_days))
        .route("/engine/bridge-days", post(handlers::bridge_days))
        .route("/engine/working-days", post(handlers::working_days))
        .route("/engine/detect-conflicts", post(handlers::detect_conflicts));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", engine_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
