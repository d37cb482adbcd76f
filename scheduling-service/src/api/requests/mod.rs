pub mod engine_request;

pub use engine_request::{
    BridgeDaysRequest, DetectConflictsRequest, GenerateScheduleRequest, PossibleLeaveDaysRequest,
    ValidateLeaveRequest, WorkingDaysRequest,
};
