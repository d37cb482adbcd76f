//! Monthly doctor shift-scheduling engine: builds a day/night roster for a team-and-floating
//! doctor pool, enforces rest and weekly-hours constraints, and reports staffing conflicts
//! and base-norm shortfalls. Synchronous and stateless between calls — see [`Engine`].

pub mod constants;
mod date;
mod model;
mod calendar;
mod norm;
mod bridge;
mod engine_state;
mod rules;
mod engine;
mod validator;
mod validators;

pub use date::CivilDate;
pub use engine::{Engine, EngineConfig};
pub use model::{
    ConflictKind, Doctor, DoctorAffiliation, DoctorId, DoctorStats, LeaveDay, LeaveValidation,
    NationalHoliday, ScheduleConflict, ScheduleGenerationResult, Shift, ShiftType, Team, TeamId,
};
pub use model::message_keys;
pub use validators::{
    calculate_possible_leave_days, compute_doctor_bridge_days, detect_conflicts, validate_leave_days,
    working_days_in_month,
};
