use crate::date::CivilDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub type DoctorId = String;
pub type TeamId = String;

/// Whether a doctor rotates with a team or fills in as a floating member. Mutually exclusive
/// by construction rather than a boolean flag paired with an optional team id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DoctorAffiliation {
    InTeam { team_id: TeamId },
    Floating,
}

impl DoctorAffiliation {
    pub fn team_id(&self) -> Option<&TeamId> {
        match self {
            DoctorAffiliation::InTeam { team_id } => Some(team_id),
            DoctorAffiliation::Floating => None,
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, DoctorAffiliation::Floating)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub affiliation: DoctorAffiliation,
    /// Accepted and forwarded, never consulted by the core algorithm.
    #[serde(default)]
    pub preferences: Option<JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub color: String,
    pub max_members: Option<u32>,
    pub order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Day,
    Night,
}

impl ShiftType {
    /// Hour-of-day this shift type starts at.
    pub fn start_hour(self) -> u32 {
        match self {
            ShiftType::Day => 8,
            ShiftType::Night => 20,
        }
    }

    /// Hour-of-day this shift type ends at, on the *next* civil date for a night shift.
    pub fn end_hour(self) -> u32 {
        match self {
            ShiftType::Day => 20,
            ShiftType::Night => 8,
        }
    }

    pub fn start_time(self) -> &'static str {
        match self {
            ShiftType::Day => "08:00",
            ShiftType::Night => "20:00",
        }
    }

    pub fn end_time(self) -> &'static str {
        match self {
            ShiftType::Day => "20:00",
            ShiftType::Night => "08:00",
        }
    }
}

/// A concrete shift assignment emitted by the engine. Omits a persistence id — the caller
/// assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub doctor_id: DoctorId,
    pub shift_date: CivilDate,
    pub shift_type: ShiftType,
    pub start_time: &'static str,
    pub end_time: &'static str,
}

impl Shift {
    pub fn new(doctor_id: DoctorId, shift_date: CivilDate, shift_type: ShiftType) -> Self {
        Self {
            doctor_id,
            shift_date,
            start_time: shift_type.start_time(),
            end_time: shift_type.end_time(),
            shift_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDay {
    pub doctor_id: DoctorId,
    pub date: CivilDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationalHoliday {
    pub date: CivilDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    RestViolation,
    Understaffed,
    Overstaffed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConflict {
    pub kind: ConflictKind,
    pub date: CivilDate,
    pub doctor_id: Option<DoctorId>,
    pub message_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorStats {
    pub doctor_id: DoctorId,
    pub total_hours_worked: i64,
    pub total_shifts: u32,
    pub day_shifts: u32,
    pub night_shifts: u32,
    pub leave_days: u32,
    pub base_norm_hours: i64,
    pub meets_base_norm: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleGenerationResult {
    pub shifts: Vec<Shift>,
    pub conflicts: Vec<ScheduleConflict>,
    pub warnings: Vec<String>,
    pub doctor_stats: Vec<DoctorStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveValidation {
    pub is_valid: bool,
    pub required_leave_days: i64,
    pub message: String,
}

pub mod message_keys {
    pub const NORM_WARNING: &str = "scheduling.engine.normWarning";
    pub const REST_VIOLATION: &str = "scheduling.engine.rest_violation";
    pub const UNDERSTAFFED: &str = "scheduling.engine.understaffed";
    pub const OVERSTAFFED: &str = "scheduling.engine.overstaffed";
    pub const LEAVE_PLAN_FEASIBLE: &str = "scheduling.engine.leave_plan_feasible";
    pub const LEAVE_PLAN_INFEASIBLE: &str = "scheduling.engine.leave_plan_infeasible";
}
