//! Wire-shaped mirrors of `scheduling_engine`'s domain types. The engine crate stays free of
//! HTTP/OpenAPI derives; this module is the only place that knows about `utoipa::ToSchema` and
//! about turning `CivilDate` into the ISO-8601 strings the JSON boundary uses.

use scheduling_engine::{
    CivilDate, ConflictKind as EngineConflictKind, Doctor as EngineDoctor,
    DoctorAffiliation as EngineAffiliation, DoctorStats as EngineDoctorStats,
    LeaveDay as EngineLeaveDay, LeaveValidation as EngineLeaveValidation,
    NationalHoliday as EngineHoliday, ScheduleConflict as EngineConflict,
    ScheduleGenerationResult as EngineResult, Shift as EngineShift, ShiftType as EngineShiftType,
    Team as EngineTeam,
};
use serde::{Deserialize, Serialize};
use shared::DomainError;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DoctorAffiliationDto {
    InTeam { team_id: String },
    Floating,
}

impl From<DoctorAffiliationDto> for EngineAffiliation {
    fn from(value: DoctorAffiliationDto) -> Self {
        match value {
            DoctorAffiliationDto::InTeam { team_id } => EngineAffiliation::InTeam { team_id },
            DoctorAffiliationDto::Floating => EngineAffiliation::Floating,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DoctorDto {
    pub id: String,
    pub name: String,
    pub affiliation: DoctorAffiliationDto,
    #[serde(default)]
    pub preferences: Option<serde_json::Value>,
}

impl From<DoctorDto> for EngineDoctor {
    fn from(value: DoctorDto) -> Self {
        EngineDoctor {
            id: value.id,
            name: value.name,
            affiliation: value.affiliation.into(),
            preferences: value.preferences,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub max_members: Option<u32>,
    pub order: i32,
}

impl From<TeamDto> for EngineTeam {
    fn from(value: TeamDto) -> Self {
        EngineTeam {
            id: value.id,
            name: value.name,
            color: value.color,
            max_members: value.max_members,
            order: value.order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LeaveDayDto {
    pub doctor_id: String,
    /// ISO-8601 `YYYY-MM-DD`.
    pub date: String,
}

impl TryFrom<LeaveDayDto> for EngineLeaveDay {
    type Error = DomainError;

    fn try_from(value: LeaveDayDto) -> Result<Self, Self::Error> {
        Ok(EngineLeaveDay {
            doctor_id: value.doctor_id,
            date: CivilDate::parse_iso(&value.date)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NationalHolidayDto {
    /// ISO-8601 `YYYY-MM-DD`.
    pub date: String,
    pub description: Option<String>,
}

impl TryFrom<NationalHolidayDto> for EngineHoliday {
    type Error = DomainError;

    fn try_from(value: NationalHolidayDto) -> Result<Self, Self::Error> {
        Ok(EngineHoliday {
            date: CivilDate::parse_iso(&value.date)?,
            description: value.description,
        })
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShiftTypeDto {
    Day,
    Night,
}

impl From<ShiftTypeDto> for EngineShiftType {
    fn from(value: ShiftTypeDto) -> Self {
        match value {
            ShiftTypeDto::Day => EngineShiftType::Day,
            ShiftTypeDto::Night => EngineShiftType::Night,
        }
    }
}

impl From<EngineShiftType> for ShiftTypeDto {
    fn from(value: EngineShiftType) -> Self {
        match value {
            EngineShiftType::Day => ShiftTypeDto::Day,
            EngineShiftType::Night => ShiftTypeDto::Night,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ShiftDto {
    pub doctor_id: String,
    /// ISO-8601 `YYYY-MM-DD`.
    pub shift_date: String,
    pub shift_type: ShiftTypeDto,
}

impl TryFrom<ShiftDto> for EngineShift {
    type Error = DomainError;

    fn try_from(value: ShiftDto) -> Result<Self, Self::Error> {
        Ok(EngineShift::new(
            value.doctor_id,
            CivilDate::parse_iso(&value.shift_date)?,
            value.shift_type.into(),
        ))
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShiftResponseDto {
    pub doctor_id: String,
    pub shift_date: String,
    pub shift_type: ShiftTypeDto,
    pub start_time: String,
    pub end_time: String,
}

impl From<EngineShift> for ShiftResponseDto {
    fn from(value: EngineShift) -> Self {
        Self {
            doctor_id: value.doctor_id,
            shift_date: value.shift_date.to_iso(),
            shift_type: value.shift_type.into(),
            start_time: value.start_time.to_string(),
            end_time: value.end_time.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKindDto {
    RestViolation,
    Understaffed,
    Overstaffed,
}

impl From<EngineConflictKind> for ConflictKindDto {
    fn from(value: EngineConflictKind) -> Self {
        match value {
            EngineConflictKind::RestViolation => ConflictKindDto::RestViolation,
            EngineConflictKind::Understaffed => ConflictKindDto::Understaffed,
            EngineConflictKind::Overstaffed => ConflictKindDto::Overstaffed,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleConflictDto {
    pub kind: ConflictKindDto,
    pub date: String,
    pub doctor_id: Option<String>,
    pub message_key: String,
}

impl From<EngineConflict> for ScheduleConflictDto {
    fn from(value: EngineConflict) -> Self {
        Self {
            kind: value.kind.into(),
            date: value.date.to_iso(),
            doctor_id: value.doctor_id,
            message_key: value.message_key,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DoctorStatsDto {
    pub doctor_id: String,
    pub total_hours_worked: i64,
    pub total_shifts: u32,
    pub day_shifts: u32,
    pub night_shifts: u32,
    pub leave_days: u32,
    pub base_norm_hours: i64,
    pub meets_base_norm: bool,
}

impl From<EngineDoctorStats> for DoctorStatsDto {
    fn from(value: EngineDoctorStats) -> Self {
        Self {
            doctor_id: value.doctor_id,
            total_hours_worked: value.total_hours_worked,
            total_shifts: value.total_shifts,
            day_shifts: value.day_shifts,
            night_shifts: value.night_shifts,
            leave_days: value.leave_days,
            base_norm_hours: value.base_norm_hours,
            meets_base_norm: value.meets_base_norm,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleGenerationResultDto {
    pub shifts: Vec<ShiftResponseDto>,
    pub conflicts: Vec<ScheduleConflictDto>,
    pub warnings: Vec<String>,
    pub doctor_stats: Vec<DoctorStatsDto>,
}

impl From<EngineResult> for ScheduleGenerationResultDto {
    fn from(value: EngineResult) -> Self {
        Self {
            shifts: value.shifts.into_iter().map(Into::into).collect(),
            conflicts: value.conflicts.into_iter().map(Into::into).collect(),
            warnings: value.warnings,
            doctor_stats: value.doctor_stats.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaveValidationDto {
    pub is_valid: bool,
    pub required_leave_days: i64,
    pub message: String,
}

impl From<EngineLeaveValidation> for LeaveValidationDto {
    fn from(value: EngineLeaveValidation) -> Self {
        Self {
            is_valid: value.is_valid,
            required_leave_days: value.required_leave_days,
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PossibleLeaveDaysResponseDto {
    pub possible_leave_days: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BridgeDaysResponseDto {
    pub bridge_days: Vec<String>,
}

impl From<std::collections::BTreeSet<CivilDate>> for BridgeDaysResponseDto {
    fn from(value: std::collections::BTreeSet<CivilDate>) -> Self {
        Self {
            bridge_days: value.into_iter().map(|d| d.to_iso()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkingDaysResponseDto {
    pub working_days: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetectConflictsResponseDto {
    pub conflicts: Vec<ScheduleConflictDto>,
}
