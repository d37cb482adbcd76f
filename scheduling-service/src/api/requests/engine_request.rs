use crate::presentation::engine_dto::{DoctorDto, LeaveDayDto, NationalHolidayDto, ShiftDto, TeamDto};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateScheduleRequest {
    /// 0-indexed: January = 0.
    pub month: u32,
    pub year: i32,
    pub doctors: Vec<DoctorDto>,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
    pub shifts_per_day: u32,
    pub shifts_per_night: u32,
    #[serde(default)]
    pub leave_days: Vec<LeaveDayDto>,
    #[serde(default)]
    pub national_holidays: Vec<NationalHolidayDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateLeaveRequest {
    #[serde(default)]
    pub leave_days: Vec<LeaveDayDto>,
    pub doctors: Vec<DoctorDto>,
    pub month: u32,
    pub year: i32,
    pub shifts_per_day: u32,
    pub shifts_per_night: u32,
    #[serde(default)]
    pub national_holidays: Vec<NationalHolidayDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PossibleLeaveDaysRequest {
    pub month: u32,
    pub year: i32,
    pub doctor_count: u32,
    pub shifts_per_day: u32,
    pub shifts_per_night: u32,
    #[serde(default)]
    pub national_holidays: Vec<NationalHolidayDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BridgeDaysRequest {
    pub doctor_id: String,
    #[serde(default)]
    pub leave_days: Vec<LeaveDayDto>,
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub national_holidays: Vec<NationalHolidayDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WorkingDaysRequest {
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub national_holidays: Vec<NationalHolidayDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DetectConflictsRequest {
    pub shifts: Vec<ShiftDto>,
    pub doctors: Vec<DoctorDto>,
    pub shifts_per_day: u32,
    pub shifts_per_night: u32,
}
