use crate::bridge::doctor_bridge_day_map;
use crate::calendar::{month_calendar, CalendarDay};
use crate::constants::SHIFT_DURATION;
use crate::date::CivilDate;
use crate::engine_state::EngineState;
use crate::model::{
    Doctor, DoctorAffiliation, DoctorId, LeaveDay, NationalHoliday, ScheduleGenerationResult,
    Shift, ShiftType, Team, TeamId,
};
use crate::norm::{base_norm_hours, target_shifts};
use crate::rules::{self, EligibilityContext};
use crate::validator;
use shared::{DomainError, DomainResult};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Everything `Engine::new` needs to build a month's roster and staffing targets.
pub struct EngineConfig {
    pub month: u32,
    pub year: i32,
    pub doctors: Vec<Doctor>,
    pub teams: Vec<Team>,
    pub shifts_per_day: u32,
    pub shifts_per_night: u32,
    pub leave_days: Vec<LeaveDay>,
    pub national_holidays: Vec<NationalHoliday>,
}

/// A validated, immutable snapshot of one month's inputs, ready to run the assignment loop.
/// Everything the loop consults is precomputed once in [`Engine::new`]; `generate_schedule`
/// never mutates `self`.
pub struct Engine {
    config: EngineConfig,
    calendar: Vec<CalendarDay>,
    target_shifts: HashMap<DoctorId, u32>,
    base_norm_hours: HashMap<DoctorId, i64>,
    doctor_leave_dates: HashMap<DoctorId, BTreeSet<CivilDate>>,
    bridge_days: HashMap<DoctorId, BTreeSet<CivilDate>>,
    /// Teams ordered by declared `order`, ties broken by id, for deterministic rotation.
    sorted_teams: Vec<Team>,
    /// Doctor ids per team, preserving the order they appear in `config.doctors`.
    team_members: HashMap<TeamId, Vec<DoctorId>>,
    /// Floating doctor ids, preserving declared order.
    floating_members: Vec<DoctorId>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> DomainResult<Self> {
        if config.month > 11 {
            return Err(DomainError::InvalidInput(format!(
                "month must be 0..=11, got {}",
                config.month
            )));
        }

        let known_team_ids: BTreeSet<&TeamId> = config.teams.iter().map(|t| &t.id).collect();
        for doctor in &config.doctors {
            if let DoctorAffiliation::InTeam { team_id } = &doctor.affiliation {
                if !known_team_ids.contains(team_id) {
                    return Err(DomainError::InvalidInput(format!(
                        "doctor {} references unknown team {team_id}",
                        doctor.id
                    )));
                }
            }
        }

        let calendar = month_calendar(config.month, config.year, &config.national_holidays)?;
        let working_days = calendar.iter().filter(|d| d.is_working_day).count() as i64;

        let doctor_ids: Vec<DoctorId> = config.doctors.iter().map(|d| d.id.clone()).collect();
        let bridge_days = doctor_bridge_day_map(
            &doctor_ids,
            &config.leave_days,
            config.month,
            config.year,
            &config.national_holidays,
        )?;

        let mut doctor_leave_dates: HashMap<DoctorId, BTreeSet<CivilDate>> = HashMap::new();
        for leave in &config.leave_days {
            if calendar.iter().any(|c| c.date == leave.date) {
                doctor_leave_dates
                    .entry(leave.doctor_id.clone())
                    .or_default()
                    .insert(leave.date);
            }
        }

        let mut target_shifts_by_doctor = HashMap::new();
        let mut base_norm_hours_by_doctor = HashMap::new();
        for doctor in &config.doctors {
            let leave_count = doctor_leave_dates
                .get(&doctor.id)
                .map(|d| d.len() as i64)
                .unwrap_or(0);
            let norm_hours = base_norm_hours(working_days, leave_count);
            target_shifts_by_doctor.insert(doctor.id.clone(), target_shifts(norm_hours));
            base_norm_hours_by_doctor.insert(doctor.id.clone(), norm_hours);
        }

        let mut sorted_teams = config.teams.clone();
        sorted_teams.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));

        let mut team_members: HashMap<TeamId, Vec<DoctorId>> = HashMap::new();
        let mut floating_members = Vec::new();
        for doctor in &config.doctors {
            match &doctor.affiliation {
                DoctorAffiliation::InTeam { team_id } => {
                    team_members.entry(team_id.clone()).or_default().push(doctor.id.clone());
                }
                DoctorAffiliation::Floating => floating_members.push(doctor.id.clone()),
            }
        }

        Ok(Self {
            config,
            calendar,
            target_shifts: target_shifts_by_doctor,
            base_norm_hours: base_norm_hours_by_doctor,
            doctor_leave_dates,
            bridge_days,
            sorted_teams,
            team_members,
            floating_members,
        })
    }

    /// Runs the full daily assignment loop over the configured month and reports the
    /// resulting conflicts, per-doctor statistics, and norm warnings alongside the shifts.
    pub fn generate_schedule(&self) -> ScheduleGenerationResult {
        let rule_chain = rules::default_rules();
        let mut state = EngineState::new(self.bridge_days.clone());
        let mut shifts = Vec::new();

        for day in &self.calendar {
            let mut team_cursor = 0usize;
            self.fill_slots(
                day.date,
                ShiftType::Day,
                self.config.shifts_per_day,
                &rule_chain,
                &mut state,
                &mut team_cursor,
                &mut shifts,
            );
            self.fill_slots(
                day.date,
                ShiftType::Night,
                self.config.shifts_per_night,
                &rule_chain,
                &mut state,
                &mut team_cursor,
                &mut shifts,
            );
        }

        let calendar_dates: Vec<CivilDate> = self.calendar.iter().map(|d| d.date).collect();
        let conflicts = validator::detect_conflicts_for_calendar(
            &calendar_dates,
            &shifts,
            &self.config.doctors,
            self.config.shifts_per_day,
            self.config.shifts_per_night,
        );
        let doctor_stats = validator::doctor_stats(
            &shifts,
            &self.config.doctors,
            &self.doctor_leave_dates,
            &self.base_norm_hours,
        );
        let warnings = validator::norm_warnings(&doctor_stats);

        ScheduleGenerationResult {
            shifts,
            conflicts,
            warnings,
            doctor_stats,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_slots(
        &self,
        date: CivilDate,
        shift_type: ShiftType,
        slots_needed: u32,
        rule_chain: &[Box<dyn rules::EligibilityRule>],
        state: &mut EngineState,
        team_cursor: &mut usize,
        shifts: &mut Vec<Shift>,
    ) {
        for _ in 0..slots_needed {
            let equalization_cap_active = self.all_doctors_reached_target(state);
            match self.pick_candidate(date, shift_type, rule_chain, state, team_cursor, equalization_cap_active) {
                Some(doctor_id) => {
                    state.record_assignment(&doctor_id, date, shift_type, SHIFT_DURATION);
                    shifts.push(Shift::new(doctor_id, date, shift_type));
                }
                None => {
                    debug!(%date, shift_type = ?shift_type, "slot left unfilled: no eligible doctor");
                }
            }
        }
    }

    fn is_doctor_eligible(
        &self,
        doctor: &Doctor,
        date: CivilDate,
        shift_type: ShiftType,
        rule_chain: &[Box<dyn rules::EligibilityRule>],
        state: &EngineState,
        equalization_cap_active: bool,
    ) -> bool {
        let empty = BTreeSet::new();
        let leave_dates = self.doctor_leave_dates.get(&doctor.id).unwrap_or(&empty);
        let ctx = EligibilityContext {
            doctor,
            date,
            shift_type,
            state,
            leave_dates,
            target_shifts: self.target_shifts.get(&doctor.id).copied().unwrap_or(0),
            equalization_cap_active,
        };
        rules::is_eligible(rule_chain, &ctx)
    }

    fn all_doctors_reached_target(&self, state: &EngineState) -> bool {
        self.config.doctors.iter().all(|d| {
            state.shift_count(&d.id) >= self.target_shifts.get(&d.id).copied().unwrap_or(0)
        })
    }

    fn doctors_by_ids<'a>(&'a self, ids: &'a [DoctorId]) -> impl Iterator<Item = &'a Doctor> + 'a {
        ids.iter().filter_map(move |id| self.config.doctors.iter().find(|d| &d.id == id))
    }

    /// Rotates through active teams (teams with at least one eligible member), picking the
    /// least-worked eligible doctor within the chosen team; falls back to floating doctors
    /// when no team is active, and leaves the slot unfilled when nobody is eligible.
    #[allow(clippy::too_many_arguments)]
    fn pick_candidate(
        &self,
        date: CivilDate,
        shift_type: ShiftType,
        rule_chain: &[Box<dyn rules::EligibilityRule>],
        state: &EngineState,
        team_cursor: &mut usize,
        equalization_cap_active: bool,
    ) -> Option<DoctorId> {
        let active_teams: Vec<&Team> = self
            .sorted_teams
            .iter()
            .filter(|team| {
                self.team_members
                    .get(&team.id)
                    .map(|members| {
                        self.doctors_by_ids(members).any(|d| {
                            self.is_doctor_eligible(d, date, shift_type, rule_chain, state, equalization_cap_active)
                        })
                    })
                    .unwrap_or(false)
            })
            .collect();

        if !active_teams.is_empty() {
            let idx = *team_cursor % active_teams.len();
            let chosen_team = active_teams[idx];
            *team_cursor = (*team_cursor + 1) % active_teams.len();

            let members = self.team_members.get(&chosen_team.id)?;
            return self.best_candidate(members, date, shift_type, rule_chain, state, equalization_cap_active);
        }

        self.best_candidate(&self.floating_members, date, shift_type, rule_chain, state, equalization_cap_active)
    }

    /// Among `candidate_ids`, the eligible doctor with the fewest shifts so far, ties broken
    /// by declared order.
    fn best_candidate(
        &self,
        candidate_ids: &[DoctorId],
        date: CivilDate,
        shift_type: ShiftType,
        rule_chain: &[Box<dyn rules::EligibilityRule>],
        state: &EngineState,
        equalization_cap_active: bool,
    ) -> Option<DoctorId> {
        candidate_ids
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                let doctor = self.config.doctors.iter().find(|d| &d.id == id)?;
                self.is_doctor_eligible(doctor, date, shift_type, rule_chain, state, equalization_cap_active)
                    .then(|| (state.shift_count(id), index, id.clone()))
            })
            .min_by(|a, b| candidate_order(a.0, a.1, b.0, b.1))
            .map(|(_, _, id)| id)
    }
}

/// Ordering used to pick among equally-eligible candidates: fewest shifts first, then
/// declared input order.
pub(crate) fn candidate_order(
    shift_count_a: u32,
    index_a: usize,
    shift_count_b: u32,
    index_b: usize,
) -> Ordering {
    (shift_count_a, index_a).cmp(&(shift_count_b, index_b))
}
