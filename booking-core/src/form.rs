//! Multi-step booking form.
//!
//! The form walks through four steps. Moving forward collects the current
//! step's fields and is refused if any of them fails validation; moving back
//! is unconditional and keeps every value so the user can edit it again.
//! Submitting from the schedule step runs a simulated round trip: the caller
//! shows a loading state, waits [`crate::effects::SUBMIT_LATENCY`], then calls
//! [`BookingForm::finish_submit`] which lands on the confirmation step.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SchedulePolicy;
use crate::error::FormError;
use crate::selection::Selection;
use crate::validation::{FieldFlag, InputType, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    Contact,
    Workshop,
    Schedule,
    Confirmation,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Contact,
        Step::Workshop,
        Step::Schedule,
        Step::Confirmation,
    ];

    /// 1-based position, as shown in the step indicator.
    pub fn number(self) -> u8 {
        match self {
            Self::Contact => 1,
            Self::Workshop => 2,
            Self::Schedule => 3,
            Self::Confirmation => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Contact => "Your details",
            Self::Workshop => "Workshop",
            Self::Schedule => "Date & time",
            Self::Confirmation => "Confirmed",
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::try_from(self.number() + 1).ok()
    }

    pub fn previous(self) -> Option<Step> {
        Step::try_from(self.number().checked_sub(1)?).ok()
    }
}

impl TryFrom<u8> for Step {
    type Error = FormError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Contact),
            2 => Ok(Self::Workshop),
            3 => Ok(Self::Schedule),
            4 => Ok(Self::Confirmation),
            other => Err(FormError::StepOutOfRange(other)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub input_type: InputType,
    /// Choices for `select` controls; the first entry is the empty prompt.
    #[serde(default)]
    pub options: Vec<String>,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, input_type: InputType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input_type,
            options: Vec::new(),
        }
    }

    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::new(name, label, InputType::Select)
        }
    }

    pub fn rule(&self) -> Rule {
        Rule::for_field(self.input_type, &self.name)
    }
}

/// Which controls live inside which step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    steps: BTreeMap<Step, Vec<FieldSpec>>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self {
            steps: BTreeMap::new(),
        }
    }

    pub fn with_step(mut self, step: Step, fields: Vec<FieldSpec>) -> Self {
        self.steps.insert(step, fields);
        self
    }

    pub fn fields(&self, step: Step) -> &[FieldSpec] {
        self.steps.get(&step).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.steps.values().flatten().find(|field| field.name == name)
    }

    /// The booking page's own controls.
    pub fn workshop_booking() -> Self {
        Self::new()
            .with_step(
                Step::Contact,
                vec![
                    FieldSpec::new("name", "Full name", InputType::Text),
                    FieldSpec::new("email", "Email", InputType::Email),
                    FieldSpec::new("phone", "Phone", InputType::Tel),
                ],
            )
            .with_step(
                Step::Workshop,
                vec![
                    FieldSpec::select(
                        "workshop",
                        "Workshop",
                        &[
                            "",
                            "Python for Data Science",
                            "Advanced MATLAB Programming",
                            "Introduction to Scilab",
                            "JavaScript Essentials",
                            "Data Visualization",
                        ],
                    ),
                    FieldSpec::select("format", "Format", &["", "Online", "In person"]),
                ],
            )
            .with_step(
                Step::Schedule,
                vec![FieldSpec::new("notes", "What do you hope to learn?", InputType::Textarea)],
            )
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::workshop_booking()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Submitted,
}

/// A user action routed to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Input { name: String, value: String },
    Next(Step),
    Back(Step),
    Submit,
}

/// What a dispatched command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Flagged { name: String, flag: FieldFlag },
    Moved(Step),
    SubmissionStarted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    schema: FormSchema,
    policy: SchedulePolicy,
    current: Step,
    /// Live control values; never cleared so earlier steps stay filled in.
    values: HashMap<String, String>,
    flags: HashMap<String, FieldFlag>,
    collected: BTreeMap<String, String>,
    submission: SubmissionState,
}

impl BookingForm {
    pub fn new(schema: FormSchema, policy: SchedulePolicy) -> Self {
        Self {
            schema,
            policy,
            current: Step::Contact,
            values: HashMap::new(),
            flags: HashMap::new(),
            collected: BTreeMap::new(),
            submission: SubmissionState::Idle,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    pub fn is_visible(&self, step: Step) -> bool {
        self.current == step
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn flag(&self, name: &str) -> Option<FieldFlag> {
        self.flags.get(name).copied()
    }

    pub fn collected(&self) -> &BTreeMap<String, String> {
        &self.collected
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_loading(&self) -> bool {
        self.submission == SubmissionState::Loading
    }

    pub fn set_policy(&mut self, policy: SchedulePolicy) {
        self.policy = policy;
    }

    /// Reached state for each of `len` indicator items.
    pub fn indicator(&self, len: usize) -> Vec<bool> {
        let reached = self.current.number() as usize;
        (0..len).map(|index| index < reached).collect()
    }

    pub fn dispatch(
        &mut self,
        command: FormCommand,
        selection: &Selection,
    ) -> Result<FormEvent, FormError> {
        match command {
            FormCommand::Input { name, value } => {
                let flag = self.input(&name, value);
                Ok(FormEvent::Flagged { name, flag })
            }
            FormCommand::Next(target) => self.next(target, selection).map(FormEvent::Moved),
            FormCommand::Back(target) => Ok(FormEvent::Moved(self.back(target))),
            FormCommand::Submit => self
                .begin_submit(selection)
                .map(|()| FormEvent::SubmissionStarted),
        }
    }

    /// Records a keystroke and re-flags the control.
    pub fn input(&mut self, name: &str, value: String) -> FieldFlag {
        let rule = self
            .schema
            .field(name)
            .map(FieldSpec::rule)
            .unwrap_or_else(|| Rule::for_field(InputType::Text, name));
        let flag = rule.check(&value);
        self.values.insert(name.to_string(), value);
        self.flags.insert(name.to_string(), flag);
        flag
    }

    /// Validates every field of `step` and, if all pass, copies them into
    /// the collected data along with whatever the calendar has selected.
    pub fn collect_step(&mut self, step: Step, selection: &Selection) -> Result<(), FormError> {
        let fields = self.schema.fields(step).to_vec();

        let mut failed = Vec::new();
        for field in &fields {
            let flag = field.rule().check(self.value(&field.name));
            self.flags.insert(field.name.clone(), flag);
            if !flag.is_valid() {
                failed.push(field.name.clone());
            }
        }

        if !failed.is_empty() {
            tracing::warn!(%step, fields = ?failed, "step failed validation");
            return Err(FormError::ValidationFailed {
                step,
                fields: failed,
            });
        }

        for field in &fields {
            let value = self.value(&field.name).to_string();
            self.collected.insert(field.name.clone(), value);
        }
        if let Some(date) = selection.iso_date() {
            self.collected.insert("date".to_string(), date);
        }
        if let Some(slot) = selection.slot() {
            self.collected.insert("time".to_string(), slot.to_string());
        }
        Ok(())
    }

    pub fn next(&mut self, target: Step, selection: &Selection) -> Result<Step, FormError> {
        self.collect_step(self.current, selection)?;
        self.show(target);
        Ok(target)
    }

    /// Back navigation skips validation and keeps all values.
    pub fn back(&mut self, target: Step) -> Step {
        self.show(target);
        target
    }

    pub fn begin_submit(&mut self, selection: &Selection) -> Result<(), FormError> {
        if self.is_loading() {
            return Err(FormError::SubmissionInFlight);
        }
        // A rejected submission must not leave half-collected data behind.
        let before = self.collected.clone();
        self.collect_step(self.current, selection)?;
        if self.policy == SchedulePolicy::Required && !selection.is_complete() {
            self.collected = before;
            return Err(FormError::ScheduleIncomplete);
        }

        self.submission = SubmissionState::Loading;
        tracing::info!(fields = self.collected.len(), "booking submission started");
        Ok(())
    }

    /// Ends the simulated round trip and lands on the confirmation step.
    pub fn finish_submit(&mut self) -> Result<&BTreeMap<String, String>, FormError> {
        if !self.is_loading() {
            return Err(FormError::NotSubmitting);
        }
        self.submission = SubmissionState::Submitted;
        self.show(Step::Confirmation);
        tracing::info!("booking confirmed");
        Ok(&self.collected)
    }

    fn show(&mut self, step: Step) {
        tracing::debug!(from = %self.current, to = %step, "booking step changed");
        self.current = step;
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new(FormSchema::default(), SchedulePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarCursor;
    use crate::selection::Scheduler;

    fn fill_contact(form: &mut BookingForm) {
        form.input("name", "Ada Lovelace".to_string());
        form.input("email", "ada@example.com".to_string());
        form.input("phone", "+44 20-7946-0958".to_string());
    }

    #[test]
    fn step_numbers_are_bounded() {
        assert_eq!(Step::try_from(1), Ok(Step::Contact));
        assert_eq!(Step::try_from(4), Ok(Step::Confirmation));
        assert_eq!(Step::try_from(0), Err(FormError::StepOutOfRange(0)));
        assert_eq!(Step::try_from(5), Err(FormError::StepOutOfRange(5)));
        assert_eq!(Step::Confirmation.next(), None);
        assert_eq!(Step::Contact.previous(), None);
        assert_eq!(Step::Schedule.previous(), Some(Step::Workshop));
    }

    #[test]
    fn invalid_field_blocks_advancing() {
        let mut form = BookingForm::default();
        fill_contact(&mut form);
        form.input("email", "foo".to_string());

        let err = form.next(Step::Workshop, &Selection::default()).unwrap_err();
        assert_eq!(
            err,
            FormError::ValidationFailed {
                step: Step::Contact,
                fields: vec!["email".to_string()],
            }
        );
        assert_eq!(form.current_step(), Step::Contact);
        assert_eq!(form.flag("email"), Some(FieldFlag::Invalid));
        assert_eq!(form.flag("name"), Some(FieldFlag::Valid));
        assert!(form.collected().is_empty());

        form.input("email", "foo@bar.com".to_string());
        assert_eq!(form.next(Step::Workshop, &Selection::default()), Ok(Step::Workshop));
        assert_eq!(form.collected().get("email").map(String::as_str), Some("foo@bar.com"));
    }

    #[test]
    fn untouched_fields_are_flagged_on_collect() {
        let mut form = BookingForm::default();
        let err = form.collect_step(Step::Contact, &Selection::default()).unwrap_err();
        assert!(matches!(err, FormError::ValidationFailed { ref fields, .. } if fields.len() == 3));
        assert_eq!(form.flag("phone"), Some(FieldFlag::Invalid));
    }

    #[test]
    fn phone_rule_applies_on_input() {
        let mut form = BookingForm::default();
        assert_eq!(form.input("phone", "123".to_string()), FieldFlag::Invalid);
        assert_eq!(form.input("phone", "+1 555-123-4567".to_string()), FieldFlag::Valid);
    }

    #[test]
    fn back_keeps_values_and_skips_validation() {
        let mut form = BookingForm::default();
        fill_contact(&mut form);
        form.next(Step::Workshop, &Selection::default()).unwrap();

        // Step 2 is empty, going back must still work.
        assert_eq!(form.back(Step::Contact), Step::Contact);
        assert_eq!(form.value("name"), "Ada Lovelace");
        assert_eq!(form.collected().get("name").map(String::as_str), Some("Ada Lovelace"));
    }

    #[test]
    fn indicator_marks_reached_steps() {
        let mut form = BookingForm::default();
        assert_eq!(form.indicator(4), vec![true, false, false, false]);
        fill_contact(&mut form);
        form.next(Step::Workshop, &Selection::default()).unwrap();
        assert_eq!(form.indicator(4), vec![true, true, false, false]);
    }

    #[test]
    fn submission_lands_on_confirmation_with_schedule() {
        let mut scheduler = Scheduler::new(CalendarCursor::new(2026, 6).unwrap());
        scheduler.select_day(3).unwrap();
        scheduler.select_slot("14:00").unwrap();

        let mut form = BookingForm::default();
        form.back(Step::Schedule);
        form.input("notes", "Pandas".to_string());

        form.begin_submit(scheduler.selection()).unwrap();
        assert!(form.is_loading());
        assert_eq!(
            form.begin_submit(scheduler.selection()),
            Err(FormError::SubmissionInFlight)
        );

        let collected = form.finish_submit().unwrap().clone();
        assert_eq!(form.current_step(), Step::Confirmation);
        assert_eq!(form.submission(), SubmissionState::Submitted);
        assert_eq!(collected.get("date").map(String::as_str), Some("2026-06-03"));
        assert_eq!(collected.get("time").map(String::as_str), Some("14:00"));
        assert_eq!(form.finish_submit().unwrap_err(), FormError::NotSubmitting);
    }

    #[test]
    fn required_schedule_policy_blocks_submission() {
        let mut scheduler = Scheduler::new(CalendarCursor::new(2026, 6).unwrap());
        let mut form = BookingForm::new(FormSchema::default(), SchedulePolicy::Required);
        form.back(Step::Schedule);
        form.input("notes", "Plotting".to_string());

        assert_eq!(
            form.begin_submit(scheduler.selection()),
            Err(FormError::ScheduleIncomplete)
        );
        assert!(form.collected().is_empty());

        scheduler.select_day(3).unwrap();
        assert_eq!(
            form.begin_submit(scheduler.selection()),
            Err(FormError::ScheduleIncomplete)
        );
        // Neither the notes nor the half-picked date were recorded.
        assert!(form.collected().is_empty());

        scheduler.select_slot("09:00").unwrap();
        assert_eq!(form.begin_submit(scheduler.selection()), Ok(()));
        assert_eq!(form.collected().get("notes").map(String::as_str), Some("Plotting"));
        assert_eq!(form.collected().get("date").map(String::as_str), Some("2026-06-03"));
    }

    #[test]
    fn failed_submit_stays_put() {
        let mut form = BookingForm::default();
        form.back(Step::Schedule);
        assert!(form.begin_submit(&Selection::default()).is_err());
        assert_eq!(form.current_step(), Step::Schedule);
        assert!(!form.is_loading());
    }

    #[test]
    fn dispatch_routes_commands() {
        let mut form = BookingForm::default();
        let selection = Selection::default();

        let event = form
            .dispatch(
                FormCommand::Input {
                    name: "email".to_string(),
                    value: "nope".to_string(),
                },
                &selection,
            )
            .unwrap();
        assert_eq!(
            event,
            FormEvent::Flagged {
                name: "email".to_string(),
                flag: FieldFlag::Invalid
            }
        );

        assert!(form.dispatch(FormCommand::Next(Step::Workshop), &selection).is_err());
        assert_eq!(
            form.dispatch(FormCommand::Back(Step::Schedule), &selection),
            Ok(FormEvent::Moved(Step::Schedule))
        );
    }
}
