use booking_core::{
    BookingForm, CalendarCursor, FormCommand, FormError, FormEvent, FormSchema, ModalBody,
    PageConfig, PricingPanel, PriceCard, Scheduler, SchedulePolicy, Step,
};

fn type_into(form: &mut BookingForm, scheduler: &Scheduler, name: &str, value: &str) {
    form.dispatch(
        FormCommand::Input {
            name: name.to_string(),
            value: value.to_string(),
        },
        scheduler.selection(),
    )
    .unwrap();
}

fn walk_to_schedule(form: &mut BookingForm, scheduler: &Scheduler) {
    type_into(form, scheduler, "name", "Grace Hopper");
    type_into(form, scheduler, "email", "grace@navy.mil");
    type_into(form, scheduler, "phone", "+1 555-123-4567");
    assert_eq!(
        form.dispatch(FormCommand::Next(Step::Workshop), scheduler.selection()),
        Ok(FormEvent::Moved(Step::Workshop))
    );

    type_into(form, scheduler, "workshop", "Python for Data Science");
    type_into(form, scheduler, "format", "Online");
    assert_eq!(
        form.dispatch(FormCommand::Next(Step::Schedule), scheduler.selection()),
        Ok(FormEvent::Moved(Step::Schedule))
    );
    type_into(form, scheduler, "notes", "Cleaning messy CSVs");
}

#[test]
fn submission_without_calendar_pick_still_succeeds() {
    let scheduler = Scheduler::new(CalendarCursor::new(2026, 6).unwrap());
    let mut form = BookingForm::default();
    walk_to_schedule(&mut form, &scheduler);

    assert_eq!(
        form.dispatch(FormCommand::Submit, scheduler.selection()),
        Ok(FormEvent::SubmissionStarted)
    );
    let collected = form.finish_submit().unwrap();

    assert!(!collected.contains_key("date"));
    assert!(!collected.contains_key("time"));
    assert_eq!(collected.get("name").map(String::as_str), Some("Grace Hopper"));
    assert_eq!(collected.get("format").map(String::as_str), Some("Online"));
    assert_eq!(form.current_step(), Step::Confirmation);
}

#[test]
fn submission_records_the_selection_at_submit_time() {
    let mut scheduler = Scheduler::new(CalendarCursor::new(2026, 6).unwrap());
    let mut form = BookingForm::default();
    walk_to_schedule(&mut form, &scheduler);

    scheduler.select_day(3).unwrap();
    scheduler.select_slot("09:00").unwrap();
    // Changing the day drops the slot; pick again.
    scheduler.select_day(4).unwrap();
    scheduler.select_slot("12:00").unwrap();

    form.dispatch(FormCommand::Submit, scheduler.selection()).unwrap();
    let summary = ModalBody::booking(form.finish_submit().unwrap());

    let ModalBody::BookingConfirmed(fields) = summary else {
        panic!("expected a booking summary");
    };
    assert!(fields.contains(&("date".to_string(), "2026-06-04".to_string())));
    assert!(fields.contains(&("time".to_string(), "12:00".to_string())));
}

#[test]
fn configured_policy_requires_a_schedule() {
    let config = PageConfig {
        schedule: SchedulePolicy::Required,
        ..PageConfig::default()
    };
    let scheduler = Scheduler::new(CalendarCursor::new(2026, 6).unwrap());
    let mut form = BookingForm::new(FormSchema::default(), config.schedule);
    walk_to_schedule(&mut form, &scheduler);

    assert_eq!(
        form.dispatch(FormCommand::Submit, scheduler.selection()),
        Err(FormError::ScheduleIncomplete)
    );
    assert_eq!(form.current_step(), Step::Schedule);
}

#[test]
fn promo_uses_configured_base_price() {
    let config = PageConfig {
        base_price: 200,
        ..PageConfig::default()
    };
    let mut pricing = PricingPanel::new(
        vec![PriceCard::new("Single workshop")],
        config.base_price,
        config.promo_repeat,
    );
    pricing.apply_promo("fosse20").unwrap();
    assert_eq!(pricing.formatted_total(), "$160");
}
