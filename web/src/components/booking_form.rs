use booking_core::effects::{CONFIRMATION_CONFETTI, SUBMIT_LATENCY};
use booking_core::{FieldSpec, FormCommand, FormError, FormEvent, InputType, ModalBody, Step};
use leptos::prelude::*;

use crate::components::calendar_picker::CalendarPicker;
use crate::components::ripple_button::RippleButton;
use crate::components::time_slot_picker::TimeSlotPicker;
use crate::state::{use_page_state, PageState};
use crate::utils::TaskSlot;

fn run(state: PageState, command: FormCommand) -> Option<FormEvent> {
    let selection = state.scheduler.with_untracked(|s| s.selection().clone());
    let result = state.form.try_update(|form| form.dispatch(command, &selection))?;
    match result {
        Ok(event) => Some(event),
        Err(FormError::ValidationFailed { step, fields }) => {
            leptos::logging::log!("step {} has invalid fields: {:?}", step, fields);
            None
        }
        Err(err) => {
            leptos::logging::warn!("booking form: {}", err);
            None
        }
    }
}

#[component]
fn Field(spec: FieldSpec) -> impl IntoView {
    let state = use_page_state();
    let form = state.form;
    let name = StoredValue::new(spec.name.clone());
    let control_id = format!("field-{}", spec.name);

    let value = move || form.with(|f| f.value(&name.get_value()).to_string());
    let flag_class = move || {
        form.with(|f| f.flag(&name.get_value()))
            .map(|flag| flag.class())
            .unwrap_or_default()
    };
    let on_input = move |ev: leptos::ev::Event| {
        run(
            state,
            FormCommand::Input {
                name: name.get_value(),
                value: event_target_value(&ev),
            },
        );
    };

    let control = match spec.input_type {
        InputType::Select => view! {
            <select id=control_id.clone() name=spec.name.clone() class=flag_class prop:value=value on:change=on_input>
                {spec
                    .options
                    .into_iter()
                    .map(|option| {
                        let label = if option.is_empty() { "Choose…".to_string() } else { option.clone() };
                        view! { <option value=option>{label}</option> }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        InputType::Textarea => view! {
            <textarea id=control_id.clone() name=spec.name.clone() rows="3" class=flag_class prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
        other => view! {
            <input
                id=control_id.clone()
                name=spec.name.clone()
                type=other.as_html()
                class=flag_class
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <label class="field" for=control_id>
            <span class="field__label">{spec.label}</span>
            {control}
        </label>
    }
}

#[component]
pub fn BookingForm() -> impl IntoView {
    let state = use_page_state();
    let form = state.form;
    let submit_task = TaskSlot::new();

    let fields_for = move |step: Step| {
        form.with_untracked(|f| f.schema().fields(step).to_vec())
            .into_iter()
            .map(|spec| view! { <Field spec=spec/> })
            .collect_view()
    };

    let nav = move |command: FormCommand| {
        run(state, command);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if run(state, FormCommand::Submit).is_none() {
            return;
        }
        submit_task.schedule(SUBMIT_LATENCY, move || {
            let body = form
                .try_update(|f| f.finish_submit().map(ModalBody::booking))
                .and_then(Result::ok);
            if let Some(body) = body {
                state.open_modal(body);
                state.launch_confetti(CONFIRMATION_CONFETTI);
            }
        });
    };

    let step_class = move |step: Step| move || if form.with(|f| f.is_visible(step)) { "step is-active" } else { "step" };

    view! {
        <form class="booking-form" novalidate on:submit=on_submit>
            <ol class="steps-indicator">
                {Step::ALL
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        let reached = move || form.with(|f| f.indicator(Step::ALL.len())[index]);
                        view! {
                            <li class="steps-indicator__item" class:is-reached=reached>
                                <span class="steps-indicator__number">{step.number()}</span>
                                <span class="steps-indicator__title">{step.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <fieldset class=step_class(Step::Contact)>
                <legend>{Step::Contact.title()}</legend>
                {fields_for(Step::Contact)}
                <div class="step__actions">
                    <button type="button" class="btn" on:click=move |_| nav(FormCommand::Next(Step::Workshop))>
                        "Next"
                    </button>
                </div>
            </fieldset>

            <fieldset class=step_class(Step::Workshop)>
                <legend>{Step::Workshop.title()}</legend>
                {fields_for(Step::Workshop)}
                <div class="step__actions">
                    <button type="button" class="btn btn--ghost" on:click=move |_| nav(FormCommand::Back(Step::Contact))>
                        "Back"
                    </button>
                    <button type="button" class="btn" on:click=move |_| nav(FormCommand::Next(Step::Schedule))>
                        "Next"
                    </button>
                </div>
            </fieldset>

            <fieldset class=step_class(Step::Schedule)>
                <legend>{Step::Schedule.title()}</legend>
                <CalendarPicker/>
                <TimeSlotPicker/>
                {fields_for(Step::Schedule)}
                <div class="step__actions">
                    <button type="button" class="btn btn--ghost" on:click=move |_| nav(FormCommand::Back(Step::Workshop))>
                        "Back"
                    </button>
                    <RippleButton
                        button_type="submit"
                        class="btn--primary"
                        disabled=Signal::derive(move || form.with(|f| f.is_loading()))
                    >
                        {move || if form.with(|f| f.is_loading()) { "Booking…" } else { "Confirm booking" }}
                    </RippleButton>
                </div>
            </fieldset>

            <fieldset class=step_class(Step::Confirmation)>
                <legend>{Step::Confirmation.title()}</legend>
                <p>"Thanks! Your seat is reserved. We sent the details to your inbox."</p>
                <dl class="summary">
                    {move || {
                        form.with(|f| {
                            f.collected()
                                .iter()
                                .map(|(key, value)| view! {
                                    <dt>{key.clone()}</dt>
                                    <dd>{value.clone()}</dd>
                                })
                                .collect_view()
                        })
                    }}
                </dl>
            </fieldset>
        </form>
    }
}
