use log::{debug, info};
use web_sys::{DragEvent, FileList, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::confetti::Confetti;
use crate::components::toast::{Toast, ToastMessage};
use crate::config;
use crate::content::SUBJECTS;
use crate::hooks::{schedule, TimerSlot};
use crate::state::contact::{
    format_file_size, AttachmentRejection, ContactForm, FileDescriptor, Indicator, Step,
    ValidationError,
};

fn descriptors(files: Option<FileList>) -> Vec<FileDescriptor> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.item(i))
        .map(|file| FileDescriptor::new(file.name(), file.size() as u64, file.type_()))
        .collect()
}

/// A boolean class flag that switches itself off after `millis`.
#[derive(Clone)]
struct Flash {
    on: UseStateHandle<bool>,
    timer: TimerSlot,
}

impl Flash {
    fn trigger(&self, millis: u32) {
        self.on.set(true);
        let on = self.on.clone();
        schedule(&self.timer, millis, move || on.set(false));
    }

    fn is_on(&self) -> bool {
        *self.on
    }
}

#[hook]
fn use_flash() -> Flash {
    Flash {
        on: use_state(|| false),
        timer: use_mut_ref(|| None),
    }
}

#[function_component(ContactWizard)]
pub fn contact_wizard() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let update = use_force_update();
    let toast = use_state(|| None::<ToastMessage>);
    let toast_serial = use_mut_ref(|| 0u32);
    let confetti = use_state(|| 0u32);
    // Delayed by a tick so the incoming step can fade in.
    let step_shown = use_state(|| true);
    let step_timer: TimerSlot = use_mut_ref(|| None);
    let submit_timer: TimerSlot = use_mut_ref(|| None);
    let form_shake = use_flash();
    let upload_shake = use_flash();
    let message_highlight = use_flash();
    let dragging_over = use_state(|| false);
    let file_input = use_node_ref();

    let show_toast = {
        let toast = toast.clone();
        Callback::from(move |text: String| {
            let mut serial = toast_serial.borrow_mut();
            *serial += 1;
            toast.set(Some(ToastMessage { id: *serial, text }));
        })
    };

    let swap_step = {
        let step_shown = step_shown.clone();
        move || {
            step_shown.set(false);
            let step_shown = step_shown.clone();
            schedule(&step_timer, config::STEP_SWAP_MS, move || step_shown.set(true));
        }
    };

    let text_input = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply(&mut form.borrow_mut(), input.value());
            update.force_update();
        })
    };

    let on_next = {
        let form = form.clone();
        let update = update.clone();
        let show_toast = show_toast.clone();
        let form_shake = form_shake.clone();
        let swap_step = swap_step.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let result = form.borrow_mut().proceed();
            match result {
                Ok(()) => {
                    debug!("Contact form advanced to step 2");
                    swap_step();
                    update.force_update();
                }
                Err(err) => {
                    if err == ValidationError::MissingFields {
                        form_shake.trigger(config::FORM_SHAKE_MS);
                    }
                    show_toast.emit(err.to_string());
                }
            }
        })
    };

    let on_back = {
        let form = form.clone();
        let update = update.clone();
        let swap_step = swap_step.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            form.borrow_mut().back();
            swap_step();
            update.force_update();
        })
    };

    let on_subject = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.borrow_mut().subject = select.value();
            update.force_update();
        })
    };

    let on_message = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut form = form.borrow_mut();
            form.set_message(&textarea.value());
            // Keep the element in step with the truncated text.
            if textarea.value() != form.message() {
                textarea.set_value(form.message());
            }
            update.force_update();
        })
    };

    let add_files = {
        let form = form.clone();
        let update = update.clone();
        let show_toast = show_toast.clone();
        let upload_shake = upload_shake.clone();
        Callback::from(move |batch: Vec<FileDescriptor>| {
            if batch.is_empty() {
                return;
            }
            let rejections = form.borrow_mut().attachments.add_batch(batch);
            for rejection in &rejections {
                debug!("Attachment rejected: {}", rejection);
                if matches!(rejection, AttachmentRejection::TooMany { .. }) {
                    upload_shake.trigger(config::UPLOAD_SHAKE_MS);
                }
            }
            // Each rejection replaces the previous toast; the last one stays.
            if let Some(last) = rejections.last() {
                show_toast.emit(last.to_string());
            }
            update.force_update();
        })
    };

    let on_pick = {
        let add_files = add_files.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            add_files.emit(descriptors(input.files()));
            input.set_value("");
        })
    };

    let on_upload_click = {
        let file_input = file_input.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            if form.borrow().attachments.at_capacity() {
                return;
            }
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_drag_over = {
        let dragging_over = dragging_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging_over.set(true);
        })
    };

    let on_drag_leave = {
        let dragging_over = dragging_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging_over.set(false);
        })
    };

    let on_drop = {
        let dragging_over = dragging_over.clone();
        let add_files = add_files.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging_over.set(false);
            add_files.emit(descriptors(e.data_transfer().and_then(|dt| dt.files())));
        })
    };

    let remove_file = {
        let form = form.clone();
        let update = update.clone();
        move |index: usize| {
            let form = form.clone();
            let update = update.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                form.borrow_mut().attachments.remove(index);
                update.force_update();
            })
        }
    };

    let on_submit = {
        let form = form.clone();
        let update = update.clone();
        let show_toast = show_toast.clone();
        let message_highlight = message_highlight.clone();
        let confetti = confetti.clone();
        let submit_timer = submit_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = form.borrow_mut().submit();
            if let Err(err) = result {
                if err == ValidationError::EmptyMessage {
                    message_highlight.trigger(config::MESSAGE_HIGHLIGHT_MS);
                }
                show_toast.emit(err.to_string());
                return;
            }
            info!("Sending contact form");
            update.force_update();

            let form = form.clone();
            let update = update.clone();
            let confetti = confetti.clone();
            schedule(&submit_timer, config::SUBMIT_DELAY_MS, move || {
                if form.borrow_mut().finish() {
                    info!("Contact form sent");
                    confetti.set(*confetti + 1);
                }
                update.force_update();
            });
        })
    };

    let on_reset = {
        let form = form.clone();
        let update = update.clone();
        let swap_step = swap_step.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow_mut().reset();
            swap_step();
            update.force_update();
        })
    };

    let form_ref = form.borrow();
    let indicators = form_ref.indicators();
    let attachments = &form_ref.attachments;
    let step = form_ref.step();

    let indicator = |i: usize| -> Html {
        let state = indicators[i];
        let class = classes!(
            "contact-step-indicator",
            match state {
                Indicator::Active => "contact-indicator-active bg-primaryPink shadow-lg",
                Indicator::Done | Indicator::Pending => "bg-gray-700",
            }
        );
        html! {
            <div class={class}>
                if state == Indicator::Done {
                    <i class="fas fa-check"></i>
                } else {
                    { i + 1 }
                }
            </div>
        }
    };

    let step_class = |own: Step| {
        classes!(
            "contact-form-step",
            (step == own && *step_shown).then_some("contact-step-active"),
            (step != own).then_some("hidden"),
        )
    };

    html! {
        <div class={classes!("contact-form-container", form_shake.is_on().then_some("shake"))}>
            <style>
                {r#"
                    @keyframes shake {
                        0% { transform: translateX(0); }
                        25% { transform: translateX(-5px); }
                        50% { transform: translateX(5px); }
                        75% { transform: translateX(-5px); }
                        100% { transform: translateX(0); }
                    }
                    .shake { animation: shake 0.5s; }
                    #contact-file-upload-area.shake { animation: shake 0.4s; }
                    .contact-form-step {
                        opacity: 0;
                        transform: translateX(20px);
                        transition: opacity 0.4s ease, transform 0.4s ease;
                    }
                    .contact-form-step.contact-step-active {
                        opacity: 1;
                        transform: translateX(0);
                    }
                    #contact-progress-line {
                        height: 2px;
                        transition: width 0.4s ease;
                    }
                "#}
            </style>
            <div class="contact-steps">
                { indicator(0) }
                <div class="contact-progress-track">
                    <div id="contact-progress-line" style={format!("width: {}%;", form_ref.progress_percent())}></div>
                </div>
                { indicator(1) }
            </div>

            <form id="contact-main-form" onsubmit={on_submit}>
                <div id="contact-form-step-1" class={step_class(Step::Details)}>
                    <input id="contact-first-name-input" type="text" placeholder="First name"
                        value={form_ref.details.first_name.clone()}
                        oninput={text_input(|f, v| f.details.first_name = v)} />
                    <input id="contact-last-name-input" type="text" placeholder="Last name"
                        value={form_ref.details.last_name.clone()}
                        oninput={text_input(|f, v| f.details.last_name = v)} />
                    <input id="contact-email-input" type="email" placeholder="Email"
                        value={form_ref.details.email.clone()}
                        oninput={text_input(|f, v| f.details.email = v)} />
                    <input id="contact-mobile-input" type="tel" placeholder="Mobile"
                        value={form_ref.details.mobile.clone()}
                        oninput={text_input(|f, v| f.details.mobile = v)} />
                    <button type="button" class="contact-next-button" onclick={on_next}>
                        {"Next "}<i class="fas fa-arrow-right"></i>
                    </button>
                </div>

                <div id="contact-form-step-2" class={step_class(Step::Message)}>
                    <select id="contact-subject-select" onchange={on_subject}>
                        <option value="" selected={form_ref.subject.is_empty()}>{"Select a subject"}</option>
                        { for SUBJECTS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={form_ref.subject == *value}>{*label}</option>
                        }) }
                    </select>

                    <textarea id="contact-message-textarea"
                        class={classes!(message_highlight.is_on().then_some("border-red-500"))}
                        placeholder="Tell us about your project"
                        value={form_ref.message().to_string()}
                        oninput={on_message} />
                    <span id="contact-character-counter" class={form_ref.counter_tone().class()}>
                        { form_ref.counter_label() }
                    </span>

                    <div id="contact-file-upload-area"
                        class={classes!(
                            upload_shake.is_on().then_some("shake"),
                            (*dragging_over).then_some("border-primaryPink bg-primaryPink/10"),
                            attachments.at_capacity().then_some("opacity-50 cursor-not-allowed"),
                        )}
                        onclick={on_upload_click}
                        ondragover={on_drag_over}
                        ondragleave={on_drag_leave}
                        ondrop={on_drop}>
                        <i class="fas fa-cloud-upload-alt"></i>
                        <p>{"Drop files here or click to browse"}</p>
                    </div>
                    <input ref={file_input} id="contact-file-input" type="file" multiple=true hidden=true onchange={on_pick} />

                    if !attachments.is_empty() {
                        <div id="files-list-container">
                            { for attachments.files().iter().enumerate().map(|(index, file)| html! {
                                <div class="file-item" key={format!("{}-{}", file.name, file.size)}>
                                    <div class="file-icon"><i class={classes!(file.icon(), "text-primaryPink")}></i></div>
                                    <div class="file-meta">
                                        <p class="file-name" title={file.name.clone()}>{ &file.name }</p>
                                        <p class="file-size">{ format_file_size(file.size) }</p>
                                    </div>
                                    <button type="button" class="remove-file-btn" onclick={remove_file(index)}>
                                        <i class="fas fa-times"></i>
                                    </button>
                                </div>
                            }) }
                        </div>
                    }
                    <div class="file-summary">
                        <span id="file-count" class={classes!(attachments.at_capacity().then_some("text-red-400"))}>
                            { attachments.count_label() }
                        </span>
                        <span id="total-size">{ attachments.total_label() }</span>
                    </div>

                    <div class="contact-actions">
                        <button type="button" class="contact-back-button" onclick={on_back}>
                            <i class="fas fa-arrow-left"></i>{" Back"}
                        </button>
                        <button type="submit" class="contact-submit-button" disabled={!form_ref.submit_enabled()}>
                            {"Send Message"}
                        </button>
                    </div>
                </div>
            </form>

            if form_ref.loading_visible() {
                <div id="contact-loading-overlay">
                    <div class="spinner"></div>
                    <p>{"Sending..."}</p>
                </div>
            }
            if form_ref.success_visible() {
                <div id="contact-success-overlay">
                    <i class="fas fa-check-circle"></i>
                    <h3>{"Message sent!"}</h3>
                    <p>{"We'll get back to you within 24 hours."}</p>
                    <button type="button" class="contact-reset-button" onclick={on_reset}>
                        {"Send another message"}
                    </button>
                </div>
            }

            <Toast message={(*toast).clone()} />
            <Confetti trigger={*confetti} />
        </div>
    }
}
