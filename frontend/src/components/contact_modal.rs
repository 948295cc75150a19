use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{debug, error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::modal::ModalShell;
use crate::config;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]{6,}$").expect("valid phone pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Individual,
    Company,
}

impl Audience {
    const ALL: [Audience; 2] = [Audience::Individual, Audience::Company];

    fn label(self) -> &'static str {
        match self {
            Audience::Individual => "Individual",
            Audience::Company => "Company",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub audience: Audience,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your last name")]
    LastName,
    #[error("Please enter your first name")]
    FirstName,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Use digits, spaces, +, -, or ()")]
    Phone,
}

impl ContactForm {
    /// Checks fields in display order and reports the first problem.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.last_name.trim().is_empty() {
            return Err(FieldError::LastName);
        }
        if self.first_name.trim().is_empty() {
            return Err(FieldError::FirstName);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(FieldError::Email);
        }
        if !PHONE_RE.is_match(self.phone.trim()) {
            return Err(FieldError::Phone);
        }
        Ok(())
    }

    pub fn to_request(&self) -> EmailRequest<'_> {
        EmailRequest {
            service_id: config::EMAILJS_SERVICE_ID,
            template_id: config::EMAILJS_TEMPLATE_ID,
            user_id: config::EMAILJS_PUBLIC_KEY,
            template_params: TemplateParams {
                audience: self.audience,
                last_name: self.last_name.trim(),
                first_name: self.first_name.trim(),
                email: self.email.trim(),
                phone: self.phone.trim(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub audience: Audience,
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Could not reach the server. Please check your connection and try again.")]
    Network(String),
    #[error("Something went wrong (status {0}). Please try again.")]
    Status(u16),
}

async fn submit(form: ContactForm) -> Result<(), ContactError> {
    let request = Request::post(config::get_contact_endpoint())
        .header("Content-Type", "application/json")
        .json(&form.to_request())
        .map_err(|e| ContactError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ContactError::Status(response.status()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Editing,
    Submitting,
    Submitted,
    Failed(String),
}

/// Tags each request so a response from before a reset is dropped.
#[derive(Debug)]
pub struct SubmitState {
    generation: u32,
    status: SubmitStatus,
}

impl Default for SubmitState {
    fn default() -> Self {
        Self {
            generation: 0,
            status: SubmitStatus::Editing,
        }
    }
}

impl SubmitState {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Returns the generation the response must carry.
    pub fn begin(&mut self) -> u32 {
        self.status = SubmitStatus::Submitting;
        self.generation
    }

    /// Returns whether the result was applied.
    pub fn finish(&mut self, generation: u32, result: Result<(), String>) -> bool {
        if generation != self.generation || self.status != SubmitStatus::Submitting {
            return false;
        }
        self.status = match result {
            Ok(()) => SubmitStatus::Submitted,
            Err(message) => SubmitStatus::Failed(message),
        };
        true
    }

    pub fn dismiss(&mut self) {
        self.status = SubmitStatus::Editing;
    }

    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.status = SubmitStatus::Editing;
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

pub enum Field {
    LastName,
    FirstName,
    Email,
    Phone,
}

pub enum ContactMsg {
    SetAudience(Audience),
    SetField(Field, String),
    Submit,
    SubmitResult(u32, Result<(), String>),
    DismissError,
}

pub struct ContactModal {
    form: ContactForm,
    submit: SubmitState,
    field_error: Option<FieldError>,
    first_input: NodeRef,
    focus_timeout: Option<Timeout>,
}

impl ContactModal {
    fn reset(&mut self) {
        self.form = ContactForm::default();
        self.submit.reset();
        self.field_error = None;
        self.focus_timeout = None;
    }

    fn schedule_focus(&mut self) {
        let first_input = self.first_input.clone();
        self.focus_timeout = Some(Timeout::new(10, move || {
            if let Some(input) = first_input.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }));
    }

    fn input_callback(ctx: &Context<Self>, field: fn() -> Field) -> Callback<InputEvent> {
        ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::SetField(field(), input.value())
        })
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                if let SubmitStatus::Failed(message) = self.submit.status() {
                    <div class="contact-error" role="alert">
                        <span>{ message }</span>
                        <button
                            type="button"
                            aria-label="Dismiss"
                            onclick={ctx.link().callback(|_| ContactMsg::DismissError)}
                        >
                            { "✕" }
                        </button>
                    </div>
                }

                <div role="radiogroup" aria-label="Audience type" class="audience-toggle">
                    { for Audience::ALL.iter().map(|&opt| {
                        let selected = self.form.audience == opt;
                        html! {
                            <label key={opt.label()} class={classes!("audience-option", selected.then(|| "selected"))}>
                                <input
                                    type="radio"
                                    name="audience"
                                    class="sr-only"
                                    checked={selected}
                                    onchange={ctx.link().callback(move |_| ContactMsg::SetAudience(opt))}
                                />
                                <span class="audience-dot">
                                    if selected { <span class="audience-dot-fill"></span> }
                                </span>
                                { opt.label() }
                            </label>
                        }
                    }) }
                </div>

                <div class="contact-names">
                    <input
                        ref={self.first_input.clone()}
                        type="text"
                        name="lastName"
                        placeholder="Last Name"
                        value={self.form.last_name.clone()}
                        oninput={Self::input_callback(ctx, || Field::LastName)}
                    />
                    <input
                        type="text"
                        name="firstName"
                        placeholder="First Name"
                        value={self.form.first_name.clone()}
                        oninput={Self::input_callback(ctx, || Field::FirstName)}
                    />
                </div>
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    value={self.form.email.clone()}
                    oninput={Self::input_callback(ctx, || Field::Email)}
                />
                <input
                    type="tel"
                    name="phone"
                    placeholder="Phone Number"
                    inputmode="tel"
                    title="Use digits, spaces, +, -, or ()"
                    value={self.form.phone.clone()}
                    oninput={Self::input_callback(ctx, || Field::Phone)}
                />

                if let Some(err) = &self.field_error {
                    <p class="contact-field-error">{ err.to_string() }</p>
                }

                <button type="submit" class="modal-button primary contact-submit">
                    { "Subscribe →" }
                </button>
            </form>
        }
    }
}

impl Component for ContactModal {
    type Message = ContactMsg;
    type Properties = ContactModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut modal = Self {
            form: ContactForm::default(),
            submit: SubmitState::default(),
            field_error: None,
            first_input: NodeRef::default(),
            focus_timeout: None,
        };
        if ctx.props().open {
            modal.schedule_focus();
        }
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let open = ctx.props().open;
        if open != old_props.open {
            if open {
                self.schedule_focus();
            } else {
                self.reset();
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetAudience(audience) => {
                self.form.audience = audience;
                true
            }
            ContactMsg::SetField(field, value) => {
                let slot = match field {
                    Field::LastName => &mut self.form.last_name,
                    Field::FirstName => &mut self.form.first_name,
                    Field::Email => &mut self.form.email,
                    Field::Phone => &mut self.form.phone,
                };
                *slot = value;
                self.field_error = None;
                true
            }
            ContactMsg::Submit => {
                if *self.submit.status() == SubmitStatus::Submitting {
                    return false;
                }
                if let Err(e) = self.form.validate() {
                    self.field_error = Some(e);
                    return true;
                }
                self.field_error = None;
                let generation = self.submit.begin();
                let form = self.form.clone();
                ctx.link().send_future(async move {
                    let result = submit(form).await.map_err(|e| {
                        error!("Contact submission failed: {:?}", e);
                        e.to_string()
                    });
                    ContactMsg::SubmitResult(generation, result)
                });
                true
            }
            ContactMsg::SubmitResult(generation, result) => {
                if !self.submit.finish(generation, result) {
                    debug!("dropping stale contact response");
                    return false;
                }
                if *self.submit.status() == SubmitStatus::Submitted {
                    info!("Contact details submitted");
                }
                true
            }
            ContactMsg::DismissError => {
                self.submit.dismiss();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let close = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };

        let body = match self.submit.status() {
            SubmitStatus::Submitted => html! {
                <div class="contact-done">
                    <p>{ "Thanks! We’ve received your details. Our team will reach out shortly." }</p>
                    <button class="modal-button primary" onclick={close}>{ "Close" }</button>
                </div>
            },
            SubmitStatus::Submitting => html! {
                <div class="contact-done">
                    <div class="spinner"></div>
                    <p>{ "Processing your request..." }</p>
                </div>
            },
            SubmitStatus::Editing | SubmitStatus::Failed(_) => self.view_form(ctx),
        };

        html! {
            <ModalShell open={props.open} on_close={props.on_close.clone()} labelled_by="contact-title">
                <div class="contact-title">
                    <h2 id="contact-title" class="modal-title">{ "Join" }</h2>
                    <p>{ "The New Standard" }</p>
                </div>
                { body }
                <style>
                    {r#"
                        .contact-title {
                            margin-bottom: 28px;
                            text-align: center;
                        }
                        .contact-title p {
                            margin-top: 4px;
                            font-size: 18px;
                            font-weight: 500;
                            letter-spacing: 0.18em;
                            text-transform: uppercase;
                            color: #f97316;
                        }
                        .contact-form {
                            display: flex;
                            flex-direction: column;
                            gap: 16px;
                        }
                        .contact-form input[type="text"],
                        .contact-form input[type="email"],
                        .contact-form input[type="tel"] {
                            width: 100%;
                            box-sizing: border-box;
                            border-radius: 12px;
                            border: 1px solid #1a1a1a;
                            background: rgba(0, 0, 0, 0.25);
                            padding: 12px 16px;
                            font-size: 14px;
                            color: #f2f2f2;
                        }
                        .contact-form input::placeholder {
                            color: #a0a0a0;
                        }
                        .contact-form input:focus {
                            outline: none;
                            box-shadow: 0 0 0 2px rgba(255, 255, 255, 0.2);
                        }
                        .contact-names {
                            display: grid;
                            grid-template-columns: 1fr 1fr;
                            gap: 12px;
                        }
                        .audience-toggle {
                            display: grid;
                            grid-template-columns: 1fr 1fr;
                            gap: 12px;
                        }
                        .audience-option {
                            display: inline-flex;
                            align-items: center;
                            justify-content: center;
                            gap: 8px;
                            cursor: pointer;
                            user-select: none;
                            border-radius: 12px;
                            padding: 12px 16px;
                            font-size: 14px;
                            text-transform: uppercase;
                            letter-spacing: 0.05em;
                            border: 1px solid #1a1a1a;
                            background: rgba(0, 0, 0, 0.2);
                        }
                        .audience-option.selected {
                            border-color: rgba(255, 255, 255, 0.3);
                            background: rgba(255, 255, 255, 0.1);
                        }
                        .audience-dot {
                            display: inline-flex;
                            align-items: center;
                            justify-content: center;
                            width: 16px;
                            height: 16px;
                            border-radius: 9999px;
                            border: 1px solid #a0a0a0;
                        }
                        .audience-dot-fill {
                            width: 10px;
                            height: 10px;
                            border-radius: 9999px;
                            background: #f2f2f2;
                        }
                        .sr-only {
                            position: absolute;
                            width: 1px;
                            height: 1px;
                            overflow: hidden;
                            clip: rect(0, 0, 0, 0);
                        }
                        .contact-error {
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            gap: 12px;
                            padding: 10px 14px;
                            border-radius: 12px;
                            border: 1px solid rgba(239, 68, 68, 0.4);
                            background: rgba(239, 68, 68, 0.1);
                            color: #fca5a5;
                            font-size: 13px;
                        }
                        .contact-error button {
                            background: none;
                            border: none;
                            color: inherit;
                            cursor: pointer;
                        }
                        .contact-field-error {
                            margin: 0;
                            color: #fca5a5;
                            font-size: 13px;
                        }
                        .contact-submit {
                            width: 100%;
                            margin-top: 8px;
                            font-weight: 600;
                            text-transform: uppercase;
                            letter-spacing: 0.05em;
                        }
                        .contact-done {
                            text-align: center;
                            color: #a0a0a0;
                            font-size: 14px;
                        }
                        .spinner {
                            margin: 0 auto;
                            width: 32px;
                            height: 32px;
                            border-radius: 9999px;
                            border-bottom: 2px solid #f97316;
                            animation: spin 1s linear infinite;
                        }
                        @keyframes spin {
                            to { transform: rotate(360deg); }
                        }
                        @media (max-width: 640px) {
                            .contact-names {
                                grid-template-columns: 1fr;
                            }
                        }
                    "#}
                </style>
            </ModalShell>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            audience: Audience::Company,
            last_name: "Khan".to_string(),
            first_name: "Abrar".to_string(),
            email: "abrar@bitcoinwala.com".to_string(),
            phone: "+91 (22) 1234-5678".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut form = filled();
        form.last_name = "   ".to_string();
        assert_eq!(form.validate(), Err(FieldError::LastName));

        let mut form = filled();
        form.first_name.clear();
        assert_eq!(form.validate(), Err(FieldError::FirstName));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["", "abrar", "abrar@", "abrar@bitcoinwala", "a b@c.d"] {
            let mut form = filled();
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(FieldError::Email), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_phone_pattern() {
        for bad in ["12345", "call me", "+91 98x765"] {
            let mut form = filled();
            form.phone = bad.to_string();
            assert_eq!(form.validate(), Err(FieldError::Phone), "accepted {:?}", bad);
        }
        let mut form = filled();
        form.phone = "9876543210".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_request_payload() {
        let mut form = filled();
        form.email = "  abrar@bitcoinwala.com ".to_string();
        let json = serde_json::to_value(form.to_request()).unwrap();
        assert_eq!(json["service_id"], config::EMAILJS_SERVICE_ID);
        assert_eq!(json["template_id"], config::EMAILJS_TEMPLATE_ID);
        assert_eq!(json["user_id"], config::EMAILJS_PUBLIC_KEY);
        assert_eq!(json["template_params"]["audience"], "company");
        assert_eq!(json["template_params"]["email"], "abrar@bitcoinwala.com");
        assert_eq!(json["template_params"]["first_name"], "Abrar");
    }

    #[test]
    fn test_response_from_before_reset_is_dropped() {
        let mut state = SubmitState::default();
        let stale = state.begin();
        state.reset();
        let current = state.begin();

        assert!(!state.finish(stale, Err("boom".to_string())));
        assert_eq!(*state.status(), SubmitStatus::Submitting);

        assert!(state.finish(current, Ok(())));
        assert_eq!(*state.status(), SubmitStatus::Submitted);
    }

    #[test]
    fn test_result_after_close_is_ignored() {
        let mut state = SubmitState::default();
        let generation = state.begin();
        state.reset();
        assert!(!state.finish(generation, Ok(())));
        assert_eq!(*state.status(), SubmitStatus::Editing);
    }

    #[test]
    fn test_failure_can_be_dismissed() {
        let mut state = SubmitState::default();
        let generation = state.begin();
        assert!(state.finish(generation, Err("offline".to_string())));
        assert_eq!(*state.status(), SubmitStatus::Failed("offline".to_string()));
        state.dismiss();
        assert_eq!(*state.status(), SubmitStatus::Editing);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Status(500).to_string(),
            "Something went wrong (status 500). Please try again."
        );
        assert_eq!(FieldError::Phone.to_string(), "Use digits, spaces, +, -, or ()");
    }
}
