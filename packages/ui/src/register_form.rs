//! The registration page: a six-field form above the table of stored users.
//!
//! The form owns one [`FormState`] signal and one [`UserRoster`] signal. The
//! roster is filled by a single eager fetch on mount and reconciled after
//! each successful mutation; the server stays authoritative throughout. A
//! pending create/update disables the submit button, and a fetch snapshot
//! overtaken by a later request is discarded instead of applied.

use api::{Gender, User};
use dioxus::prelude::*;
use tracing::{error, warn};

use crate::activity_log::{log_activity, use_activity_log, ActivityLogPanel, LogLevel};
use crate::components::{Button, ButtonVariant, Input, Label};
use crate::form::{FormMode, FormState, ValidationError};
use crate::icons::FaHand;
use crate::requests::RequestSeq;
use crate::roster::UserRoster;
use crate::user_table::UserTable;
use crate::{use_users_client, Icon};

const REGISTER_CSS: Asset = asset!("/src/register_form.css");

#[component]
pub fn RegisterForm() -> Element {
    let client = use_users_client();
    let mut form = use_signal(FormState::default);
    let mut roster = use_signal(UserRoster::default);
    let mut notice = use_signal(|| Option::<ValidationError>::None);
    let mut submitting = use_signal(|| false);
    let mut seq = use_signal(RequestSeq::default);
    let mut log = use_activity_log();

    // Eager pull of the whole collection on mount. A failure leaves the
    // roster empty and is only logged.
    let fetch_client = client.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        async move {
            let token = seq.write().issue();
            match client.fetch_all().await {
                Ok(users) => {
                    if !seq.peek().is_current(token) {
                        warn!("discarding stale user snapshot");
                        return;
                    }
                    log_activity(
                        &mut log,
                        LogLevel::Info,
                        &format!("Loaded {} users", users.len()),
                    );
                    roster.write().replace_all(users);
                }
                Err(err) => {
                    error!("failed to load users: {err}");
                    log_activity(&mut log, LogLevel::Error, &format!("Failed to load users: {err}"));
                }
            }
        }
    });

    let submit_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        notice.set(None);

        let draft = match form.peek().validate() {
            Ok(draft) => draft,
            Err(err) => {
                notice.set(Some(err));
                return;
            }
        };
        let mode = form.peek().mode();

        // Set before spawning so a second click cannot race the task start.
        submitting.set(true);

        let client = submit_client.clone();
        spawn(async move {
            seq.write().issue();

            match mode {
                FormMode::Editing(id) => match client.update(&id, &draft).await {
                    Ok(updated) => {
                        roster.write().apply_update(updated);
                        form.write().clear();
                        log_activity(&mut log, LogLevel::Success, &format!("Updated user {id}"));
                    }
                    Err(err) => {
                        error!("update failed: {err}");
                        log_activity(&mut log, LogLevel::Error, &format!("Update failed: {err}"));
                    }
                },
                FormMode::Create => match client.create(&draft).await {
                    Ok(created) => {
                        log_activity(
                            &mut log,
                            LogLevel::Success,
                            &format!("Registered user {}", created.id),
                        );
                        roster.write().push(created);
                        form.write().clear();
                    }
                    Err(err) => {
                        error!("create failed: {err}");
                        log_activity(&mut log, LogLevel::Error, &format!("Registration failed: {err}"));
                    }
                },
            }

            submitting.set(false);
        });
    };

    let handle_edit = move |user: User| {
        notice.set(None);
        form.write().load_for_edit(&user);
    };

    let delete_client = client;
    let handle_delete = move |id: String| {
        let client = delete_client.clone();
        spawn(async move {
            seq.write().issue();
            match client.delete(&id).await {
                Ok(()) => {
                    roster.write().remove(&id);
                    log_activity(&mut log, LogLevel::Info, &format!("Deleted user {id}"));
                }
                Err(err) => {
                    error!("delete failed: {err}");
                    log_activity(&mut log, LogLevel::Error, &format!("Delete failed: {err}"));
                }
            }
        });
    };

    let state = form();

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTER_CSS }

        div {
            class: "register-page",

            h1 { class: "form-heading", "Registration Form" }

            div {
                class: "register-form",
                form {
                    class: "form-control",
                    onsubmit: handle_submit,

                    h2 {
                        class: "form-heading form-welcome",
                        "Welcome "
                        Icon { icon: FaHand, width: 22, height: 22 }
                    }

                    if let Some(err) = notice() {
                        div { class: "form-notice", role: "alert", "{err}" }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "first-name", "First Name :" }
                        Input {
                            id: "first-name",
                            r#type: "text",
                            placeholder: "Enter your first name here",
                            value: state.first_name.clone(),
                            oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "last-name", "Last Name :" }
                        Input {
                            id: "last-name",
                            r#type: "text",
                            placeholder: "Enter your last name here",
                            value: state.last_name.clone(),
                            oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "email", "Email ID :" }
                        Input {
                            id: "email",
                            r#type: "email",
                            placeholder: "Enter Valid Email",
                            value: state.email.clone(),
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "password", "Password :" }
                        Input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Characters: uppercase, lowercase, number & Length 6",
                            value: state.password.clone(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "confirm-password", "Confirm Password :" }
                        Input {
                            id: "confirm-password",
                            r#type: "password",
                            placeholder: "Enter here",
                            value: state.confirm_password.clone(),
                            oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "gender", "Gender :" }
                        select {
                            id: "gender",
                            class: "input-field",
                            value: "{state.gender.as_value()}",
                            onchange: move |evt| form.write().gender = Gender::from_value(&evt.value()),
                            option { value: "", "Select Gender" }
                            option { value: "male", "Male" }
                            option { value: "female", "Female" }
                            option { value: "other", "Other" }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "register-btn",
                        r#type: "submit",
                        disabled: submitting(),
                        "{state.submit_label()}"
                    }
                }
            }

            h2 { class: "form-heading", "User Details :" }
            UserTable {
                users: roster().into_users(),
                on_edit: handle_edit,
                on_delete: handle_delete,
            }

            ActivityLogPanel {}
        }
    }
}
