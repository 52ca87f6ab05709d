//! In-app record of network activity.
//!
//! Network failures are logged, never alerted — the form's blocking notices
//! are reserved for validation. Entries also go to `tracing`; this log is the
//! user-visible trail.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

impl LogLevel {
    fn class(self) -> &'static str {
        match self {
            LogLevel::Info => "activity-log-entry--info",
            LogLevel::Success => "activity-log-entry--success",
            LogLevel::Error => "activity-log-entry--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    let ts = current_time();
    log.write().entries.push(LogEntry {
        timestamp: ts,
        level,
        message: message.to_string(),
    });
}

/// Collapsible panel listing recent activity, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let entries = log().entries;
    let visible = log().visible;

    rsx! {
        div {
            class: "activity-log",
            button {
                class: "activity-log-toggle",
                onclick: move |_| {
                    let visible = log.peek().visible;
                    log.write().visible = !visible;
                },
                if visible {
                    "Hide activity"
                } else {
                    "Show activity ({entries.len()})"
                }
            }
            if visible {
                ul {
                    class: "activity-log-entries",
                    for entry in entries.iter().rev() {
                        li {
                            class: "activity-log-entry {entry.level.class()}",
                            span { class: "activity-log-time", "{entry.timestamp}" }
                            span { "{entry.message}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
