//! Table of every cached user record with per-row Edit and Delete actions.

use api::User;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn UserTable(
    users: Vec<User>,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "user-table-wrap",
            if users.is_empty() {
                p { class: "user-table-empty", "No users registered yet." }
            } else {
                table {
                    class: "user-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "First Name" }
                            th { "Last Name" }
                            th { "Email" }
                            th { "Password" }
                            th { "Gender" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in users {
                            UserRow {
                                key: "{user.id}",
                                user: user.clone(),
                                on_edit: on_edit,
                                on_delete: on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_user = user.clone();
    let delete_id = user.id.clone();

    rsx! {
        tr {
            td { "{user.id}" }
            td { "{user.first_name}" }
            td { "{user.last_name}" }
            td { "{user.email}" }
            // Stored credentials are never rendered in cleartext.
            td { class: "user-table-password", "••••••" }
            td { "{user.gender}" }
            td {
                class: "user-table-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
