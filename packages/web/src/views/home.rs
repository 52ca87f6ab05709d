use dioxus::prelude::*;

/// Single page: the registration form with the user table below it.
#[component]
pub fn Home() -> Element {
    rsx! {
        ui::RegisterForm {}
    }
}
