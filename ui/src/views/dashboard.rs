use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-dashboard",
            h1 { {crate::t!("page-dashboard-title")} }
            p { {crate::t!("page-dashboard-intro")} }
        }
    }
}
