use dioxus::prelude::*;

#[component]
pub fn Internship() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-internship",
            h1 { {crate::t!("page-internship-title")} }
            p { class: "page__placeholder", {crate::t!("page-internship-intro")} }
        }
    }
}
