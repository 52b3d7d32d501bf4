use crate::dashboard::DashboardSession;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (shared by every platform)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` so `ui` can render localized sidebar links
/// without knowing each platform's `Route` enum.
///
/// Each function receives the localized label and returns a `Link` that already
/// contains it:
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "sidebar__link", to: Route::Dashboard {}, "{label}" } ),
///     skill_test: |label| rsx!( Link { class: "sidebar__link", to: Route::SkillTest {}, "{label}" } ),
///     internship: |label| rsx!( Link { class: "sidebar__link", to: Route::Internship {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub skill_test: fn(label: &str) -> Element,
    pub internship: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

/// Top header (brand, profile, locale switcher) followed by the sidebar and the
/// routed page passed as `children`.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let display_name = try_use_context::<DashboardSession>()
        .map(|session| session.config.read().profile.display_name.clone())
        .unwrap_or_default();
    let initials: String = display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("language switch to {val} failed: {err}"),
        }
    };

    let sidebar = NAV_BUILDER.get().map(|b| {
        let dashboard = (b.dashboard)(&t!("nav-dashboard"));
        let skill_test = (b.skill_test)(&t!("nav-skill-test"));
        let internship = (b.internship)(&t!("nav-internship"));
        rsx! {
            nav { class: "sidebar__links",
                {dashboard}
                {skill_test}
                {internship}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Skillboard" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                div { class: "navbar__end",
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                for code in langs() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                    }
                    if !display_name.is_empty() {
                        div { class: "navbar__profile",
                            span { class: "navbar__avatar", aria_hidden: "true", "{initials}" }
                            span { class: "navbar__profile-name", "{display_name}" }
                        }
                    }
                }
            }
        }

        div { class: "shell",
            aside { class: "sidebar",
                if let Some(links) = sidebar {
                    {links}
                }
            }
            main { class: "shell__main", {children} }
        }
    }
}
