use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::dashboard::use_dashboard_provider;
use ui::views::{Dashboard, Internship, SkillTest};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    SkillTest {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/internship")]
    Internship {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_skill_test(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        to: Route::SkillTest {},
        "{label}"
    })
}
fn nav_internship(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        to: Route::Internship {},
        "{label}"
    })
}

fn main() {
    // dioxus::launch installs its own tracing logger on web.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // No file system in the browser; the web build always runs with defaults.
    use_dashboard_provider(DashboardConfig::default);

    // Global reactive language code; AppNavbar updates it on language selection.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        skill_test: nav_skill_test,
        internship: nav_internship,
    });

    use_hook(|| tracing::info!("Skillboard web v{} mounted", env!("CARGO_PKG_VERSION")));

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout route wrapping the shared header/sidebar shell.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar {
            Outlet::<Route> {}
        }
    }
}
