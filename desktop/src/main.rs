#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::{self, DashboardConfig};
use ui::dashboard::use_dashboard_provider;
use ui::views::{Dashboard, Internship, SkillTest};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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
)); // Shared theme, embedded so packaged builds need no asset directory for it.

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("skillboard_desktop=info,ui=info,warn")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    tracing::info!("Skillboard v{} starting", env!("CARGO_PKG_VERSION"));

    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Skillboard – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_skill_test(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", to: Route::SkillTest {}, "{label}" })
}
fn nav_internship(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", to: Route::Internship {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // One score session per app run; it survives navigation between routes.
    use_dashboard_provider(|| DashboardConfig::load_or_default(config::default_config_path()));

    // Global reactive language code; AppNavbar updates it on language selection.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        skill_test: nav_skill_test,
        internship: nav_internship,
    });

    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout route wrapping the shared header/sidebar shell.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppNavbar {
            Outlet::<Route> {}
        }
    }
}
