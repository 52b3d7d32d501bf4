use dioxus::prelude::*;

use crate::core::{format, TOTAL_QUESTIONS};
use crate::dashboard::use_dashboard;
use crate::t;

/// Assessment header plus the rank / percentile / correct-answers row.
#[component]
pub fn SkillTestCard() -> Element {
    let session = use_dashboard();
    let mut editor = session.editor;

    let config = session.config.read();
    let assessment = &config.assessment;
    let meta = t!(
        "card-assessment-meta",
        questions = assessment.questions_label(),
        minutes = assessment.duration_minutes,
        date = assessment.submitted_label()
    );
    let title = assessment.title.clone();

    let metrics = session.metrics.read();
    let record = metrics.record;
    let percentile = format::format_percentile(record.percentile);
    let score = format::format_score(record.correct_answers, TOTAL_QUESTIONS);

    rsx! {
        div { class: "skill-card",
            div { class: "skill-card__header",
                div { class: "skill-card__assessment",
                    span { class: "skill-card__badge", aria_hidden: "true", "</>" }
                    div {
                        h4 { class: "skill-card__title", "{title}" }
                        p { class: "skill-card__meta", "{meta}" }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| editor.with_mut(|e| e.open()),
                    {t!("button-update")}
                }
            }

            div { class: "skill-card__stats",
                div { class: "skill-stat",
                    span { class: "skill-stat__icon", aria_hidden: "true", "🏆" }
                    div {
                        h4 { class: "skill-stat__value", "{record.rank}" }
                        p { class: "skill-stat__label", {t!("stat-rank")} }
                    }
                }
                div { class: "skill-stat",
                    span { class: "skill-stat__icon", aria_hidden: "true", "📋" }
                    div {
                        h4 { class: "skill-stat__value", "{percentile}" }
                        p { class: "skill-stat__label", {t!("stat-percentile")} }
                    }
                }
                div { class: "skill-stat",
                    span { class: "skill-stat__icon", aria_hidden: "true", "✅" }
                    div {
                        h4 { class: "skill-stat__value", "{score}" }
                        p { class: "skill-stat__label", {t!("stat-correct")} }
                    }
                }
            }
        }
    }
}
