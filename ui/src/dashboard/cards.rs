use dioxus::prelude::*;

use crate::core::{TopicMastery, TOTAL_QUESTIONS};
use crate::dashboard::{svg, use_dashboard};
use crate::{i18n, t};

#[component]
pub fn ComparisonGraphCard() -> Element {
    let session = use_dashboard();
    let metrics = session.metrics.read();

    let sentence = i18n::comparison_sentence(&metrics.comparison);
    let chart = svg::distribution_svg(
        &metrics.distribution,
        &t!("chart-your-percentile"),
        &t!("chart-axis-percentile"),
    );

    rsx! {
        div { class: "dashboard-card comparison-card",
            h2 { class: "dashboard-card__title", {t!("card-comparison-title")} }
            p { class: "comparison-card__narrative", "{sentence}" }
            div { class: "comparison-card__chart", dangerous_inner_html: "{chart}" }
        }
    }
}

#[component]
pub fn QuestionAnalysisCard() -> Element {
    let session = use_dashboard();
    let metrics = session.metrics.read();

    let correct = metrics.record.correct_answers;
    let total = TOTAL_QUESTIONS;
    let summary = t!("questions-summary", correct = correct, total = total);
    let chart = svg::donut_svg(&metrics.donut, &t!("donut-correct"), &t!("donut-wrong"));

    rsx! {
        div { class: "dashboard-card question-card",
            h2 { class: "dashboard-card__title", {t!("card-questions-title")} }
            p { class: "question-card__summary", "{summary}" }
            div { class: "question-card__chart", dangerous_inner_html: "{chart}" }
        }
    }
}

#[component]
pub fn SyllabusAnalysisCard() -> Element {
    let session = use_dashboard();
    let topics = session.metrics.read().mastery.clone();

    rsx! {
        div { class: "dashboard-card syllabus-card",
            h2 { class: "dashboard-card__title", {t!("card-syllabus-title")} }
            for (index, topic) in topics.into_iter().enumerate() {
                {render_topic(index, topic)}
            }
        }
    }
}

fn render_topic(index: usize, topic: TopicMastery) -> Element {
    let width = topic.bar_width();
    let fill_class = format!("mastery-bar__fill {}", topic.tone.css_class());

    rsx! {
        div { key: "{index}", class: "mastery-bar",
            p { class: "mastery-bar__heading",
                span { "{topic.topic}" }
                span { class: "mastery-bar__value", "{width}" }
            }
            div { class: "mastery-bar__track",
                div { class: "{fill_class}", style: "width: {width}" }
            }
        }
    }
}
