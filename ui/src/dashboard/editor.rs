use dioxus::prelude::*;

use crate::core::{ScoreField, ValidationError};
use crate::dashboard::use_dashboard;
use crate::t;

/// "Update Information" modal. Renders nothing while the editor is closed.
#[component]
pub fn UpdateDialog() -> Element {
    let session = use_dashboard();
    let mut editor = session.editor;
    let mut store = session.store;
    let mut last_error = use_signal(|| Option::<ValidationError>::None);

    let Some(fields) = editor.read().fields().cloned() else {
        return rsx! {};
    };

    let on_cancel = move |_| {
        last_error.set(None);
        editor.with_mut(|e| e.cancel());
    };

    let on_submit = move |_| {
        let mode = session.config.read().editor.validation;
        let outcome = editor.with_mut(|e| store.with_mut(|s| e.submit(s, mode)));
        match outcome {
            Ok(Some(record)) => {
                last_error.set(None);
                tracing::info!(
                    percentile = record.percentile,
                    rank = record.rank,
                    correct = record.correct_answers,
                    commits = store.read().commit_count(),
                    "scores updated"
                );
            }
            Ok(None) => last_error.set(None),
            Err(err) => last_error.set(Some(err)),
        }
    };

    let error_text = last_error().map(|err| t!("editor-error", detail = err.to_string()));
    let error_field = last_error().map(|err| err.field());

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog", aria_modal: "true",
                h2 { class: "modal__title", {t!("editor-title")} }
                form {
                    onsubmit: move |evt| evt.prevent_default(),
                    for field in ScoreField::ALL {
                        {render_field(field, fields.get(field).to_string(), error_field == Some(field), editor)}
                    }

                    if let Some(message) = error_text {
                        p { class: "modal__error", "⚠️ {message}" }
                    }

                    div { class: "modal__actions",
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: on_cancel,
                            {t!("editor-cancel")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: on_submit,
                            {t!("editor-submit")}
                        }
                    }
                }
            }
        }
    }
}

fn render_field(
    field: ScoreField,
    value: String,
    invalid: bool,
    mut editor: Signal<crate::core::EditorSession>,
) -> Element {
    let label = match field {
        ScoreField::Percentile => t!("editor-percentile"),
        ScoreField::Rank => t!("editor-rank"),
        ScoreField::CorrectAnswers => t!("editor-correct"),
    };
    let id = field.key();
    let input_class = if invalid {
        "modal__input modal__input--invalid"
    } else {
        "modal__input"
    };

    rsx! {
        div { class: "modal__field",
            label { r#for: "{id}", class: "modal__label", "{label}" }
            input {
                r#type: "number",
                id: "{id}",
                class: "{input_class}",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    let raw = evt.value();
                    editor.with_mut(|e| e.set_field(field, raw));
                },
            }
        }
    }
}
