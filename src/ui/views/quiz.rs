use egui::{Color32, Frame, RichText, Ui};
use crate::ArtTutorApp;
use crate::model::{QuizContext, QuizQuestion};
use crate::ui::helpers::progress_bar;
use crate::ui::layout::two_button_row;

/// Question form while a quiz is open, results once it was submitted.
pub fn quiz_section(app: &mut ArtTutorApp, ui: &mut Ui, context: QuizContext, back_label: &str) {
    let session = app.session(context);
    if session.show_results() {
        quiz_results(app, ui, context, back_label);
        return;
    }
    if !session.is_generated() {
        return;
    }

    let questions: Vec<QuizQuestion> = session.questions().to_vec();
    let answers: Vec<String> = session.answers().to_vec();
    let answered = session.answered_count();

    ui.heading("Quiz");
    ui.add_space(6.0);
    progress_bar(ui, answered, questions.len());
    ui.add_space(10.0);

    for (qi, q) in questions.iter().enumerate() {
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("{}. {}", qi + 1, q.question)).strong());
            for option in &q.options {
                let checked = answers[qi] == *option;
                if ui.radio(checked, option).clicked() {
                    app.select_answer(context, qi, option);
                }
            }
        });
        ui.add_space(6.0);
    }

    let width = ui.available_width();
    let (submit, back) = two_button_row(ui, width, "Submit Quiz", back_label);
    if submit {
        app.submit_quiz(context);
    }
    if back {
        app.return_to_default(context);
    }
}

fn quiz_results(app: &mut ArtTutorApp, ui: &mut Ui, context: QuizContext, back_label: &str) {
    let rows = app.result_rows(context);
    let Some(outcome) = app.session(context).outcome().copied() else {
        return;
    };

    ui.heading("Quiz Results");
    ui.label(format!(
        "You got {} out of {} correct ({}%).",
        outcome.correct_count,
        outcome.total,
        outcome.percentage()
    ));
    ui.label(format!("⭐ Points earned this quiz: {}", outcome.points_gained));
    ui.add_space(10.0);

    for row in &rows {
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("{}. {}", row.number, row.question)).strong());
            let (mark, color) = if row.is_correct {
                ("✅", Color32::from_rgb(34, 197, 94))
            } else {
                ("❌", Color32::from_rgb(239, 68, 68))
            };
            ui.label(RichText::new(format!("{mark} Your answer: {}", row.chosen)).color(color));
            if !row.is_correct {
                ui.label(format!("Correct answer: {}", row.correct_answer));
            }
            if !row.explanation.is_empty() {
                ui.label(RichText::new(&row.explanation).italics());
            }
        });
        ui.add_space(6.0);
    }

    if ui.button(back_label).clicked() {
        app.return_to_default(context);
    }
}
