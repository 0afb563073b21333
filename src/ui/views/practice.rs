use egui::{Context, Grid};
use crate::ArtTutorApp;
use crate::model::QuizContext;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::simple_panel;
use crate::ui::views::quiz::quiz_section;

pub fn ui_practice(app: &mut ArtTutorApp, ctx: &Context) {
    simple_panel(ctx, 720.0, |ui| {
        ui.heading("Practice Quiz");
        ui.add_space(8.0);
        if !app.message.is_empty() {
            ui.label(&app.message);
            ui.add_space(8.0);
        }

        let session = app.session(QuizContext::Practice);
        if session.is_generated() {
            if let Some(category) = session.source() {
                ui.label(format!("Category: {category}"));
                ui.add_space(6.0);
            }
            quiz_section(app, ui, QuizContext::Practice, "Back to categories");
            return;
        }

        if session.is_loading() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label("Generating your quiz...");
            });
            return;
        }

        ui.label("Select a category to test your knowledge:");
        ui.add_space(10.0);

        let categories = app.catalog.categories.clone();
        let button_w = (ui.available_width() - 12.0) / 2.0;
        let mut picked = None;
        Grid::new("category_grid")
            .num_columns(2)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, category) in categories.iter().enumerate() {
                    if big_list_button(ui, category, button_w, 48.0, true) {
                        picked = Some(category.clone());
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        if let Some(category) = picked {
            app.generate_practice_quiz(&category);
        }
    });
}
