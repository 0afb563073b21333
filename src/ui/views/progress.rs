use egui::Context;
use crate::ArtTutorApp;
use crate::ui::helpers::quest_card;
use crate::ui::layout::{dashboard, simple_panel};

pub fn ui_progress(app: &mut ArtTutorApp, ctx: &Context) {
    let info = app.dashboard_info();
    let quests = app.quest_rows();

    simple_panel(ctx, 560.0, |ui| {
        ui.heading("Progress");
        ui.add_space(10.0);
        dashboard(ui, info.streak, info.points, &info.badges);

        ui.add_space(16.0);
        ui.heading("Daily Quests");
        ui.add_space(8.0);
        for quest in &quests {
            quest_card(ui, quest);
            ui.add_space(8.0);
        }
    });
}
