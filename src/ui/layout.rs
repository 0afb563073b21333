use crate::ArtTutorApp;
use crate::model::Tab;
use crate::ui::helpers::{badge_chip, stat_card};
use egui::{Button, CentralPanel, Color32, Context, Frame, RichText, Ui, Vec2, Visuals};

pub fn left_panel(app: &mut ArtTutorApp, ctx: &Context) {
    egui::SidePanel::left("navigation_panel")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading("Navigation");
            ui.add_space(12.0);

            for tab in Tab::ALL {
                let selected = app.tab == tab;
                let button = Button::new(RichText::new(tab.label()).size(16.0))
                    .selected(selected)
                    .min_size(Vec2::new(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    app.select_tab(tab);
                }
                ui.add_space(6.0);
            }
        });
}

pub fn right_panel(app: &ArtTutorApp, ctx: &Context) {
    let info = app.dashboard_info();
    egui::SidePanel::right("dashboard_panel")
        .resizable(false)
        .exact_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading("Your Dashboard");
            ui.add_space(12.0);
            dashboard(ui, info.streak, info.points, &info.badges);
        });
}

/// Streak, points and badges cards.
pub fn dashboard(ui: &mut Ui, streak: u32, points: u32, badges: &[String]) {
    stat_card(ui, Color32::from_rgb(34, 197, 94), &format!("🔥 Streak: {streak}"));
    ui.add_space(8.0);
    stat_card(ui, Color32::from_rgb(59, 130, 246), &format!("⭐ Points: {points}"));
    ui.add_space(8.0);

    Frame::default()
        .fill(Color32::from_rgb(234, 179, 8))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("🏅 Badges:").strong().color(Color32::BLACK));
            ui.add_space(4.0);
            if badges.is_empty() {
                ui.label(RichText::new("No badges earned yet!").color(Color32::DARK_GRAY));
            } else {
                ui.horizontal_wrapped(|ui| {
                    for badge in badges {
                        badge_chip(ui, badge);
                    }
                });
            }
        });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Central panel with a framed column of at most `max_width`.
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
    });
}

/// Draws two equally sized buttons in a row.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
