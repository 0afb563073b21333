// src/ui/helpers.rs
use egui::{Button, Color32, Frame, ProgressBar, RichText, Ui, Vec2};

use crate::view_models::QuestRow;

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

pub fn stat_card(ui: &mut Ui, fill: Color32, text: &str) {
    Frame::default()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).strong().size(16.0).color(Color32::WHITE));
        });
}

pub fn badge_chip(ui: &mut Ui, name: &str) {
    Frame::default()
        .fill(Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, Color32::LIGHT_GRAY))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(name).color(Color32::BLACK));
        });
}

/// "answered/total completed (pct%)" bar.
pub fn progress_bar(ui: &mut Ui, progress: usize, total: usize) {
    let fraction = if total == 0 { 0.0 } else { progress as f32 / total as f32 };
    let pct = (fraction * 100.0).round() as u32;
    ui.add(ProgressBar::new(fraction).text(format!("{progress}/{total} completed ({pct}%)")));
}

pub fn quest_card(ui: &mut Ui, quest: &QuestRow) {
    Frame::default()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&quest.icon).size(18.0));
                ui.label(&quest.label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if quest.unlocked {
                        ui.label(RichText::new("🔓").color(Color32::GOLD))
                            .on_hover_text("Reward unlocked");
                    } else {
                        ui.label("🔒").on_hover_text("Reward locked");
                    }
                });
            });
            ui.add(ProgressBar::new(quest.percentage as f32 / 100.0).desired_height(8.0));
            ui.label(RichText::new(format!("{} / {}", quest.current, quest.goal)).small());
        });
}
