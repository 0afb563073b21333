use egui::{Color32, Context, CornerRadius, RichText, Sense, Shape, Stroke, pos2, vec2};
use crate::ArtTutorApp;
use crate::canvas::{STROKE_WIDTH, fit_size};
use crate::ui::layout::simple_panel;

pub fn ui_canvas(app: &mut ArtTutorApp, ctx: &Context) {
    simple_panel(ctx, 840.0, |ui| {
        ui.heading("Canvas");
        ui.label("Draw something and ask for a critique.");
        ui.add_space(8.0);

        let [w, h] = fit_size(ui.available_width());
        // Resizing starts a fresh white surface
        if app.drawing.size != [w, h] {
            app.drawing.canvas.clear();
            app.drawing.size = [w, h];
        }

        let (response, painter) = ui.allocate_painter(vec2(w, h), Sense::drag());
        let rect = response.rect;
        painter.rect_filled(rect, CornerRadius::ZERO, Color32::WHITE);

        if let Some(pos) = response.interact_pointer_pos() {
            let local = [pos.x - rect.min.x, pos.y - rect.min.y];
            if response.drag_started() {
                app.drawing.canvas.start_stroke(local);
            } else if response.dragged() {
                app.drawing.canvas.extend_stroke(local);
            }
        }
        if response.drag_stopped() {
            app.drawing.canvas.end_stroke();
        }

        let ink = Stroke::new(STROKE_WIDTH, Color32::BLACK);
        for stroke in &app.drawing.canvas.strokes {
            let points: Vec<_> = stroke
                .iter()
                .map(|p| pos2(rect.min.x + p[0], rect.min.y + p[1]))
                .collect();
            match points.len() {
                0 => {}
                1 => {
                    painter.circle_filled(points[0], STROKE_WIDTH / 2.0, Color32::BLACK);
                }
                _ => {
                    painter.add(Shape::line(points, ink));
                }
            }
        }

        ui.add_space(10.0);
        let loading = app.drawing.is_loading();
        ui.horizontal(|ui| {
            let clear = egui::Button::new("Clear").fill(Color32::from_rgb(239, 68, 68));
            if ui.add(clear).clicked() {
                app.clear_canvas();
            }
            let label = if loading { "Loading..." } else { "Get Critique" };
            if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
                app.request_critique();
            }
            if loading {
                ui.spinner();
            }
        });

        if !loading && !app.drawing.critique.is_empty() {
            ui.add_space(10.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Canvas Critique").heading());
                ui.label(&app.drawing.critique);
            });
        }
    });
}
