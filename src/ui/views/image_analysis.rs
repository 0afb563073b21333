use egui::{Context, RichText, TextEdit, TextureOptions};
use crate::ArtTutorApp;
use crate::model::QuizContext;
use crate::ui::layout::simple_panel;
use crate::ui::views::quiz::quiz_section;

pub fn ui_image_analysis(app: &mut ArtTutorApp, ctx: &Context) {
    // Preview textures need the context, so they are created lazily here
    if app.image.texture.is_none() {
        if let Some(preview) = app.image.upload.as_ref().and_then(|u| u.preview.clone()) {
            app.image.texture = Some(ctx.load_texture("upload_preview", preview, TextureOptions::LINEAR));
        }
    }

    simple_panel(ctx, 720.0, |ui| {
        ui.heading("Image Analysis");
        ui.add_space(8.0);
        ui.label("Drop an image on the window, or enter its path:");

        ui.horizontal(|ui| {
            let input = ui.add(
                TextEdit::singleline(&mut app.image.path_input)
                    .hint_text("/path/to/painting.jpg")
                    .desired_width(360.0),
            );
            let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Upload File").clicked() || enter {
                app.upload_from_path();
            }
        });

        if let Some(texture) = &app.image.texture {
            ui.add_space(10.0);
            ui.add(
                egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                    .max_width(300.0)
                    .max_height(300.0),
            );
        } else if let Some(upload) = &app.image.upload {
            ui.add_space(10.0);
            ui.label(format!("📄 {}", upload.name));
        }

        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            if app.image.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Generating...");
                });
            } else if let Some(analysis) = &app.image.analysis {
                match &analysis.image_style {
                    Some(style) => {
                        ui.label(RichText::new("Image Analysis").heading());
                        ui.label(format!("Detected Style: {style}"));
                        if let Some(confidence) = analysis.confidence_label() {
                            ui.label(format!("Confidence Score: {confidence}"));
                        }
                        if let Some(description) = &analysis.description {
                            ui.add_space(4.0);
                            ui.label(description);
                        }
                    }
                    None => {
                        ui.label("Upload an image to see the analysis results.");
                    }
                }
                if let Some(recommendations) = &analysis.recommendations {
                    ui.add_space(6.0);
                    ui.label(RichText::new("Recommendations").strong());
                    ui.label(recommendations);
                }
            } else {
                ui.label("Upload an image to see the analysis results.");
            }
        });

        ui.add_space(12.0);
        let session = app.session(QuizContext::ImageAnalysis);
        if session.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating your quiz...");
            });
        } else if !session.is_generated() {
            let enabled = app.detected_style().is_some() && !app.image.is_loading();
            let label = match app.detected_style() {
                Some(style) => format!("📝 Generate a {style} quiz"),
                None => "📝 Generate quiz".to_string(),
            };
            if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                app.generate_image_quiz();
            }
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }

        ui.add_space(12.0);
        quiz_section(app, ui, QuizContext::ImageAnalysis, "Back to analysis");
    });
}
