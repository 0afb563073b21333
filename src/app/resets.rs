use super::*;

impl ArtTutorApp {
    /// Leaves the results view and returns to the picker or analysis prompt.
    pub fn return_to_default(&mut self, context: QuizContext) {
        self.session_mut(context).return_to_default();
        self.message.clear();
    }

    pub fn clear_canvas(&mut self) {
        self.drawing.canvas.clear();
        self.drawing.critique.clear();
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Modal over the whole window; panels behind it take no input.
    pub fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(text) = self.alert.clone() else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("alert")).show(ctx, |ui| {
            ui.set_width(300.0);
            ui.heading("Hold on");
            ui.add_space(6.0);
            ui.label(text);
            ui.add_space(8.0);
            ui.button("OK").clicked()
        });
        // Escape and backdrop clicks dismiss it too
        if modal.inner || modal.should_close() {
            self.dismiss_alert();
        }
    }
}
