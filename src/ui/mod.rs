mod helpers;
pub mod layout;
pub mod views;

use crate::app::ArtTutorApp;
use crate::model::Tab;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, left_panel, right_panel};
use std::time::Instant;

impl App for ArtTutorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.track_active_time(Instant::now());
        // Finished requests land before anything is drawn this frame
        self.poll_requests();
        self.accept_dropped_files(ctx);

        left_panel(self, ctx);
        right_panel(self, ctx);
        bottom_panel(ctx);

        // One central view per tab
        match self.tab {
            Tab::ImageAnalysis => views::image_analysis::ui_image_analysis(self, ctx),
            Tab::Practice => views::practice::ui_practice(self, ctx),
            Tab::Canvas => views::canvas::ui_canvas(self, ctx),
            Tab::Progress => views::progress::ui_progress(self, ctx),
        }

        if self.alert.is_some() {
            self.show_alert(ctx);
        }
    }
}

impl ArtTutorApp {
    /// Files dropped on the window are uploaded for classification.
    fn accept_dropped_files(&mut self, ctx: &Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // Only the first file of a multi-file drop is used
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        // Native drops usually carry only a path
        let bytes = match (file.bytes, &file.path) {
            (Some(bytes), _) => bytes,
            (None, Some(path)) => match std::fs::read(path) {
                Ok(bytes) => bytes.into(),
                Err(err) => {
                    log::warn!("could not read dropped file {}: {err}", path.display());
                    self.message = format!("❌ Could not read {}", path.display());
                    return;
                }
            },
            (None, None) => return,
        };

        let name = file
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(file.name);

        self.select_tab(Tab::ImageAnalysis);
        self.upload_image(name, bytes);
    }
}
