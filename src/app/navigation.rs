use super::*;
use log::debug;

impl ArtTutorApp {
    /// Switches tabs, dropping the requests owned by the tab being left.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        self.cancel_requests_of(self.tab);
        self.tab = tab;
        self.message.clear();
    }

    fn cancel_requests_of(&mut self, tab: Tab) {
        match tab {
            Tab::ImageAnalysis => {
                if self.image.request.take().is_some() {
                    debug!("classification cancelled on tab switch");
                }
                if self.image_quiz.cancel() {
                    debug!("image-analysis quiz generation cancelled on tab switch");
                }
            }
            Tab::Practice => {
                if self.practice_quiz.cancel() {
                    debug!("practice quiz generation cancelled on tab switch");
                }
            }
            Tab::Canvas => {
                if self.drawing.request.take().is_some() {
                    debug!("critique cancelled on tab switch");
                }
            }
            Tab::Progress => {}
        }
    }
}
