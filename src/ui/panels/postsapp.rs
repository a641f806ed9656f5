use eframe::egui;
use eframe::egui::RichText;

use crate::module::menu::surface::PageSurface;

/// Renders whatever the posts content region holds, one post per line.
/// The placeholder injected by the empty-state check shows up here too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostsApp {}

impl PostsApp {
    pub(crate) fn ui(&mut self, ui: &mut egui::Ui, surface: &PageSurface) {
        ui.vertical(|ui| {
            ui.add_space(3.);
            for line in surface.posts_content().lines() {
                ui.label(RichText::new(line.to_owned()).size(14.0));
                ui.add_space(3.);
            }
        });
    }
}
