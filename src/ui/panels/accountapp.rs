use eframe::egui;
use eframe::egui::RichText;

use crate::module::config::CONFIG;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountApp {}

impl AccountApp {
    pub(crate) fn ui(&mut self, ui: &mut egui::Ui) {
        let account = CONFIG.read().unwrap().account_config.clone();
        ui.vertical(|ui| {
            ui.add_space(3.);
            ui.label(RichText::new(format!("Username: {}", account.username)).size(14.0));
            ui.add_space(3.);
            ui.label(RichText::new(format!("Email: {}", account.email)).size(14.0));
        });
    }
}
