use eframe::egui;
use eframe::egui::RichText;

use crate::module::config::CONFIG;
use crate::module::menu::controller::{MenuController, ACCOUNT_DETAILS, MY_POSTS};
use crate::module::menu::surface::PageSurface;
use crate::ui::panels::accountapp::AccountApp;
use crate::ui::panels::postsapp::PostsApp;

pub fn ui_main() -> Result<(), eframe::Error> {
    let ui_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Postboard",
        ui_options,
        Box::new(|_cc| Box::new(MainApp::default())),
    )
}

fn menu_label(item: &str) -> String {
    match item {
        MY_POSTS => "My Posts".to_owned(),
        ACCOUNT_DETAILS => "Account Details".to_owned(),
        other => other.replace('_', " "),
    }
}

// ----------------------------------------------------------------------------
// Main App

pub struct MainApp {
    controller: MenuController,
    surface: PageSurface,
    posts_app: PostsApp,
    account_app: AccountApp,
}

impl Default for MainApp {
    fn default() -> Self {
        let items = CONFIG.read().unwrap().menu_config.items.clone();
        let controller = MenuController::new(items);
        let mut surface = PageSurface::new(controller.items());
        // the posts panel must not render blank before any selection
        controller.on_ready(&mut surface);
        MainApp {
            controller,
            surface,
            posts_app: PostsApp::default(),
            account_app: AccountApp::default(),
        }
    }
}

impl eframe::App for MainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Title Bar
            ui.add_space(2.0);
            ui.horizontal(|ui| {
                ui.add_space(3.0);
                ui.label(RichText::new("Postboard").size(20.0));
                ui.add_space(5.0);
                for item in self.controller.items().to_vec() {
                    let label = RichText::new(menu_label(&item)).size(14.0);
                    let label = if self.surface.button_bold(&item) {
                        label.strong()
                    } else {
                        label
                    };
                    if ui.button(label).clicked() {
                        self.controller.select(&mut self.surface, &item);
                    }
                }
            });
            ui.add_space(2.0);

            ui.separator();

            // Main Panels
            ui.horizontal(|ui| {
                ui.add_space(3.0);
                for item in self.controller.items().to_vec() {
                    if !self.surface.panel_visible(&item) {
                        continue;
                    }
                    match item.as_str() {
                        MY_POSTS => self.posts_app.ui(ui, &self.surface),
                        ACCOUNT_DETAILS => self.account_app.ui(ui),
                        _ => {}
                    }
                }
                ui.add_space(3.0);
            });
        });
    }
}
