#![cfg_attr(
    not(debug_assertions),
    windows_subsystem = "windows"
)] // hide console window on Windows in release

use std::error::Error;

mod module;
mod ui;

fn main() -> Result<(), Box<dyn Error>> {
    module::core::init::run_init()?;
    log::info!("Program started");
    ui::mainapp::ui_main()?;
    Ok(())
}
