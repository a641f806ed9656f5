use crate::module;
use crate::module::utils::error::structure_err;

pub fn run_init() -> Result<(), Box<dyn std::error::Error>> {
    module::logger::init();
    if module::config::CONFIG.read().unwrap().menu_config.items.is_empty() {
        return Err(structure_err("account menu has no configured items"));
    }
    Ok(())
}
