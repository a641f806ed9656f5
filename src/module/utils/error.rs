use std::error::Error;
use std::fmt;

/// Structural problem with the configured account page, caught at startup.
#[derive(Debug)]
struct PageStructureError(String);

impl fmt::Display for PageStructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account page structure: {}", self.0)
    }
}

impl Error for PageStructureError {}

pub fn structure_err(message: &str) -> Box<dyn Error> {
    log::error!("{}", message);
    Box::new(PageStructureError(message.to_owned()))
}
