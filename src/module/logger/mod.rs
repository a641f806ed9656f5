mod logger;

pub use self::logger::*;
