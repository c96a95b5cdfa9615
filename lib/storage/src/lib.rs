pub mod txt_logger;

pub use txt_logger::TxtLogger;
