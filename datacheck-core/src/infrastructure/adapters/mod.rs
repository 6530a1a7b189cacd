pub mod csv_loader;
pub mod pdf;
pub mod smtp;

pub use csv_loader::load_csv;
pub use pdf::{PageGeometry, PdfWriter};
pub use smtp::SmtpMailer;
