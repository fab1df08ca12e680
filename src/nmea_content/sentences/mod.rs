mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod txt;
mod vtg;
mod zda;

pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gsv::GSV;
pub use rmc::RMC;
pub use txt::TXT;
pub use vtg::VTG;
pub use zda::ZDA;

/// UTC time of day as transmitted (`hhmmss.ss`), truncated to 10 characters
pub type UtcTime = heapless::String<10>;
