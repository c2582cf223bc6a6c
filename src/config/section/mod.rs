//! Configuration sections of `popchip.toml`.

mod build;
mod serve;
mod site;

pub use build::BuildSection;
pub use serve::ServeSection;
pub use site::SiteSection;
