mod scroll_reveal;
mod site_footer;
mod site_header;

pub use scroll_reveal::use_scroll_reveal;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
