mod login_dialog;
mod site_header;

pub use login_dialog::LoginDialog;
pub use site_header::SiteHeader;
