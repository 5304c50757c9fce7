pub mod cli;
pub mod config;
pub mod host;
pub mod page;
pub mod server;
pub mod share;
pub mod toast;
pub mod utils;
pub mod widget;

pub use host::{ShareHost, SystemHost};
pub use page::{PageContext, ShareText};
pub use share::{Platform, ShareLink, WindowFeatures};
pub use toast::{Toast, ToastState};
pub use widget::ShareWidget;
