//! Domain models for the admin API.

pub mod access_log;
pub mod admin_user;
pub mod announcement;
pub mod category;
pub mod order;
pub mod session;
pub mod shop_account;
pub mod user;

pub use access_log::AccessLog;
pub use admin_user::AdminUser;
pub use announcement::Announcement;
pub use category::Category;
pub use order::Order;
pub use session::{AdminSession, CurrentAdmin};
pub use shop_account::ShopAccount;
pub use user::User;
