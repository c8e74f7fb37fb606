mod user;
mod view;

pub use user::{Address, Company, Geo, UserRecord};
pub use view::{FetchStatus, SortDirection};
