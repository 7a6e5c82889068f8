//! Resource API modules.
//!
//! One module per backend resource. Each adds `build_*` methods to
//! `AdminClient` and defines the filter/form types it serializes. Query vs
//! body placement follows the backend endpoint by endpoint, so two
//! similar-looking operations may use different channels.

pub mod announcement;
pub mod bill;
pub mod card;
pub mod customer;
pub mod login;
pub mod order;
pub mod phone;
pub mod project;
pub mod region;
pub mod user;

pub use announcement::AnnouncementForm;
pub use bill::BillQuery;
pub use card::{CardForm, CardQuery};
pub use customer::{CustomerForm, CustomerQuery};
pub use login::LoginForm;
pub use order::OrderQuery;
pub use phone::{PhoneBatch, PhoneForm, PhoneQuery};
pub use project::{ProjectForm, ProjectKeywords, ProjectQuery};
pub use region::RegionForm;
pub use user::UserForm;
