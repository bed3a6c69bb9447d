pub mod auth;
pub mod cafes;
pub mod dashboard;
pub mod donations;
pub mod events;
pub mod interactions;
pub mod lost_found;
pub mod products;
pub mod rides;
pub mod societies;
pub mod trips;
pub mod users;

pub use auth::AuthClient;
pub use cafes::CafesClient;
pub use dashboard::DashboardClient;
pub use donations::DonationsClient;
pub use events::EventsClient;
pub use interactions::InteractionsClient;
pub use lost_found::LostFoundClient;
pub use products::ProductsClient;
pub use rides::RidesClient;
pub use societies::SocietiesClient;
pub use trips::TripsClient;
pub use users::UsersClient;
