pub mod cafe;
pub mod dashboard;
pub mod donation;
pub mod event;
pub mod interaction;
pub mod lost_found;
pub mod product;
pub mod ride;
pub mod society;
pub mod trip;
pub mod user;

pub use cafe::*;
pub use dashboard::*;
pub use donation::*;
pub use event::*;
pub use interaction::*;
pub use lost_found::*;
pub use product::*;
pub use ride::*;
pub use society::*;
pub use trip::*;
pub use user::*;
