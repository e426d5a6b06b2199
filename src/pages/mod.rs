pub mod civil_home;
pub mod confirmation;
pub mod home;
pub mod login;
pub mod notifications;
pub mod police_home;
pub mod register;
pub mod vehicle_info;
pub mod violation_entry;

pub use civil_home::*;
pub use confirmation::*;
pub use home::*;
pub use login::*;
pub use notifications::*;
pub use police_home::*;
pub use register::*;
pub use vehicle_info::*;
pub use violation_entry::*;
