pub mod country;
pub mod page;
pub mod response;
