pub mod name;
pub mod weekly;

pub use name::generate_name_fortune;
pub use weekly::generate_weekly_fortune;
