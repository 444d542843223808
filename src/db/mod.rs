pub mod admins;
pub mod submissions;
