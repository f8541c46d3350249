pub mod employee;
pub mod request;
pub mod skill;
