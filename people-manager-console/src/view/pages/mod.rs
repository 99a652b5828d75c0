pub mod home;
pub mod people;
pub mod person;
pub mod person_update;
