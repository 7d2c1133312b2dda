pub mod clients;
pub mod council;
pub mod documents;
pub mod payments;
pub mod projects;
pub mod team;
