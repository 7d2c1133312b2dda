pub mod components;
pub mod data;
pub mod date_utils;
pub mod icons;
pub mod number_format;
