pub mod check;
pub mod pages;
