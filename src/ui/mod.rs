pub mod mainapp;
pub mod panels;
