pub mod controller;
pub mod memory;
pub mod web;
