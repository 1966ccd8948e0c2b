//! Attendance classification and payroll computation engine for Philippine
//! labor rules.
//!
//! This crate converts raw time-clock activity for one employee and one
//! bi-monthly pay period into a classified per-day attendance sheet and a
//! monetary pay breakdown (basic salary, holiday pay, rest-day pay, night
//! differential and overtime), applying different rule families per employee
//! classification.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
