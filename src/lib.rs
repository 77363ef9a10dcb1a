//! Backend and viewer logic for an ECG strip analyser that asks an external
//! multimodal model for three persona opinions and combines them.

pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
