//! Prompt Studio - guided prompt builder
//!
//! A step-by-step wizard collects structured answers for a text or image
//! request, compiles them into a prompt tuned for the chosen AI target,
//! and optionally runs it through a generative model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
