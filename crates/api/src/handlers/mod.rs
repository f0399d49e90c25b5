//! Management request handlers

pub mod auth_priority;
