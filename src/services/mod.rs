// Service module exports

pub mod event;
pub mod settings;
