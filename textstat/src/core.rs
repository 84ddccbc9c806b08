// src/core.rs
pub mod analysis;
pub mod case;
pub mod ignore;
pub mod scanner;
pub mod summarizer;
