//! Use cases

pub mod ask_question;
