//! Library components of the exam builder CLI.

pub mod exam_file;
pub mod logging;
