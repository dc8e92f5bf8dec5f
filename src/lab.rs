pub mod notepad;
pub mod text_ops;
