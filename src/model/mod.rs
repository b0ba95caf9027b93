pub mod talk;
