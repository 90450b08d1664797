pub mod category;
pub mod inputs;
pub mod result;
pub mod stage;
