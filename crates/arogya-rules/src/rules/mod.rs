pub mod cancer;
pub mod cardiometabolic;
pub mod preventive;
pub mod respiratory;
