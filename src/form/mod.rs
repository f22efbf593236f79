pub mod contact;
pub mod draft;
