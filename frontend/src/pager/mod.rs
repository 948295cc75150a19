pub mod controller;
pub mod dom;
pub mod easing;
pub mod engine;
pub mod hooks;
pub mod layout;
pub mod smooth;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::ModalKind;
pub use hooks::{use_pager, UsePager};
pub use layout::Page;
