//! [`Presenter`](crate::port::Presenter) implementations.

mod json;
mod text;

pub use json::JsonPresenter;
pub use text::TextPresenter;
