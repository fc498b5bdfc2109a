//! # Model IO
//!
//! Trained models are persisted as a single JSON document;
//! see [`ModelDocument`] for the layout.

mod json_model;
#[doc(inline)]
pub use json_model::{
    ModelDocument,
    load_model_path,
    read_model,
    save_model_path,
    write_model,
};
