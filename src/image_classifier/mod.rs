pub mod impl_fake;
#[cfg(feature = "tract")]
pub mod impl_tract_onnx;
pub mod inference;
pub mod interface;
pub mod preprocess;
