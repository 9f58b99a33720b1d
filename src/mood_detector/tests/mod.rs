mod core_test;
mod inference_test;
