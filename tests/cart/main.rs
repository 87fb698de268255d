mod engine;
mod guest_storage;
mod test_utils;
