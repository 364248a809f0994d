pub mod navigation;
pub mod storage;
