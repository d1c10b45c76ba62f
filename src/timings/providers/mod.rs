pub mod aladhan;

pub use aladhan::AladhanProvider;
