#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use arctos_reflect as reflect;
pub use arctos_sample as sample;
