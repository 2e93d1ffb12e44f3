pub mod sgf_packer;

#[doc(inline)]
pub use sgf_packer::SGFPacker;
