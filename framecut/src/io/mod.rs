/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Plain text and CSV renditions of a quotation
pub mod text;

/// All logic for drawing cutting plans as SVG
pub mod svg;
