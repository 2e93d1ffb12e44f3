mod bars_to_svg;
mod svg_util;

#[doc(inline)]
pub use bars_to_svg::group_to_svg;

#[doc(inline)]
pub use svg_util::Color;
#[doc(inline)]
pub use svg_util::SvgBarTheme;
#[doc(inline)]
pub use svg_util::SvgDrawOptions;
