//! Property testing support via proptest.
//!
//! This module provides an [`Arbitrary`] implementation for [`Color`],
//! enabling property-based testing with the [`proptest`] crate.

use proptest::prelude::*;

use crate::Color;

/// Generates opaque colors and translucent colors with an opacity in `[0, 1]`.
impl Arbitrary for Color {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Self::rgb(r, g, b)),
            (any::<u8>(), any::<u8>(), any::<u8>(), 0.0..=1.0f64)
                .prop_map(|(r, g, b, a)| Self::rgba(r, g, b, a)),
        ]
        .boxed()
    }
}
