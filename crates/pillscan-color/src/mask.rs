//! Binary mask construction

use pillscan_core::{ClassGrid, Mask};

/// White where a pixel was classified, black where it was not
pub fn binary_mask(classes: &ClassGrid) -> Mask {
    classes.map(Option::is_some)
}
