bitflags::bitflags! {
    /// A set of the 32 collision layers a query may detect.
    ///
    /// Bit `n` selects the primitives placed on layer `n`.
    #[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        /// Selects no layer at all.
        const NONE = 0;
        /// Selects every layer.
        const ALL = u32::MAX;
    }
}

impl LayerMask {
    /// The mask selecting only the layer `layer`.
    ///
    /// Layers outside of `0..32` select nothing.
    #[inline]
    pub fn layer(layer: u32) -> Self {
        Self::from_bits_retain(1u32.checked_shl(layer).unwrap_or(0))
    }

    /// Does this mask select the layer `layer`?
    #[inline]
    pub fn contains_layer(self, layer: u32) -> bool {
        self.intersects(Self::layer(layer))
    }

    /// This mask extended with the layer `layer`.
    #[inline]
    pub fn with_layer(self, layer: u32) -> Self {
        self | Self::layer(layer)
    }
}
