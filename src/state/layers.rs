//! Basemap and auxiliary tile-layer visibility.

/// Most auxiliary layers that can be bound to Ctrl+1..Ctrl+8.
pub const MAX_AUXILIARY_LAYERS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basemap {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryLayer {
    pub url: String,
    pub visible: bool,
}

/// A visibility change the renderer has to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerChange {
    Basemap(Basemap),
    /// `slot` is the 1-based key the layer is bound to.
    Auxiliary { slot: u8, visible: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSet {
    basemap: Basemap,
    auxiliary: Vec<AuxiliaryLayer>,
}

impl LayerSet {
    /// Auxiliary layers beyond the eighth are dropped; they have no key.
    pub fn new(auxiliary_urls: &[String]) -> Self {
        let auxiliary = auxiliary_urls
            .iter()
            .take(MAX_AUXILIARY_LAYERS)
            .map(|url| AuxiliaryLayer {
                url: url.clone(),
                visible: false,
            })
            .collect();
        Self {
            basemap: Basemap::Primary,
            auxiliary,
        }
    }

    pub fn basemap(&self) -> Basemap {
        self.basemap
    }

    pub fn auxiliary(&self) -> &[AuxiliaryLayer] {
        &self.auxiliary
    }

    /// Exactly one basemap is visible; showing one hides the other.
    pub fn show_basemap(&mut self, basemap: Basemap) -> LayerChange {
        self.basemap = basemap;
        LayerChange::Basemap(basemap)
    }

    /// Flip an auxiliary layer. Unbound slots are ignored.
    pub fn toggle_auxiliary(&mut self, slot: u8) -> Option<LayerChange> {
        let index = usize::from(slot).checked_sub(1)?;
        let layer = self.auxiliary.get_mut(index)?;
        layer.visible = !layer.visible;
        Some(LayerChange::Auxiliary {
            slot,
            visible: layer.visible,
        })
    }
}
