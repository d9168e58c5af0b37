use serde::Serialize;

use crate::{CatalogEntry, find};

/// Every item type that can be posted on a swap request.
pub const ITEM_TYPES: &[CatalogEntry] = &[
    CatalogEntry::new("khaki_jacket", "Khaki Jacket"),
    CatalogEntry::new("khaki_trouser", "Khaki Trouser"),
    CatalogEntry::new("jungle_boot", "Jungle Boot"),
    CatalogEntry::new("crested_vest", "Crested Vest"),
    CatalogEntry::new("white_shorts", "White Shorts"),
    CatalogEntry::new("white_shirt", "White Shirt"),
    CatalogEntry::new("belt", "Belt"),
    CatalogEntry::new("socks", "Socks"),
    CatalogEntry::new("face_cap", "Face Cap"),
];

/// Letter sizes used by every item that is not footwear.
pub const CLOTHING_SIZES: &[CatalogEntry] = &[
    CatalogEntry::new("XS", "XS (Extra Small)"),
    CatalogEntry::new("S", "S (Small)"),
    CatalogEntry::new("M", "M (Medium)"),
    CatalogEntry::new("L", "L (Large)"),
    CatalogEntry::new("XL", "XL (Extra Large)"),
    CatalogEntry::new("XXL", "XXL (Double XL)"),
    CatalogEntry::new("XXXL", "XXXL (Triple XL)"),
];

/// EU numeric sizes used by boot items.
pub const BOOT_SIZES: &[CatalogEntry] = &[
    CatalogEntry::new("38", "38 (EU) / 5 (UK)"),
    CatalogEntry::new("39", "39 (EU) / 6 (UK)"),
    CatalogEntry::new("40", "40 (EU) / 6.5 (UK)"),
    CatalogEntry::new("41", "41 (EU) / 7 (UK)"),
    CatalogEntry::new("42", "42 (EU) / 8 (UK)"),
    CatalogEntry::new("43", "43 (EU) / 9 (UK)"),
    CatalogEntry::new("44", "44 (EU) / 9.5 (UK)"),
    CatalogEntry::new("45", "45 (EU) / 10 (UK)"),
    CatalogEntry::new("46", "46 (EU) / 11 (UK)"),
    CatalogEntry::new("47", "47 (EU) / 12 (UK)"),
];

/// Item types measured in boot sizes.
pub const BOOT_ITEMS: &[&str] = &["jungle_boot"];

/// The size domain an item type draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeDomain {
    /// Numeric EU boot sizes
    Boot,
    /// XS through XXXL
    Clothing,
}

impl SizeDomain {
    /// All sizes in this domain, smallest first.
    pub fn sizes(self) -> &'static [CatalogEntry] {
        match self {
            SizeDomain::Boot => BOOT_SIZES,
            SizeDomain::Clothing => CLOTHING_SIZES,
        }
    }

    /// Whether `size` is a member of this domain.
    pub fn contains(self, size: &str) -> bool {
        find(self.sizes(), size).is_some()
    }
}

/// Whether `item_type` is in the item catalog.
pub fn is_known_item(item_type: &str) -> bool {
    find(ITEM_TYPES, item_type).is_some()
}

/// Returns the size domain for a known item type, or `None` for unknown items.
pub fn size_domain_for(item_type: &str) -> Option<SizeDomain> {
    if !is_known_item(item_type) {
        return None;
    }

    if BOOT_ITEMS.contains(&item_type) {
        Some(SizeDomain::Boot)
    } else {
        Some(SizeDomain::Clothing)
    }
}

/// Sizes selectable for `item_type`; empty for unknown items.
pub fn sizes_for_item(item_type: &str) -> &'static [CatalogEntry] {
    size_domain_for(item_type)
        .map(SizeDomain::sizes)
        .unwrap_or(&[])
}

/// Display label for an item type, falling back to the raw code.
pub fn item_label(item_type: &str) -> &str {
    find(ITEM_TYPES, item_type)
        .map(|entry| entry.label)
        .unwrap_or(item_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_items_use_boot_sizes() {
        assert_eq!(size_domain_for("jungle_boot"), Some(SizeDomain::Boot));
        assert_eq!(sizes_for_item("jungle_boot").len(), 10);
        assert!(SizeDomain::Boot.contains("40"));
        assert!(!SizeDomain::Boot.contains("XL"));
    }

    #[test]
    fn test_other_items_use_letter_sizes() {
        for item in ITEM_TYPES.iter().filter(|i| i.value != "jungle_boot") {
            assert_eq!(size_domain_for(item.value), Some(SizeDomain::Clothing));
            assert_eq!(sizes_for_item(item.value).len(), 7);
        }
        assert!(!SizeDomain::Clothing.contains("42"));
    }

    #[test]
    fn test_unknown_item() {
        assert!(!is_known_item("helmet"));
        assert_eq!(size_domain_for("helmet"), None);
        assert!(sizes_for_item("helmet").is_empty());
        assert_eq!(item_label("helmet"), "helmet");
        assert_eq!(item_label("crested_vest"), "Crested Vest");
    }

    #[test]
    fn test_entries_serialize_as_value_label() {
        let json = serde_json::to_value(ITEM_TYPES[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "value": "khaki_jacket", "label": "Khaki Jacket" })
        );
    }
}
