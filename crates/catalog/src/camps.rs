use crate::{CatalogEntry, find};

/// Camp value meaning "match with holders from any camp".
pub const ANY_CAMP: &str = "any";

/// The sentinel entry followed by every orientation camp.
pub const CAMPS: &[CatalogEntry] = &[
    CatalogEntry::new(ANY_CAMP, "Any Camp (Global Match)"),
    CatalogEntry::new("abia", "Abia - Umunna"),
    CatalogEntry::new("adamawa", "Adamawa - Damare"),
    CatalogEntry::new("akwa_ibom", "Akwa Ibom - Ikot Itie Udung"),
    CatalogEntry::new("anambra", "Anambra - Umuawulu/Mbaukwu"),
    CatalogEntry::new("bauchi", "Bauchi - Wailo"),
    CatalogEntry::new("bayelsa", "Bayelsa - Kaiama"),
    CatalogEntry::new("benue", "Benue - Wannune"),
    CatalogEntry::new("borno", "Borno - Maiduguri"),
    CatalogEntry::new("cross_river", "Cross River - Obubra"),
    CatalogEntry::new("delta", "Delta - Issele-Uku"),
    CatalogEntry::new("ebonyi", "Ebonyi - Afikpo"),
    CatalogEntry::new("edo", "Edo - Okada"),
    CatalogEntry::new("ekiti", "Ekiti - Ise-Orun"),
    CatalogEntry::new("enugu", "Enugu - Iwo-Awka"),
    CatalogEntry::new("fct", "FCT - Kubwa"),
    CatalogEntry::new("gombe", "Gombe - Amada"),
    CatalogEntry::new("imo", "Imo - Umuguma/Ihiagwa"),
    CatalogEntry::new("jigawa", "Jigawa - Fanisau"),
    CatalogEntry::new("kaduna", "Kaduna - Kaduna South"),
    CatalogEntry::new("kano", "Kano - Karaye"),
    CatalogEntry::new("katsina", "Katsina - Mani"),
    CatalogEntry::new("kebbi", "Kebbi - Dakingari"),
    CatalogEntry::new("kogi", "Kogi - Asaya, Kabba"),
    CatalogEntry::new("kwara", "Kwara - Yikpata"),
    CatalogEntry::new("lagos", "Lagos - Iyana-Ipaja"),
    CatalogEntry::new("nasarawa", "Nasarawa - Keffi"),
    CatalogEntry::new("niger", "Niger - Paiko"),
    CatalogEntry::new("ogun", "Ogun - Sagamu"),
    CatalogEntry::new("ondo", "Ondo - Ikare-Akoko"),
    CatalogEntry::new("osun", "Osun - Ede"),
    CatalogEntry::new("oyo", "Oyo - Iseyin"),
    CatalogEntry::new("plateau", "Plateau - Mangu"),
    CatalogEntry::new("rivers", "Rivers - Nonwa-Gbam Tai"),
    CatalogEntry::new("sokoto", "Sokoto - Wamakko"),
    CatalogEntry::new("taraba", "Taraba - Sibre"),
    CatalogEntry::new("yobe", "Yobe - Damaturu"),
    CatalogEntry::new("zamfara", "Zamfara - Tsafe"),
];

/// Whether `camp` names a specific camp (the "any" sentinel does not count).
pub fn is_known_camp(camp: &str) -> bool {
    camp != ANY_CAMP && find(CAMPS, camp).is_some()
}

/// Maps user input onto a stored camp: `"any"` and blank input mean no camp.
pub fn normalize_camp(camp: Option<&str>) -> Option<String> {
    match camp.map(str::trim) {
        None | Some("") | Some(ANY_CAMP) => None,
        Some(code) => Some(code.to_string()),
    }
}

/// Display label for a stored camp; absent camps read as "Any Camp".
pub fn camp_label(camp: Option<&str>) -> &str {
    match camp {
        None | Some("") => "Any Camp",
        Some(code) => find(CAMPS, code).map(|entry| entry.label).unwrap_or(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_not_a_camp() {
        assert_eq!(CAMPS[0].value, ANY_CAMP);
        assert!(!is_known_camp(ANY_CAMP));
        assert!(is_known_camp("lagos"));
        assert!(is_known_camp("kano"));
        assert!(!is_known_camp("atlantis"));
    }

    #[test]
    fn test_normalize_camp() {
        assert_eq!(normalize_camp(None), None);
        assert_eq!(normalize_camp(Some("")), None);
        assert_eq!(normalize_camp(Some("any")), None);
        assert_eq!(normalize_camp(Some(" lagos ")), Some("lagos".to_string()));
    }

    #[test]
    fn test_camp_label() {
        assert_eq!(camp_label(None), "Any Camp");
        assert_eq!(camp_label(Some("fct")), "FCT - Kubwa");
        assert_eq!(camp_label(Some("unknown")), "unknown");
    }
}
