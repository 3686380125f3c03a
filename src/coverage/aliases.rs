/// Known spellings of an airline's program or currency. A route whose airline
/// contains `airline` also accepts card partners containing any of `aliases`.
#[derive(Debug, Clone, Copy)]
pub struct AliasGroup {
    pub airline: &'static str,
    pub aliases: &'static [&'static str],
}

pub const AIRLINE_ALIASES: &[AliasGroup] = &[
    AliasGroup {
        airline: "air france",
        aliases: &["air france", "flying blue"],
    },
    AliasGroup {
        airline: "british airways",
        aliases: &["british airways", "avios"],
    },
    AliasGroup {
        airline: "singapore",
        aliases: &["singapore", "krisflyer"],
    },
    AliasGroup {
        airline: "turkish",
        aliases: &["turkish", "miles&smiles"],
    },
    AliasGroup {
        airline: "delta",
        aliases: &["delta", "skymiles"],
    },
    AliasGroup {
        airline: "united",
        aliases: &["united", "mileageplus"],
    },
];

/// Case-insensitive containment in either direction. Blank names never match.
pub fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

pub fn alias_match(route_airline: &str, partner: &str) -> bool {
    let airline = route_airline.trim().to_lowercase();
    let partner = partner.trim().to_lowercase();
    if airline.is_empty() || partner.is_empty() {
        return false;
    }
    AIRLINE_ALIASES
        .iter()
        .filter(|group| airline.contains(group.airline))
        .any(|group| group.aliases.iter().any(|alias| partner.contains(alias)))
}

/// Matching rule for card transfer partners: plain containment or a known alias.
pub fn card_partner_matches(route_airline: &str, partner: &str) -> bool {
    names_overlap(partner, route_airline) || alias_match(route_airline, partner)
}

#[cfg(test)]
mod tests {
    use super::{alias_match, card_partner_matches, names_overlap, AIRLINE_ALIASES};

    #[test]
    fn overlap_is_case_insensitive_and_bidirectional() {
        assert!(names_overlap("united", "United Airlines"));
        assert!(names_overlap("Air France-KLM", "AIR FRANCE"));
        assert!(!names_overlap("Lufthansa", "Air France"));
    }

    #[test]
    fn blank_names_do_not_match_everything() {
        assert!(!names_overlap("", "Air France"));
        assert!(!names_overlap("Air France", "   "));
        assert!(!alias_match("", "Flying Blue"));
    }

    #[test]
    fn program_currencies_match_their_airline() {
        assert!(alias_match("Air France", "Flying Blue"));
        assert!(alias_match("British Airways", "Avios"));
        assert!(alias_match("Singapore Airlines", "KrisFlyer"));
        assert!(alias_match("Turkish Airlines", "Miles&Smiles"));
        assert!(alias_match("Delta Air Lines", "SkyMiles"));
        assert!(alias_match("United Airlines", "MileagePlus"));
    }

    #[test]
    fn aliases_do_not_cross_airlines() {
        assert!(!alias_match("Air France", "Avios"));
        assert!(!alias_match("Qatar Airways", "Avios"));
        assert!(!card_partner_matches("Turkish Airlines", "Flying Blue"));
    }

    #[test]
    fn every_group_accepts_its_own_name() {
        for group in AIRLINE_ALIASES {
            assert!(alias_match(group.airline, group.airline));
        }
    }
}
