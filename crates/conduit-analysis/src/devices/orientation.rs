//! Orientation inference from naming.

use conduit_core::types::Orientation;

/// Keywords checked in order; more specific mountings come before pendent so
/// "Recessed Pendent" reads as recessed.
const KEYWORDS: &[(&str, Orientation)] = &[
    ("sidewall", Orientation::Sidewall),
    ("side wall", Orientation::Sidewall),
    ("upright", Orientation::Upright),
    ("concealed", Orientation::Concealed),
    ("recessed", Orientation::Recessed),
    ("pendent", Orientation::Pendent),
    ("pendant", Orientation::Pendent),
];

/// Infer the orientation from an explicit parameter value, then from the
/// element name. Defaults to pendent.
pub fn infer_orientation(explicit: Option<&str>, name: &str) -> Orientation {
    explicit
        .and_then(match_keyword)
        .or_else(|| match_keyword(name))
        .unwrap_or_default()
}

fn match_keyword(text: &str) -> Option<Orientation> {
    let lower = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, orientation)| orientation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_keywords() {
        assert_eq!(infer_orientation(None, "Tyco TY-B Upright 5.6K"), Orientation::Upright);
        assert_eq!(infer_orientation(None, "HSW Side Wall"), Orientation::Sidewall);
        assert_eq!(infer_orientation(None, "Recessed Pendent"), Orientation::Recessed);
        assert_eq!(infer_orientation(None, "CONCEALED"), Orientation::Concealed);
    }

    #[test]
    fn defaults_to_pendent() {
        assert_eq!(infer_orientation(None, "Sprinkler Head"), Orientation::Pendent);
        assert_eq!(infer_orientation(Some("n/a"), ""), Orientation::Pendent);
    }

    #[test]
    fn explicit_value_wins_over_name() {
        assert_eq!(infer_orientation(Some("Upright"), "Pendent head"), Orientation::Upright);
    }
}
