// easing/mod.rs
//
// Named easing curves and the dispatch from name to formula.
// Pure math, no state: safe to call from anywhere, any number of times.

pub mod curves;

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EasingError;
use curves::*;

/// Easing curve selector.
///
/// Declaration order is the stable byte tag (see [`EaseType::ordinal`]);
/// stored selections depend on it, so new variants go at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum EaseType {
    InCirc,
    OutCirc,
    InOutCirc,
    OutInCirc,

    InCubic,
    OutCubic,
    InOutCubic,
    OutInCubic,

    /// Pulls back below 0 before moving.
    InBack,
    /// Overshoots past 1 before settling.
    OutBack,
    InOutBack,
    OutInBack,

    InQuint,
    OutQuint,
    InOutQuint,
    OutInQuint,

    InExpo,
    OutExpo,
    InOutExpo,
    OutInExpo,

    InSine,
    OutSine,
    InOutSine,
    OutInSine,

    InBounce,
    /// Bouncy finish.
    OutBounce,
    InOutBounce,
    OutInBounce,

    InQuad,
    OutQuad,
    InOutQuad,
    OutInQuad,

    InQuart,
    OutQuart,
    InOutQuart,
    OutInQuart,

    InElastic,
    /// Elastic spring.
    OutElastic,
    InOutElastic,
    OutInElastic,

    /// Constant velocity (no easing).
    #[default]
    Linear,
}

impl EaseType {
    /// Every variant, in tag order.
    pub const ALL: [EaseType; 41] = [
        EaseType::InCirc,
        EaseType::OutCirc,
        EaseType::InOutCirc,
        EaseType::OutInCirc,
        EaseType::InCubic,
        EaseType::OutCubic,
        EaseType::InOutCubic,
        EaseType::OutInCubic,
        EaseType::InBack,
        EaseType::OutBack,
        EaseType::InOutBack,
        EaseType::OutInBack,
        EaseType::InQuint,
        EaseType::OutQuint,
        EaseType::InOutQuint,
        EaseType::OutInQuint,
        EaseType::InExpo,
        EaseType::OutExpo,
        EaseType::InOutExpo,
        EaseType::OutInExpo,
        EaseType::InSine,
        EaseType::OutSine,
        EaseType::InOutSine,
        EaseType::OutInSine,
        EaseType::InBounce,
        EaseType::OutBounce,
        EaseType::InOutBounce,
        EaseType::OutInBounce,
        EaseType::InQuad,
        EaseType::OutQuad,
        EaseType::InOutQuad,
        EaseType::OutInQuad,
        EaseType::InQuart,
        EaseType::OutQuart,
        EaseType::InOutQuart,
        EaseType::OutInQuart,
        EaseType::InElastic,
        EaseType::OutElastic,
        EaseType::InOutElastic,
        EaseType::OutInElastic,
        EaseType::Linear,
    ];

    /// Apply the curve to `t`.
    ///
    /// `t` is normally in [0, 1] but is never clamped: values outside that range
    /// extrapolate along the formula, and NaN/infinity pass through the
    /// arithmetic. Back and Elastic leave [0, 1] even for in-range input.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            EaseType::InCirc => in_circ(t),
            EaseType::OutCirc => out_circ(t),
            EaseType::InOutCirc => in_out(in_circ, out_circ, t),
            EaseType::OutInCirc => out_in(out_circ, in_circ, t),

            EaseType::InCubic => in_cubic(t),
            EaseType::OutCubic => out_cubic(t),
            EaseType::InOutCubic => in_out(in_cubic, out_cubic, t),
            EaseType::OutInCubic => out_in(out_cubic, in_cubic, t),

            EaseType::InBack => in_back(t),
            EaseType::OutBack => out_back(t),
            EaseType::InOutBack => in_out(in_back, out_back, t),
            EaseType::OutInBack => out_in(out_back, in_back, t),

            EaseType::InQuint => in_quint(t),
            EaseType::OutQuint => out_quint(t),
            EaseType::InOutQuint => in_out(in_quint, out_quint, t),
            EaseType::OutInQuint => out_in(out_quint, in_quint, t),

            EaseType::InExpo => in_expo(t),
            EaseType::OutExpo => out_expo(t),
            EaseType::InOutExpo => in_out(in_expo, out_expo, t),
            EaseType::OutInExpo => out_in(out_expo, in_expo, t),

            EaseType::InSine => in_sine(t),
            EaseType::OutSine => out_sine(t),
            EaseType::InOutSine => in_out(in_sine, out_sine, t),
            EaseType::OutInSine => out_in(out_sine, in_sine, t),

            EaseType::InBounce => in_bounce(t),
            EaseType::OutBounce => out_bounce(t),
            EaseType::InOutBounce => in_out(in_bounce, out_bounce, t),
            EaseType::OutInBounce => out_in(out_bounce, in_bounce, t),

            // Quad, Quart and Elastic have their own InOut closed forms.
            EaseType::InQuad => in_quad(t),
            EaseType::OutQuad => out_quad(t),
            EaseType::InOutQuad => in_out_quad(t),
            EaseType::OutInQuad => out_in(out_quad, in_quad, t),

            EaseType::InQuart => in_quart(t),
            EaseType::OutQuart => out_quart(t),
            EaseType::InOutQuart => in_out_quart(t),
            EaseType::OutInQuart => out_in(out_quart, in_quart, t),

            EaseType::InElastic => in_elastic(t),
            EaseType::OutElastic => out_elastic(t),
            EaseType::InOutElastic => in_out_elastic(t),
            EaseType::OutInElastic => out_in(out_elastic, in_elastic, t),

            EaseType::Linear => t,
        }
    }

    /// Stable byte tag: declaration index, `InCirc` = 0 through `Linear` = 40.
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a variant by its byte tag.
    pub fn from_ordinal(tag: u8) -> Option<EaseType> {
        Self::ALL.get(tag as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            EaseType::InCirc => "InCirc",
            EaseType::OutCirc => "OutCirc",
            EaseType::InOutCirc => "InOutCirc",
            EaseType::OutInCirc => "OutInCirc",
            EaseType::InCubic => "InCubic",
            EaseType::OutCubic => "OutCubic",
            EaseType::InOutCubic => "InOutCubic",
            EaseType::OutInCubic => "OutInCubic",
            EaseType::InBack => "InBack",
            EaseType::OutBack => "OutBack",
            EaseType::InOutBack => "InOutBack",
            EaseType::OutInBack => "OutInBack",
            EaseType::InQuint => "InQuint",
            EaseType::OutQuint => "OutQuint",
            EaseType::InOutQuint => "InOutQuint",
            EaseType::OutInQuint => "OutInQuint",
            EaseType::InExpo => "InExpo",
            EaseType::OutExpo => "OutExpo",
            EaseType::InOutExpo => "InOutExpo",
            EaseType::OutInExpo => "OutInExpo",
            EaseType::InSine => "InSine",
            EaseType::OutSine => "OutSine",
            EaseType::InOutSine => "InOutSine",
            EaseType::OutInSine => "OutInSine",
            EaseType::InBounce => "InBounce",
            EaseType::OutBounce => "OutBounce",
            EaseType::InOutBounce => "InOutBounce",
            EaseType::OutInBounce => "OutInBounce",
            EaseType::InQuad => "InQuad",
            EaseType::OutQuad => "OutQuad",
            EaseType::InOutQuad => "InOutQuad",
            EaseType::OutInQuad => "OutInQuad",
            EaseType::InQuart => "InQuart",
            EaseType::OutQuart => "OutQuart",
            EaseType::InOutQuart => "InOutQuart",
            EaseType::OutInQuart => "OutInQuart",
            EaseType::InElastic => "InElastic",
            EaseType::OutElastic => "OutElastic",
            EaseType::InOutElastic => "InOutElastic",
            EaseType::OutInElastic => "OutInElastic",
            EaseType::Linear => "Linear",
        }
    }
}

impl fmt::Display for EaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EaseType {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ease| ease.name() == s)
            .ok_or_else(|| EasingError::UnknownEaseType(s.to_string()))
    }
}

/// Reads a variant name or byte tag. Anything unrecognized loads as `Linear`
/// (identity), so selections saved by a newer build still load.
impl<'de> Deserialize<'de> for EaseType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EaseTypeVisitor;

        impl<'de> Visitor<'de> for EaseTypeVisitor {
            type Value = EaseType;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ease type name or byte tag")
            }

            fn visit_str<E: de::Error>(self, name: &str) -> Result<EaseType, E> {
                Ok(name.parse().unwrap_or_else(|_| {
                    log::warn!("unknown ease type {:?}, using Linear", name);
                    EaseType::Linear
                }))
            }

            fn visit_u64<E: de::Error>(self, tag: u64) -> Result<EaseType, E> {
                let known = u8::try_from(tag).ok().and_then(EaseType::from_ordinal);
                Ok(known.unwrap_or_else(|| {
                    log::warn!("unknown ease type tag {}, using Linear", tag);
                    EaseType::Linear
                }))
            }

            fn visit_i64<E: de::Error>(self, tag: i64) -> Result<EaseType, E> {
                match u64::try_from(tag) {
                    Ok(tag) => self.visit_u64(tag),
                    Err(_) => {
                        log::warn!("unknown ease type tag {}, using Linear", tag);
                        Ok(EaseType::Linear)
                    }
                }
            }
        }

        deserializer.deserialize_any(EaseTypeVisitor)
    }
}

/// Eased progress for `progress` under `ease`.
#[inline]
pub fn evaluate(progress: f32, ease: EaseType) -> f32 {
    ease.apply(progress)
}

/// Like [`evaluate`], for a raw byte tag read from storage.
///
/// Tags past the last known variant return `progress` unchanged, so a
/// selection saved by a newer build still animates (linearly).
#[inline]
pub fn evaluate_ordinal(progress: f32, tag: u8) -> f32 {
    match EaseType::from_ordinal(tag) {
        Some(ease) => ease.apply(progress),
        None => progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    /// Families whose In and Out forms never decrease on [0, 1].
    const MONOTONIC: [(EaseType, EaseType); 7] = [
        (EaseType::InCirc, EaseType::OutCirc),
        (EaseType::InCubic, EaseType::OutCubic),
        (EaseType::InQuint, EaseType::OutQuint),
        (EaseType::InSine, EaseType::OutSine),
        (EaseType::InQuad, EaseType::OutQuad),
        (EaseType::InQuart, EaseType::OutQuart),
        (EaseType::InExpo, EaseType::OutExpo),
    ];

    #[test]
    fn endpoints_hold_for_every_variant() {
        for ease in EaseType::ALL {
            let start = evaluate(0.0, ease);
            let end = evaluate(1.0, ease);
            assert!(start.abs() < EPS, "{ease}: f(0) = {start}");
            assert!((end - 1.0).abs() < EPS, "{ease}: f(1) = {end}");
        }
    }

    #[test]
    fn linear_is_identity_even_out_of_range() {
        for t in [-3.5, -0.25, 0.0, 0.3, 1.0, 1.75, 42.0] {
            assert_eq!(evaluate(t, EaseType::Linear), t);
        }
    }

    #[test]
    fn combinator_in_out_variants_hit_half_at_midpoint() {
        let generic = [
            EaseType::InOutCirc,
            EaseType::InOutCubic,
            EaseType::InOutBack,
            EaseType::InOutQuint,
            EaseType::InOutExpo,
            EaseType::InOutSine,
            EaseType::InOutBounce,
        ];
        for ease in generic {
            let mid = evaluate(0.5, ease);
            assert!((mid - 0.5).abs() < EPS, "{ease}: f(0.5) = {mid}");
        }
        assert_eq!(evaluate(0.5, EaseType::InOutCubic), 0.5);
        assert_eq!(evaluate(0.5, EaseType::InOutSine), 0.5);
    }

    #[test]
    fn in_and_out_are_monotonic_where_expected() {
        for (in_ease, out_ease) in MONOTONIC {
            for ease in [in_ease, out_ease] {
                let mut prev = evaluate(0.0, ease);
                for i in 1..=200 {
                    let t = i as f32 / 200.0;
                    let v = evaluate(t, ease);
                    assert!(v >= prev - 1e-6, "{ease} decreased at t={t}: {prev} -> {v}");
                    prev = v;
                }
            }
        }
    }

    #[test]
    fn quad_midpoints() {
        assert_eq!(evaluate(0.5, EaseType::InQuad), 0.25);
        assert_eq!(evaluate(0.5, EaseType::OutQuad), 0.75);
    }

    #[test]
    fn expo_endpoints_are_exact() {
        assert_eq!(evaluate(0.0, EaseType::InExpo), 0.0);
        assert_eq!(evaluate(1.0, EaseType::OutExpo), 1.0);
    }

    #[test]
    fn out_bounce_segments() {
        let b = 1.0_f32 / 2.75;
        let below = f32::from_bits(b.to_bits() - 1);
        assert_eq!(evaluate(below, EaseType::OutBounce), 7.5625 * below * below);
        for b in [1.0_f32 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let lo = evaluate(b - 1e-7, EaseType::OutBounce);
            let hi = evaluate(b + 1e-7, EaseType::OutBounce);
            assert!((lo - hi).abs() < EPS, "discontinuity at {b}: {lo} vs {hi}");
        }
    }

    #[test]
    fn unknown_tag_is_identity() {
        assert_eq!(EaseType::from_ordinal(41), None);
        for t in [-1.0, 0.0, 0.37, 1.0, 2.5] {
            assert_eq!(evaluate_ordinal(t, 41), t);
            assert_eq!(evaluate_ordinal(t, u8::MAX), t);
        }
    }

    #[test]
    fn known_tags_match_variants() {
        for ease in EaseType::ALL {
            for t in [-0.5, 0.0, 0.2, 0.5, 0.77, 1.0, 1.3] {
                let by_tag = evaluate_ordinal(t, ease.ordinal());
                let direct = evaluate(t, ease);
                assert!(
                    by_tag.to_bits() == direct.to_bits() || (by_tag.is_nan() && direct.is_nan()),
                    "{ease} at {t}: tag path {by_tag}, direct {direct}"
                );
            }
        }
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        assert_eq!(EaseType::InCirc.ordinal(), 0);
        assert_eq!(EaseType::OutInCubic.ordinal(), 7);
        assert_eq!(EaseType::InQuad.ordinal(), 28);
        assert_eq!(EaseType::Linear.ordinal(), 40);
        for (i, ease) in EaseType::ALL.iter().enumerate() {
            assert_eq!(ease.ordinal() as usize, i);
            assert_eq!(EaseType::from_ordinal(i as u8), Some(*ease));
        }
    }

    #[test]
    fn names_parse_back() {
        for ease in EaseType::ALL {
            assert_eq!(ease.to_string().parse::<EaseType>().unwrap(), ease);
        }
        let err = "InOutWobble".parse::<EaseType>().unwrap_err();
        assert!(matches!(err, EasingError::UnknownEaseType(ref s) if s == "InOutWobble"));
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&EaseType::InOutElastic).unwrap();
        assert_eq!(json, "\"InOutElastic\"");
        let ease: EaseType = serde_json::from_str("\"OutInBounce\"").unwrap();
        assert_eq!(ease, EaseType::OutInBounce);
    }

    #[test]
    fn unknown_names_and_tags_load_as_linear() {
        let ease: EaseType = serde_json::from_str("\"InOutWobble\"").unwrap();
        assert_eq!(ease, EaseType::Linear);
        let ease: EaseType = serde_json::from_str("200").unwrap();
        assert_eq!(ease, EaseType::Linear);
        let ease: EaseType = serde_json::from_str("-3").unwrap();
        assert_eq!(ease, EaseType::Linear);
    }

    #[test]
    fn byte_tags_deserialize() {
        let ease: EaseType = serde_json::from_str("9").unwrap();
        assert_eq!(ease, EaseType::OutBack);
        let ease: EaseType = serde_json::from_str("40").unwrap();
        assert_eq!(ease, EaseType::Linear);
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(EaseType::default(), EaseType::Linear);
    }

    #[test]
    fn overshoot_is_not_clamped() {
        assert!(evaluate(0.2, EaseType::InBack) < 0.0);
        assert!(evaluate(0.8, EaseType::OutBack) > 1.0);
        assert!(evaluate(1.5, EaseType::InCubic) > 3.0);
        assert!(evaluate(1.2, EaseType::InCirc).is_nan());
    }
}
