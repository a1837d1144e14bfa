//! Length-based strength tiers.
//!
//! Only the requested length matters; character classes play no part.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthColor {
    Weak,
    Medium,
    Strong,
    Maximum,
}

impl StrengthColor {
    /// 24-bit RGB of the tier.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            StrengthColor::Weak => (0xEF, 0x44, 0x44),
            StrengthColor::Medium => (0xF5, 0x9E, 0x0B),
            StrengthColor::Strong => (0x10, 0xB9, 0x81),
            StrengthColor::Maximum => (0x0D, 0x94, 0x88),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthTier {
    pub label: &'static str,
    pub percentage: u8,
    pub color: StrengthColor,
}

pub fn estimate(length: usize) -> StrengthTier {
    match length {
        0..=6 => StrengthTier {
            label: "Good, but we can make it stronger",
            percentage: 25,
            color: StrengthColor::Weak,
        },
        7..=8 => StrengthTier {
            label: "It's just short of great",
            percentage: 50,
            color: StrengthColor::Medium,
        },
        9..=10 => StrengthTier {
            label: "Now that's a strong password!",
            percentage: 75,
            color: StrengthColor::Strong,
        },
        _ => StrengthTier {
            label: "Ultimate password strength reached!",
            percentage: 100,
            color: StrengthColor::Maximum,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(estimate(6).percentage, 25);
        assert_eq!(estimate(6).color, StrengthColor::Weak);
        assert_eq!(estimate(7).percentage, 50);
        assert_eq!(estimate(7).color, StrengthColor::Medium);
        assert_eq!(estimate(8).color, StrengthColor::Medium);
        assert_eq!(estimate(9).color, StrengthColor::Strong);
        assert_eq!(estimate(10).percentage, 75);
        assert_eq!(estimate(10).color, StrengthColor::Strong);
        assert_eq!(estimate(11).percentage, 100);
        assert_eq!(estimate(11).color, StrengthColor::Maximum);
    }

    #[test]
    fn labels() {
        assert_eq!(estimate(4).label, "Good, but we can make it stronger");
        assert_eq!(estimate(8).label, "It's just short of great");
        assert_eq!(estimate(9).label, "Now that's a strong password!");
        assert_eq!(estimate(40).label, "Ultimate password strength reached!");
    }

    #[test]
    fn percentage_never_decreases_with_length() {
        let mut last = 0;
        for length in 0..=64 {
            let p = estimate(length).percentage;
            assert!(p >= last, "dropped at {length}");
            assert!([25, 50, 75, 100].contains(&p));
            last = p;
        }
    }

    #[test]
    fn tier_colors() {
        assert_eq!(StrengthColor::Weak.rgb(), (0xEF, 0x44, 0x44));
        assert_eq!(StrengthColor::Maximum.rgb(), (0x0D, 0x94, 0x88));
    }
}
