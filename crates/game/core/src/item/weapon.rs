use core::fmt;
use core::ops::Add;

/// A weapon. Two weapons can be forged into one with `+`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
    pub weight: u32,
}

impl Weapon {
    /// Name given to weapons produced by merging two others.
    pub const MERGED_NAME: &'static str = "new";

    pub fn new(name: impl Into<String>, damage: u32, weight: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            weight,
        }
    }

    /// True when this weapon hits strictly harder than `other`.
    pub fn outclasses(&self, other: &Weapon) -> bool {
        self.damage > other.damage
    }
}

impl Add for Weapon {
    type Output = Weapon;

    fn add(self, other: Weapon) -> Weapon {
        &self + &other
    }
}

impl Add for &Weapon {
    type Output = Weapon;

    fn add(self, other: &Weapon) -> Weapon {
        Weapon {
            name: Weapon::MERGED_NAME.to_string(),
            damage: self.damage.saturating_add(other.damage),
            weight: self.weight.saturating_add(other.weight),
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weapon: {}, Damage: {}", self.name, self.damage)
    }
}
