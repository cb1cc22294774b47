use std::fmt;

use gachaduel_data::{
    Attribute,
    AttributeChart,
    Difficulty,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::Fraction;

/// The attribute matchup behind a damage calculation.
///
/// Doubles as the "advantage note" reported alongside damage, for the
/// presentation layer and the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Advantage {
    /// Attacker and defender attributes do not interact.
    Neutral,
    /// Attacker is strong against the defender.
    Strong,
    /// Attacker is weak against the defender.
    Weak,
    /// Attacker is Dark, which bypasses the chart and always hits hard.
    Dark,
}

impl Advantage {
    fn multiplier(&self) -> Fraction {
        match self {
            Self::Neutral => Fraction::whole(1),
            Self::Strong => Fraction::new(3, 2),
            Self::Weak => Fraction::new(1, 2),
            Self::Dark => Fraction::whole(2),
        }
    }
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "neutral"),
            Self::Strong => write!(f, "strong"),
            Self::Weak => write!(f, "weak"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Input for a single damage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageInput {
    /// The attacker's attack stat.
    pub attack: u64,
    /// The attacker's attribute.
    pub attacker_attribute: Attribute,
    /// The defender's attribute.
    pub defender_attribute: Attribute,
    /// The difficulty of the battle.
    pub difficulty: Difficulty,
    /// Whether the attacker is CPU-controlled.
    ///
    /// The difficulty scalar applies only to CPU attacks.
    pub cpu_attacker: bool,
}

/// The result of a damage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Damage {
    /// The amount of damage dealt. Always at least 1.
    pub value: u64,
    /// The attribute matchup that produced this damage.
    pub advantage: Advantage,
}

fn advantage(chart: &AttributeChart, attacker: Attribute, defender: Attribute) -> Advantage {
    if attacker == Attribute::Dark {
        return Advantage::Dark;
    }
    if chart.strong_against(attacker) == Some(defender) {
        Advantage::Strong
    } else if chart.weak_against(attacker) == Some(defender) {
        Advantage::Weak
    } else {
        Advantage::Neutral
    }
}

fn difficulty_scalar(difficulty: Difficulty) -> Fraction {
    match difficulty {
        Difficulty::Easy => Fraction::new(7, 10),
        Difficulty::Normal => Fraction::whole(1),
        Difficulty::Hard => Fraction::whole(2),
    }
}

/// Computes the damage of a single attack.
///
/// The multiplier starts from the attribute matchup (Dark ×2 flat; strong
/// ×3/2; weak ×1/2; neutral ×1). CPU attackers additionally apply the
/// difficulty scalar (Easy ×7/10, Normal ×1, Hard ×2). The final damage is
/// the attack stat scaled by the combined multiplier, rounded down and
/// clamped to a minimum of 1: an attack never deals zero damage.
///
/// Guard halving is not handled here. The battle engine halves the computed
/// damage when the defender is guarding, since guarding is battle state, not
/// an input to the formula.
pub fn compute_damage(chart: &AttributeChart, input: &DamageInput) -> Damage {
    let advantage = advantage(chart, input.attacker_attribute, input.defender_attribute);
    let mut multiplier = advantage.multiplier();
    if input.cpu_attacker {
        multiplier = multiplier * difficulty_scalar(input.difficulty);
    }
    Damage {
        value: multiplier.scale_floor(input.attack).max(1),
        advantage,
    }
}
