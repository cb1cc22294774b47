mod damage;
mod fraction;

pub use damage::{
    Advantage,
    Damage,
    DamageInput,
    compute_damage,
};
pub use fraction::Fraction;
