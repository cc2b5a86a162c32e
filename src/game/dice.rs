use rand::Rng;

/// Source of the game's chance: the two movement dice and the company
/// spinner. Injected into the engine so tests can script exact rolls.
pub trait Dice {
    /// Roll two six-sided dice.
    fn roll_pair(&mut self) -> (u8, u8);

    /// Spin the company wheel: uniform 1..=16, fresh every landing.
    fn spin(&mut self) -> u32;
}

/// The real thing, backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomDice;

impl Dice for RandomDice {
    fn roll_pair(&mut self) -> (u8, u8) {
        let mut rng = rand::thread_rng();
        (rng.gen_range(1..=6), rng.gen_range(1..=6))
    }

    fn spin(&mut self) -> u32 {
        rand::thread_rng().gen_range(1..=16)
    }
}
