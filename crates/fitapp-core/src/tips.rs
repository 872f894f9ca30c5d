//! Motivational tips shown on the home screen.
//!
//! Selection takes the random source as a parameter so callers can seed it.

use rand::Rng;

pub const TIPS: [&str; 5] = [
    "Consistency is key to achieving your fitness goals!",
    "Remember to stay hydrated throughout your workouts.",
    "Rest days are just as important as workout days.",
    "Small progress is still progress. Keep going!",
    "Focus on your form to prevent injuries and maximize results.",
];

/// Pick one tip uniformly at random.
pub fn pick_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TIPS[rng.gen_range(0..TIPS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn seeded_selection_is_repeatable() {
        let mut a = Pcg64::seed_from_u64(42);
        let mut b = Pcg64::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(pick_tip(&mut a), pick_tip(&mut b));
        }
    }

    #[test]
    fn every_tip_is_reachable() {
        let mut rng = Pcg64::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_tip(&mut rng));
        }
        assert_eq!(seen.len(), TIPS.len());
    }
}
